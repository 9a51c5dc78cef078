//! Menu localization.
//!
//! `locale_routes` turns the raw route definitions into the localized menu
//! tree used by the sidebar, the breadcrumb and the tab titles.

pub mod memo;
pub mod messages;

pub use memo::MemoizedOne;
pub use messages::format_message;

use contracts::shared::routes::{match_path, RouteDef};

/// Locale prefix of top-level menu entries.
pub const ROOT_LOCALE: &str = "menu";

/// Localized menu node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub path: String,
    /// Display name resolved through the message catalogue.
    pub name: String,
    /// Full message id, e.g. `menu.admin.sub-page`.
    pub locale: String,
    pub icon: Option<String>,
    pub authority: Option<Vec<String>>,
    pub hide_in_menu: bool,
    pub closable: bool,
    pub children: Vec<MenuItem>,
}

/// Localizes a route tree.
///
/// Routes without a name token are dropped together with their subtree.
/// The locale id of a node is `<parent locale>.<name>`; top-level nodes use
/// [`ROOT_LOCALE`] as the parent.
pub fn locale_routes<F>(routes: &[RouteDef], parent_locale: Option<&str>, format: &F) -> Vec<MenuItem>
where
    F: Fn(&str) -> String,
{
    routes
        .iter()
        .filter_map(|route| {
            let name = route.name.as_deref()?;
            let locale = format!("{}.{}", parent_locale.unwrap_or(ROOT_LOCALE), name);
            let children = locale_routes(&route.routes, Some(&locale), format);
            Some(MenuItem {
                path: route.path.clone(),
                name: format(&locale),
                locale,
                icon: route.icon.clone(),
                authority: route.authority.clone(),
                hide_in_menu: route.hide_in_menu,
                closable: route.closable,
                children,
            })
        })
        .collect()
}

/// Chain of menu items from a root down to the deepest item whose path
/// matches `pathname`.
pub fn menu_chain<'a>(menu: &'a [MenuItem], pathname: &str) -> Vec<&'a MenuItem> {
    for item in menu {
        let nested = menu_chain(&item.children, pathname);
        if !nested.is_empty() {
            let mut chain = vec![item];
            chain.extend(nested);
            return chain;
        }
        if match_path(&item.path, pathname).is_some() {
            return vec![item];
        }
    }
    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upper(id: &str) -> String {
        id.to_uppercase()
    }

    #[test]
    fn test_locale_ids_follow_parent_chain() {
        let routes = vec![
            RouteDef::new("/welcome").name("welcome"),
            RouteDef::new("/admin")
                .name("admin")
                .routes(vec![RouteDef::new("/admin/sub-page").name("sub-page")]),
        ];
        let menu = locale_routes(&routes, None, &upper);

        assert_eq!(menu.len(), 2);
        assert_eq!(menu[0].locale, "menu.welcome");
        assert_eq!(menu[0].name, "MENU.WELCOME");
        assert_eq!(menu[1].children[0].locale, "menu.admin.sub-page");
        assert_eq!(menu[1].children[0].name, "MENU.ADMIN.SUB-PAGE");
    }

    #[test]
    fn test_nameless_routes_are_dropped_with_subtree() {
        let routes = vec![
            RouteDef::new("/").routes(vec![RouteDef::new("/inner").name("inner")]),
            RouteDef::new("/list").name("list").routes(vec![
                RouteDef::new("/list/raw"),
                RouteDef::new("/list/table").name("table"),
            ]),
        ];
        let menu = locale_routes(&routes, None, &upper);

        assert_eq!(menu.len(), 1);
        assert_eq!(menu[0].path, "/list");
        let children: Vec<_> = menu[0].children.iter().map(|c| c.path.as_str()).collect();
        assert_eq!(children, vec!["/list/table"]);
        assert!(menu_chain(&menu, "/inner").is_empty());
    }

    #[test]
    fn test_flags_are_carried_over() {
        let routes = vec![RouteDef::new("/welcome")
            .name("welcome")
            .icon("smile")
            .pinned()
            .hidden()
            .authority(["admin"])];
        let item = &locale_routes(&routes, None, &upper)[0];
        assert!(!item.closable);
        assert!(item.hide_in_menu);
        assert_eq!(item.icon.as_deref(), Some("smile"));
        assert_eq!(item.authority, Some(vec!["admin".to_string()]));
    }

    #[test]
    fn test_menu_chain_finds_nested_param_route() {
        let routes = vec![RouteDef::new("/list").name("list").routes(vec![
            RouteDef::new("/list/:id").name("detail").hidden(),
        ])];
        let menu = locale_routes(&routes, None, &upper);
        let chain = menu_chain(&menu, "/list/12");
        let locales: Vec<_> = chain.iter().map(|item| item.locale.as_str()).collect();
        assert_eq!(locales, vec!["menu.list", "menu.list.detail"]);
    }
}
