//! Pathname → tab resolution.
//!
//! Decides which tab a location belongs to, depending on [`RouteTabsMode`].

use crate::shared::locale::{format_message, menu_chain, MenuItem};
use contracts::shared::routes::match_path;
use contracts::shared::settings::RouteTabsMode;

/// What a tab renders: the pathname it was last opened with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabContent {
    pub pathname: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTab {
    pub key: String,
    pub title: String,
    pub closable: bool,
    pub content: TabContent,
}

/// Trims trailing slashes and makes sure the path is absolute.
pub fn normalize_pathname(pathname: &str) -> String {
    let trimmed = pathname.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}

/// Формирует заголовок detail-таба: «<title> · <identifier>».
pub fn detail_tab_label(title: &str, identifier: &str) -> String {
    format!("{} · {}", title, identifier)
}

pub fn resolve_route_tab(menu: &[MenuItem], pathname: &str, mode: RouteTabsMode) -> RouteTab {
    let pathname = normalize_pathname(pathname);
    let content = TabContent {
        pathname: pathname.clone(),
    };

    let Some(item) = menu_chain(menu, &pathname).last().copied() else {
        return RouteTab {
            key: pathname,
            title: format_message("exception.404.title"),
            closable: true,
            content,
        };
    };

    let (key, title) = match mode {
        RouteTabsMode::Route => (item.path.clone(), item.name.clone()),
        RouteTabsMode::Path => {
            let params = match_path(&item.path, &pathname).unwrap_or_default();
            let title = if params.is_empty() {
                item.name.clone()
            } else {
                // в порядке появления в шаблоне, а не по имени параметра
                let identifier: Vec<&str> = item
                    .path
                    .split('/')
                    .filter_map(|segment| segment.strip_prefix(':'))
                    .filter_map(|name| params.get(name).map(String::as_str))
                    .collect();
                detail_tab_label(&item.name, &identifier.join("/"))
            };
            (pathname, title)
        }
    };

    RouteTab {
        key,
        title,
        closable: item.closable,
        content,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::locale::locale_routes;
    use contracts::shared::routes::RouteDef;

    fn menu() -> Vec<MenuItem> {
        let routes = vec![
            RouteDef::new("/welcome").name("welcome").pinned(),
            RouteDef::new("/list").name("list").routes(vec![
                RouteDef::new("/list/table-list").name("table-list"),
                RouteDef::new("/list/:id").name("detail").hidden(),
            ]),
        ];
        locale_routes(&routes, None, &format_message)
    }

    #[test]
    fn test_route_mode_shares_tab_between_params() {
        let menu = menu();
        let first = resolve_route_tab(&menu, "/list/1", RouteTabsMode::Route);
        let second = resolve_route_tab(&menu, "/list/2/", RouteTabsMode::Route);

        assert_eq!(first.key, "/list/:id");
        assert_eq!(first.key, second.key);
        assert_eq!(first.title, "Detail");
        assert_eq!(second.content.pathname, "/list/2");
    }

    #[test]
    fn test_path_mode_keys_by_pathname() {
        let menu = menu();
        let first = resolve_route_tab(&menu, "/list/1", RouteTabsMode::Path);
        let second = resolve_route_tab(&menu, "/list/2", RouteTabsMode::Path);

        assert_eq!(first.key, "/list/1");
        assert_ne!(first.key, second.key);
        assert_eq!(first.title, "Detail · 1");
    }

    #[test]
    fn test_path_title_keeps_param_order() {
        let routes = vec![RouteDef::new("/a/:z/:y").name("pair")];
        let menu = locale_routes(&routes, None, &|id: &str| id.to_string());

        let tab = resolve_route_tab(&menu, "/a/1/2", RouteTabsMode::Path);
        assert_eq!(tab.title, "menu.pair · 1/2");
    }

    #[test]
    fn test_static_route_and_closable_flag() {
        let tab = resolve_route_tab(&menu(), "/welcome", RouteTabsMode::Path);
        assert_eq!(tab.key, "/welcome");
        assert_eq!(tab.title, "Welcome");
        assert!(!tab.closable);
    }

    #[test]
    fn test_unknown_path_gets_not_found_tab() {
        let tab = resolve_route_tab(&menu(), "/nope", RouteTabsMode::Route);
        assert_eq!(tab.key, "/nope");
        assert_eq!(tab.title, "404");
        assert!(tab.closable);
    }

    #[test]
    fn test_normalize_pathname() {
        assert_eq!(normalize_pathname(""), "/");
        assert_eq!(normalize_pathname("/"), "/");
        assert_eq!(normalize_pathname("list/"), "/list");
    }
}
