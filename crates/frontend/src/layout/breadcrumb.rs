use crate::layout::global_context::AppGlobalContext;
use crate::layout::route_tabs_layout::LocaleMenu;
use crate::shared::locale::{format_message, menu_chain, MenuItem};
use leptos::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreadcrumbItem {
    pub path: String,
    pub name: String,
}

/// Home first, then every menu item on the way to `pathname`.
pub fn breadcrumb_items(menu: &[MenuItem], pathname: &str) -> Vec<BreadcrumbItem> {
    let home = BreadcrumbItem {
        path: "/".to_string(),
        name: format_message("menu.home"),
    };
    std::iter::once(home)
        .chain(menu_chain(menu, pathname).into_iter().map(|item| BreadcrumbItem {
            path: item.path.clone(),
            name: item.name.clone(),
        }))
        .collect()
}

/// Only the first item is a link; the rest are plain text.
#[component]
pub fn Breadcrumb(menu: LocaleMenu) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let items = Memo::new(move |_| {
        let pathname = ctx.pathname.get();
        breadcrumb_items(&menu.get(), &pathname)
    });

    view! {
        <nav class="breadcrumb" aria-label="breadcrumb">
            {move || {
                items
                    .get()
                    .into_iter()
                    .enumerate()
                    .map(|(index, item)| {
                        let separator = (index > 0)
                            .then(|| view! { <span class="breadcrumb__separator">"/"</span> });
                        let label = if index == 0 {
                            let path = item.path.clone();
                            view! {
                                <a
                                    class="breadcrumb__link"
                                    href=item.path
                                    on:click=move |ev| {
                                        ev.prevent_default();
                                        ctx.navigate(&path);
                                    }
                                >
                                    {item.name}
                                </a>
                            }
                            .into_any()
                        } else {
                            view! { <span class="breadcrumb__item">{item.name}</span> }.into_any()
                        };
                        view! { {separator} {label} }
                    })
                    .collect_view()
            }}
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::locale::locale_routes;
    use contracts::shared::routes::RouteDef;

    fn menu() -> Vec<MenuItem> {
        let routes = vec![
            RouteDef::new("/welcome").name("welcome"),
            RouteDef::new("/admin")
                .name("admin")
                .routes(vec![RouteDef::new("/admin/sub-page").name("sub-page")]),
        ];
        locale_routes(&routes, None, &format_message)
    }

    #[test]
    fn test_nested_breadcrumb() {
        let names: Vec<_> = breadcrumb_items(&menu(), "/admin/sub-page")
            .into_iter()
            .map(|item| item.name)
            .collect();
        assert_eq!(names, vec!["Home", "Admin", "Sub Page"]);
    }

    #[test]
    fn test_unknown_path_only_has_home() {
        let items = breadcrumb_items(&menu(), "/missing");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].path, "/");
    }
}
