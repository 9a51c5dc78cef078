use crate::layout::global_context::AppGlobalContext;
use crate::layout::BasicLayout;
use crate::pages::render_page;
use crate::shared::components::PageLoading;
use crate::system::api;
use contracts::shared::routes::RouteDef;
use contracts::shared::settings::LayoutSettings;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Route where `/` lands.
pub const HOME_PATH: &str = "/welcome";

/// Route definition tree of the application.
///
/// `/` has no name, so it never shows up in the menu or as a tab.
pub fn route_tree() -> Vec<RouteDef> {
    vec![
        RouteDef::new("/"),
        RouteDef::new("/welcome").name("welcome").icon("smile").pinned(),
        RouteDef::new("/admin")
            .name("admin")
            .icon("crown")
            .authority(["admin"])
            .routes(vec![RouteDef::new("/admin/sub-page").name("sub-page")]),
        RouteDef::new("/list").name("list").icon("table").routes(vec![
            RouteDef::new("/list/table-list").name("table-list"),
            RouteDef::new("/list/:id").name("detail").hidden(),
        ]),
    ]
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    // Initialize router integration. This runs once when the component is created.
    ctx.init_router_integration();
    ctx.fetch_current_user();

    Effect::new(move |_| {
        if ctx.pathname.get() == "/" {
            ctx.redirect(HOME_PATH);
        }
    });

    let settings = RwSignal::new(None::<LayoutSettings>);
    spawn_local(async move {
        let loaded = match api::fetch_settings().await {
            Ok(s) => s,
            Err(e) => {
                log::warn!("failed to fetch settings, using defaults: {}", e);
                LayoutSettings::default()
            }
        };
        settings.set(Some(loaded));
    });

    view! {
        {move || match settings.get() {
            Some(settings) => view! {
                <BasicLayout routes=route_tree() settings=settings render_page=render_page />
            }
            .into_any(),
            None => view! { <PageLoading /> }.into_any(),
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::tabs::route_tab::resolve_route_tab;
    use crate::shared::locale::{format_message, locale_routes};
    use contracts::shared::routes::{authority_for_path, route_chain};
    use contracts::shared::settings::RouteTabsMode;

    #[test]
    fn test_root_has_no_name() {
        let routes = route_tree();
        let chain = route_chain(&routes, "/");
        assert_eq!(chain.len(), 1);
        assert_eq!(chain[0].name, None);
    }

    #[test]
    fn test_home_path_opens_welcome_tab() {
        let menu = locale_routes(&route_tree(), None, &format_message);
        let tab = resolve_route_tab(&menu, HOME_PATH, RouteTabsMode::Route);
        assert_eq!(tab.key, "/welcome");
        assert_eq!(tab.title, "Welcome");
        assert!(!tab.closable);
    }

    #[test]
    fn test_admin_pages_require_admin() {
        let routes = route_tree();
        let required = vec!["admin".to_string()];
        assert_eq!(authority_for_path(&routes, "/admin/sub-page"), Some(required.as_slice()));
        assert_eq!(authority_for_path(&routes, "/list/table-list"), None);
    }

    #[test]
    fn test_detail_route_is_hidden() {
        let routes = route_tree();
        let chain = route_chain(&routes, "/list/42");
        let detail = chain.last().expect("detail route");
        assert_eq!(detail.name.as_deref(), Some("detail"));
        assert!(detail.hide_in_menu);
    }
}
