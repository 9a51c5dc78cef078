pub mod breadcrumb;
pub mod footer;
pub mod global_context;
pub mod header;
pub mod left;
pub mod route_tabs_layout;
pub mod setting_drawer;
pub mod tabs;

use crate::shared::authorized::{check_authority, Authorized};
use breadcrumb::Breadcrumb;
use contracts::shared::routes::{authority_for_path, RouteDef};
use contracts::shared::settings::{ContentWidth, LayoutSettings};
use global_context::AppGlobalContext;
use gloo_timers::future::TimeoutFuture;
use header::Header;
use left::{Left, Sidebar};
use leptos::prelude::*;
use leptos::task::spawn_local;
use route_tabs_layout::{LocaleMenu, RouteTabsLayout};
use setting_drawer::SettingDrawer;

/// Artificial delay before the menu counts as loaded.
const MENU_LOADING_DELAY_MS: u32 = 2000;

/// Main application shell.
///
/// Layout structure:
/// ```text
/// +-----------+------------------------------+
/// |           |           Header             |
/// |  Sidebar  +------------------------------+
/// |  (Left)   |  Breadcrumb                  |
/// |           |  RouteTabsLayout (content)   |
/// +-----------+------------------------------+
///                              SettingDrawer
/// ```
///
/// `settings` only seeds local state; the drawer edits the local copy.
#[component]
pub fn BasicLayout(
    routes: Vec<RouteDef>,
    settings: LayoutSettings,
    render_page: fn(&str) -> AnyView,
) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let settings = RwSignal::new(settings);
    let settings_open = RwSignal::new(false);
    let menu_loading = RwSignal::new(true);
    let menu = LocaleMenu::new(routes);

    spawn_local(async move {
        TimeoutFuture::new(MENU_LOADING_DELAY_MS).await;
        log::debug!("menu data ready");
        menu_loading.set(false);
    });

    let route_tabs_mode = Memo::new(move |_| settings.with(|s| s.route_tabs_mode));
    let fixed_page_tabs = Memo::new(move |_| settings.with(|s| s.fixed_page_tabs));
    let fixed_header = Memo::new(move |_| settings.with(|s| s.fixed_header));
    let fix_siderbar = Memo::new(move |_| settings.with(|s| s.fix_siderbar));
    let nav_theme = Memo::new(move |_| settings.with(|s| s.nav_theme));
    let title = Memo::new(move |_| settings.with(|s| s.title.clone()));
    let content_fixed = Memo::new(move |_| settings.with(|s| s.content_width == ContentWidth::Fixed));

    let authorized = Memo::new(move |_| {
        let pathname = ctx.pathname.get();
        let required = menu
            .routes()
            .with_value(|routes| authority_for_path(routes, &pathname).map(|a| a.to_vec()));
        ctx.current_user
            .with(|user| check_authority(required.as_deref(), &user.authority))
    });

    view! {
        <div
            class="app-layout"
            class:app-layout--route-tabs=move || route_tabs_mode.get().is_some()
        >
            <Left fixed=fix_siderbar>
                <Sidebar menu=menu menu_loading=menu_loading nav_theme=nav_theme />
            </Left>

            <div class="app-main">
                <Header
                    title=title
                    fixed=fixed_header
                    menu_loading=menu_loading
                    settings_open=settings_open
                />
                <Breadcrumb menu=menu />
                <main class="app-content" class:app-content--fixed=move || content_fixed.get()>
                    <Authorized allowed=authorized>
                        <RouteTabsLayout
                            mode=route_tabs_mode
                            fixed_page_tabs=fixed_page_tabs
                            menu_loading=menu_loading
                            menu=menu
                            render_page=render_page
                        />
                    </Authorized>
                </main>
            </div>

            <SettingDrawer settings=settings open=settings_open />
        </div>
    }
}
