//! Content area of the shell: tabbed or plain.

use crate::layout::footer::GlobalFooter;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::PageTabs;
use crate::shared::components::PageLoading;
use crate::shared::locale::{format_message, locale_routes, MemoizedOne, MenuItem};
use contracts::shared::routes::RouteDef;
use contracts::shared::settings::RouteTabsMode;
use leptos::prelude::*;
use std::sync::Arc;

/// Route definitions plus the cached localized menu built from them.
///
/// Re-localization only happens when the definitions change structurally.
#[derive(Clone, Copy)]
pub struct LocaleMenu {
    routes: StoredValue<Vec<RouteDef>>,
    cache: StoredValue<MemoizedOne<Vec<RouteDef>, Vec<MenuItem>>>,
}

impl LocaleMenu {
    pub fn new(routes: Vec<RouteDef>) -> Self {
        Self {
            routes: StoredValue::new(routes),
            cache: StoredValue::new(MemoizedOne::new()),
        }
    }

    pub fn routes(&self) -> StoredValue<Vec<RouteDef>> {
        self.routes
    }

    pub fn get(&self) -> Arc<Vec<MenuItem>> {
        let mut localized = None;
        self.cache.update_value(|cache| {
            localized = Some(self.routes.with_value(|routes| {
                cache.get_or_compute(routes, |routes| locale_routes(routes, None, &format_message))
            }));
        });
        localized.unwrap_or_default()
    }
}

/// Decides how page content is shown.
///
/// - tabs enabled, menu still loading → loading placeholder
/// - tabs enabled → [`PageTabs`]
/// - tabs disabled → the current page wrapped in the footer
#[component]
pub fn RouteTabsLayout(
    #[prop(into)] mode: Signal<Option<RouteTabsMode>>,
    #[prop(into)] fixed_page_tabs: Signal<bool>,
    #[prop(into)] menu_loading: Signal<bool>,
    menu: LocaleMenu,
    render_page: fn(&str) -> AnyView,
) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    move || match mode.get() {
        Some(_) if menu_loading.get() => view! { <PageLoading /> }.into_any(),
        Some(mode) => {
            log::debug!("RouteTabsLayout: tabs mode '{}'", mode.as_str());
            view! {
                <PageTabs
                    mode=mode
                    fixed=fixed_page_tabs
                    menu=menu.get()
                    render_page=render_page
                />
            }
            .into_any()
        }
        None => view! {
            <GlobalFooter>
                {move || render_page(&ctx.pathname.get())}
            </GlobalFooter>
        }
        .into_any(),
    }
}
