//! PageTabs - tab bar over the visited routes.
//!
//! Owns the [`TabRegistry`] of the tabbed layout: every navigation opens (or
//! re-activates) a tab, and tab clicks / closes / context menu actions
//! mutate the registry and then navigate to whatever tab ended up active.

use super::context_menu::TabMenuAction;
use super::page::TabPage;
use super::registry::TabRegistry;
use super::route_tab::{resolve_route_tab, TabContent};
use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::shared::locale::{format_message, MenuItem};
use contracts::shared::settings::RouteTabsMode;
use leptos::ev;
use leptos::prelude::*;
use std::sync::Arc;

pub type PageTabRegistry = TabRegistry<TabContent>;

/// Where the context menu is open: tab key and viewport coordinates.
#[derive(Debug, Clone, PartialEq)]
struct ContextMenuAnchor {
    key: String,
    x: i32,
    y: i32,
}

#[derive(Clone, Copy)]
struct PageTabsState {
    registry: RwSignal<PageTabRegistry>,
    context_menu: RwSignal<Option<ContextMenuAnchor>>,
    ctx: AppGlobalContext,
}

impl PageTabsState {
    fn switch(&self, key: &str) {
        let mut changed = false;
        self.registry.maybe_update(|registry| {
            changed = registry.switch(key);
            changed
        });
        if changed {
            self.follow_active();
        }
    }

    fn close(&self, key: &str) {
        self.run(TabMenuAction::CloseCurrent, key);
    }

    fn run(&self, action: TabMenuAction, key: &str) {
        log::debug!("tab action {:?} on '{}'", action, key);
        let mut changed = false;
        self.registry.maybe_update(|registry| {
            changed = action.is_enabled(registry, key) && action.apply(registry, key);
            changed
        });
        if changed {
            self.follow_active();
        }
    }

    /// Navigates to the pathname of the active tab.
    fn follow_active(&self) {
        let pathname = self.registry.with_untracked(|registry| {
            registry
                .active_tab()
                .map(|tab| tab.content.pathname.clone())
        });
        if let Some(pathname) = pathname {
            self.ctx.navigate(&pathname);
        }
    }
}

#[component]
pub fn PageTabs(
    mode: RouteTabsMode,
    #[prop(into)] fixed: Signal<bool>,
    menu: Arc<Vec<MenuItem>>,
    render_page: fn(&str) -> AnyView,
) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let state = PageTabsState {
        registry: RwSignal::new(PageTabRegistry::new()),
        context_menu: RwSignal::new(None),
        ctx,
    };
    let registry = state.registry;
    let menu = StoredValue::new(menu);

    // Навигация → открыть (или активировать) таб
    Effect::new(move |_| {
        let pathname = ctx.pathname.get();
        let tab = menu.with_value(|menu| resolve_route_tab(menu, &pathname, mode));
        registry.maybe_update(|registry| {
            let opened = registry.open(&tab.key, &tab.title, tab.content.clone(), tab.closable);
            let retitled = registry.update_title(&tab.key, &tab.title);
            let refreshed = registry.update_content(&tab.key, tab.content);
            opened || retitled || refreshed
        });
    });

    let tab_headers = move || {
        registry.with(|registry| {
            registry
                .tabs()
                .iter()
                .map(|tab| (tab.key.clone(), tab.title.clone(), tab.closable))
                .collect::<Vec<_>>()
        })
    };
    let tab_keys = move || {
        registry.with(|registry| {
            registry
                .tabs()
                .iter()
                .map(|tab| tab.key.clone())
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="page-tabs" class:page-tabs--fixed=move || fixed.get()>
            <div class="page-tabs__bar" role="tablist">
                <For
                    each=tab_headers
                    key=|(key, title, _)| (key.clone(), title.clone())
                    children=move |(key, title, closable)| {
                        view! { <TabLabel tab_key=key title=title closable=closable state=state /> }
                    }
                />
            </div>
            <div class="page-tabs__content">
                <For
                    each=tab_keys
                    key=|key| key.clone()
                    children=move |key| {
                        view! { <TabPage tab_key=key registry=registry render_page=render_page /> }
                    }
                />
            </div>
            <TabContextMenu state=state />
        </div>
    }
}

#[component]
fn TabLabel(tab_key: String, title: String, closable: bool, state: PageTabsState) -> impl IntoView {
    let key = StoredValue::new(tab_key);
    let registry = state.registry;

    let is_active = Memo::new(move |_| registry.with(|r| key.with_value(|k| r.is_active(k))));
    // the only remaining tab cannot be closed even if its route allows it
    let show_close = Memo::new(move |_| closable && registry.with(|r| r.len() > 1));

    let on_click = move |_| key.with_value(|k| state.switch(k));
    let on_close = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        key.with_value(|k| state.close(k));
    };
    let on_context_menu = move |ev: ev::MouseEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        state.context_menu.set(Some(ContextMenuAnchor {
            key: key.get_value(),
            x: ev.client_x(),
            y: ev.client_y(),
        }));
    };

    view! {
        <div
            class="page-tabs__tab"
            class:page-tabs__tab--active=move || is_active.get()
            role="tab"
            aria-selected=move || is_active.get().to_string()
            on:click=on_click
            on:contextmenu=on_context_menu
        >
            <span class="page-tabs__title">{title}</span>
            <Show when=move || show_close.get()>
                <button class="page-tabs__close" aria-label="Close tab" on:click=on_close>
                    {icon("close")}
                </button>
            </Show>
        </div>
    }
}

#[component]
fn TabContextMenu(state: PageTabsState) -> impl IntoView {
    let context_menu = state.context_menu;
    let registry = state.registry;
    let dismiss = move || context_menu.set(None);

    move || {
        context_menu.get().map(|anchor| {
            let ContextMenuAnchor { key, x, y } = anchor;
            let key = StoredValue::new(key);
            let items = TabMenuAction::ALL
                .into_iter()
                .map(|action| {
                    let enabled = registry.with(|r| key.with_value(|k| action.is_enabled(r, k)));
                    let on_click = move |ev: ev::MouseEvent| {
                        ev.stop_propagation();
                        if enabled {
                            dismiss();
                            key.with_value(|k| state.run(action, k));
                        }
                    };
                    view! {
                        <li
                            class="tab-context-menu__item"
                            class:tab-context-menu__item--disabled=!enabled
                            aria-disabled=(!enabled).to_string()
                            on:click=on_click
                        >
                            {format_message(action.message_id())}
                        </li>
                    }
                })
                .collect_view();

            view! {
                <div
                    class="tab-context-menu__mask"
                    on:click=move |_| dismiss()
                    on:contextmenu=move |ev: ev::MouseEvent| {
                        ev.prevent_default();
                        dismiss();
                    }
                ></div>
                <ul
                    class="tab-context-menu"
                    role="menu"
                    style=format!("left: {}px; top: {}px;", x, y)
                    on:contextmenu=|ev: ev::MouseEvent| ev.prevent_default()
                >
                    {items}
                </ul>
            }
        })
    }
}
