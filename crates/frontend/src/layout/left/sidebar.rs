//! Sidebar component with collapsible menu groups.
//!
//! Renders the localized menu filtered by the current user's authority.
//! Items marked `hide_in_menu` are skipped but still resolve tab titles.

use crate::layout::global_context::AppGlobalContext;
use crate::layout::route_tabs_layout::LocaleMenu;
use crate::shared::authorized::filter_menu;
use crate::shared::components::PageLoading;
use crate::shared::icons::icon;
use crate::shared::locale::{menu_chain, MenuItem};
use contracts::shared::settings::NavTheme;
use leptos::prelude::*;

#[component]
pub fn Sidebar(
    menu: LocaleMenu,
    #[prop(into)] menu_loading: Signal<bool>,
    #[prop(into)] nav_theme: Signal<NavTheme>,
) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let visible_menu = Memo::new(move |_| {
        let authority = ctx.current_user.with(|user| user.authority.clone());
        filter_menu(&menu.get(), &authority)
    });

    // Paths on the way to the current location, used for highlighting and
    // for auto-expanding the group that contains the current page.
    let selected_paths = Memo::new(move |_| {
        let pathname = ctx.pathname.get();
        menu_chain(&menu.get(), &pathname)
            .into_iter()
            .map(|item| item.path.clone())
            .collect::<Vec<_>>()
    });

    let expanded_groups = RwSignal::new(Vec::<String>::new());
    Effect::new(move |_| {
        let selected = selected_paths.get();
        expanded_groups.update(|groups| {
            for path in selected {
                if !groups.contains(&path) {
                    groups.push(path);
                }
            }
        });
    });

    view! {
        <div class=move || {
            format!("app-sidebar__content app-sidebar__content--{}", nav_theme.get().as_str())
        }>
            <Show
                when=move || !menu_loading.get()
                fallback=|| view! { <PageLoading /> }
            >
                {move || {
                    visible_menu
                        .get()
                        .into_iter()
                        .filter(|item| !item.hide_in_menu)
                        .map(|item| view! { <SidebarItem item=item depth=0 selected_paths=selected_paths expanded_groups=expanded_groups /> })
                        .collect_view()
                }}
            </Show>
        </div>
    }
}

#[component]
fn SidebarItem(
    item: MenuItem,
    depth: usize,
    selected_paths: Memo<Vec<String>>,
    expanded_groups: RwSignal<Vec<String>>,
) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let children: Vec<MenuItem> = item
        .children
        .iter()
        .filter(|child| !child.hide_in_menu)
        .cloned()
        .collect();
    let has_children = !children.is_empty();
    let path = StoredValue::new(item.path.clone());

    let is_selected = move || path.with_value(|p| selected_paths.get().contains(p));
    let is_expanded = move || path.with_value(|p| expanded_groups.get().contains(p));
    let collapsed = move || ctx.collapsed.get();

    let on_click = move |_| {
        if has_children {
            let group = path.get_value();
            expanded_groups.update(move |groups| {
                if let Some(pos) = groups.iter().position(|g| g == &group) {
                    groups.remove(pos);
                } else {
                    groups.push(group);
                }
            });
        } else {
            path.with_value(|p| ctx.navigate(p));
        }
    };

    let icon_view = item.icon.as_deref().map(icon);
    let children = StoredValue::new(children);
    let name = item.name.clone();
    let title = item.name;

    view! {
        <div>
            <div
                class="app-sidebar__item"
                class:app-sidebar__item--active=move || !has_children && is_selected()
                class:app-sidebar__item--open=move || has_children && is_selected()
                style:padding-left=format!("{}px", 12 + depth * 16)
                title=title
                on:click=on_click
            >
                <div class="app-sidebar__item-content">
                    {icon_view}
                    <Show when=move || !collapsed()>
                        <span>{name.clone()}</span>
                    </Show>
                </div>
                {has_children.then(|| {
                    view! {
                        <div
                            class="app-sidebar__chevron"
                            class:app-sidebar__chevron--expanded=is_expanded
                        >
                            {icon("chevron-right")}
                        </div>
                    }
                })}
            </div>
            {has_children.then(|| {
                view! {
                    <Show when=move || is_expanded() && !collapsed()>
                        <div class="app-sidebar__children">
                            {children
                                .get_value()
                                .into_iter()
                                .map(|child| {
                                    view! {
                                        <SidebarItem
                                            item=child
                                            depth=depth + 1
                                            selected_paths=selected_paths
                                            expanded_groups=expanded_groups
                                        />
                                    }
                                    .into_any()
                                })
                                .collect_view()}
                        </div>
                    </Show>
                }
            })}
        </div>
    }
}
