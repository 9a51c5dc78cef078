//! Authority checks for routes and menu items.

use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::HOME_PATH;
use crate::shared::locale::{format_message, MenuItem};
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

/// `true` if `current` satisfies `required`.
///
/// Missing or empty requirements are public; otherwise one shared role is
/// enough.
pub fn check_authority(required: Option<&[String]>, current: &[String]) -> bool {
    match required {
        None => true,
        Some(required) if required.is_empty() => true,
        Some(required) => required.iter().any(|role| current.contains(role)),
    }
}

/// Removes the menu items (and their subtrees) the user may not see.
pub fn filter_menu(menu: &[MenuItem], current: &[String]) -> Vec<MenuItem> {
    menu.iter()
        .filter(|item| check_authority(item.authority.as_deref(), current))
        .map(|item| MenuItem {
            children: filter_menu(&item.children, current),
            ..item.clone()
        })
        .collect()
}

/// Renders `children` when `allowed` holds, the 403 page otherwise.
#[component]
pub fn Authorized(
    #[prop(into)] allowed: Signal<bool>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <Show when=move || allowed.get() fallback=|| view! { <NoMatch /> }>
            {children()}
        </Show>
    }
}

#[component]
pub fn NoMatch() -> impl IntoView {
    view! {
        <Exception
            status="403"
            title=format_message("exception.403.title")
            description=format_message("exception.403.description")
        />
    }
}

/// Generic result page (403 / 404) with a link back home.
#[component]
pub fn Exception(
    status: &'static str,
    title: String,
    description: String,
) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div class="exception" data-status=status>
            <div class="exception__title">{title}</div>
            <div class="exception__description">{description}</div>
            <Button
                appearance=ButtonAppearance::Primary
                on_click=move |_| ctx.navigate(HOME_PATH)
            >
                {format_message("exception.back")}
            </Button>
        </div>
    }
}
