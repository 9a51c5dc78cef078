use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

/// Sidebar column; narrows to icons when the menu is collapsed.
#[component]
pub fn Left(#[prop(into)] fixed: Signal<bool>, children: Children) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let is_collapsed = move || ctx.collapsed.get();

    view! {
        <aside
            data-zone="left"
            class="app-sidebar"
            class:app-sidebar--collapsed=is_collapsed
            class:app-sidebar--fixed=move || fixed.get()
        >
            {children()}
        </aside>
    }
}
