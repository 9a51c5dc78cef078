use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::PageHeader;
use leptos::prelude::*;

#[component]
pub fn Welcome() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let user_name = move || ctx.current_user.with(|user| user.name.clone());

    view! {
        <div class="page">
            <PageHeader title="Welcome" subtitle="Open pages from the menu; each one gets its own tab.".to_string() />
            <p class="page__text">
                "Signed in as " <strong>{user_name}</strong> "."
            </p>
            <p class="page__text">
                "Right-click a tab to close it, the tabs after it, or every other tab."
            </p>
        </div>
    }
}
