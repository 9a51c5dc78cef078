use crate::shared::locale::format_message;
use leptos::prelude::*;
use thaw::Spinner;

/// Full-area spinner shown while the menu data is not ready.
#[component]
pub fn PageLoading() -> impl IntoView {
    view! {
        <div class="page-loading" aria-busy="true">
            <Spinner label=format_message("app.loading") />
        </div>
    }
}
