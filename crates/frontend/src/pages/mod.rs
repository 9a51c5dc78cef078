//! Page registry - маппинг pathname → View.
//!
//! Единственное место, где pathname сопоставляется с компонентом страницы.
//! Используется и табами, и режимом без табов.

pub mod admin;
pub mod table_list;
pub mod welcome;

use crate::shared::authorized::Exception;
use crate::shared::locale::format_message;
use contracts::shared::routes::match_path;
use leptos::prelude::*;

/// Рендерит страницу по pathname. Unknown paths render the 404 page.
pub fn render_page(pathname: &str) -> AnyView {
    if match_path("/welcome", pathname).is_some() {
        return view! { <welcome::Welcome /> }.into_any();
    }
    if match_path("/admin", pathname).is_some() {
        return view! { <admin::Admin /> }.into_any();
    }
    if match_path("/admin/sub-page", pathname).is_some() {
        return view! { <admin::SubPage /> }.into_any();
    }
    if match_path("/list/table-list", pathname).is_some() {
        return view! { <table_list::TableList /> }.into_any();
    }
    if let Some(params) = match_path("/list/:id", pathname) {
        let id = params.get("id").cloned().unwrap_or_default();
        return view! { <table_list::ListDetail id=id /> }.into_any();
    }

    log::warn!("no page for '{}'", pathname);
    view! {
        <Exception
            status="404"
            title=format_message("exception.404.title")
            description=format_message("exception.404.description")
        />
    }
    .into_any()
}
