use contracts::shared::settings::LayoutSettings;
use contracts::system::user::CurrentUser;
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// GET JSON helper.
async fn get_json<T>(path: &str) -> Result<T, String>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let response = Request::get(&api_url(path))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Request {} failed: {}", path, response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Get current user info
pub async fn fetch_current_user() -> Result<CurrentUser, String> {
    get_json("/api/current_user").await
}

/// Get the initial layout settings
pub async fn fetch_settings() -> Result<LayoutSettings, String> {
    get_json("/api/settings").await
}
