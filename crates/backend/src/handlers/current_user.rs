use axum::extract::State;
use axum::Json;
use contracts::system::user::CurrentUser;

use crate::shared::error::ApiError;
use crate::AppState;

/// GET /api/current_user
pub async fn get_current_user(State(state): State<AppState>) -> Result<Json<CurrentUser>, ApiError> {
    match &state.config.user {
        Some(user) => Ok(Json(user.clone())),
        None => Err(ApiError::Unauthorized),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::parse_config;
    use std::sync::Arc;

    fn state(contents: &str) -> AppState {
        AppState {
            config: Arc::new(parse_config(contents).unwrap()),
        }
    }

    #[tokio::test]
    async fn test_returns_configured_user() {
        let state = state("[server]\n[user]\nname = \"Serati Ma\"\nauthority = [\"admin\", \"user\"]\n");
        let Json(user) = get_current_user(State(state)).await.unwrap();
        assert_eq!(user.name, "Serati Ma");
        assert_eq!(user.authority, vec!["admin".to_string(), "user".to_string()]);
    }

    #[tokio::test]
    async fn test_no_user_is_unauthorized() {
        let result = get_current_user(State(state("[server]\n"))).await;
        assert!(matches!(result, Err(ApiError::Unauthorized)));
    }
}
