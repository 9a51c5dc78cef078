use axum::extract::State;
use axum::Json;
use contracts::shared::settings::LayoutSettings;

use crate::AppState;

/// GET /api/settings
pub async fn get_settings(State(state): State<AppState>) -> Json<LayoutSettings> {
    Json(state.config.settings.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::parse_config;
    use contracts::shared::settings::{NavTheme, RouteTabsMode};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_returns_configured_settings() {
        let config = parse_config(
            "[server]\n[settings]\nnavTheme = \"light\"\nrouteTabsMode = \"path\"\nfixedPageTabs = false\n",
        )
        .unwrap();
        let state = AppState {
            config: Arc::new(config),
        };

        let Json(settings) = get_settings(State(state)).await;
        assert_eq!(settings.nav_theme, NavTheme::Light);
        assert_eq!(settings.route_tabs_mode, Some(RouteTabsMode::Path));
        assert!(!settings.fixed_page_tabs);
        assert_eq!(settings.title, LayoutSettings::default().title);
    }
}
