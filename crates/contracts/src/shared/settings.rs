use serde::{Deserialize, Serialize};

/// Sidebar colour scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavTheme {
    #[default]
    Dark,
    Light,
}

impl NavTheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            NavTheme::Dark => "dark",
            NavTheme::Light => "light",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "light" => NavTheme::Light,
            _ => NavTheme::Dark,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentWidth {
    #[default]
    Fluid,
    Fixed,
}

impl ContentWidth {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentWidth::Fluid => "fluid",
            ContentWidth::Fixed => "fixed",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "fixed" => ContentWidth::Fixed,
            _ => ContentWidth::Fluid,
        }
    }
}

/// How visited routes are keyed into tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteTabsMode {
    /// One tab per route definition: `/list/1` and `/list/2` share a tab.
    Route,
    /// One tab per concrete pathname.
    Path,
}

impl RouteTabsMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RouteTabsMode::Route => "route",
            RouteTabsMode::Path => "path",
        }
    }

    /// Parses a select value; anything unknown disables tabs.
    pub fn parse_option(s: &str) -> Option<Self> {
        match s {
            "route" => Some(RouteTabsMode::Route),
            "path" => Some(RouteTabsMode::Path),
            _ => None,
        }
    }
}

/// Runtime-adjustable layout options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutSettings {
    pub nav_theme: NavTheme,
    pub content_width: ContentWidth,
    pub fixed_header: bool,
    pub fix_siderbar: bool,
    pub title: String,
    /// `None` renders pages without the tab bar.
    pub route_tabs_mode: Option<RouteTabsMode>,
    pub fixed_page_tabs: bool,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            nav_theme: NavTheme::Dark,
            content_width: ContentWidth::Fluid,
            fixed_header: false,
            fix_siderbar: false,
            title: "Admin Pro".to_string(),
            route_tabs_mode: Some(RouteTabsMode::Route),
            fixed_page_tabs: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings: LayoutSettings =
            serde_json::from_str(r#"{"navTheme":"light","routeTabsMode":"path"}"#).unwrap();
        assert_eq!(settings.nav_theme, NavTheme::Light);
        assert_eq!(settings.route_tabs_mode, Some(RouteTabsMode::Path));
        assert!(settings.fixed_page_tabs);
        assert_eq!(settings.title, "Admin Pro");
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let settings: LayoutSettings =
            serde_json::from_str(r##"{"primaryColor":"#13c2c2","layout":"top"}"##).unwrap();
        assert_eq!(settings, LayoutSettings::default());
    }

    #[test]
    fn test_tabs_mode_can_be_disabled() {
        let settings: LayoutSettings =
            serde_json::from_str(r#"{"routeTabsMode":null}"#).unwrap();
        assert_eq!(settings.route_tabs_mode, None);
        assert_eq!(RouteTabsMode::parse_option("off"), None);
        assert_eq!(RouteTabsMode::parse_option("route"), Some(RouteTabsMode::Route));
    }
}
