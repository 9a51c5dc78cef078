use contracts::shared::settings::LayoutSettings;
use contracts::system::user::CurrentUser;
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    /// Initial layout settings handed to the frontend.
    #[serde(default)]
    pub settings: LayoutSettings,
    /// Signed-in user. Without it `/api/current_user` answers 401.
    #[serde(default)]
    pub user: Option<CurrentUser>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_static_dir() -> String {
    "dist".to_string()
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000
static_dir = "dist"

[settings]
navTheme = "dark"
title = "Admin Pro"
routeTabsMode = "route"
fixedPageTabs = true

[user]
name = "Admin"
userid = "00000001"
authority = ["admin"]
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                return parse_config(&contents);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    Ok(config)
}

/// Resolves `server.static_dir` relative to the executable directory
pub fn static_dir_path(config: &Config) -> PathBuf {
    let dir = PathBuf::from(&config.server.static_dir);
    if dir.is_absolute() {
        return dir;
    }

    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|exe_dir| exe_dir.join(&dir)))
        .filter(|resolved| resolved.exists())
        .unwrap_or(dir)
}
