use serde::{Deserialize, Serialize};

/// Signed-in user as returned by `GET /api/current_user`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CurrentUser {
    pub name: String,
    pub avatar: Option<String>,
    pub userid: String,
    /// Role tags checked against route authorities, e.g. `["admin"]`.
    pub authority: Vec<String>,
    pub notify_count: u32,
    pub unread_count: u32,
}

impl CurrentUser {
    /// Placeholder used until the backend answers (or when it is down).
    pub fn guest() -> Self {
        Self {
            name: "Guest".to_string(),
            authority: vec!["guest".to_string()],
            ..Self::default()
        }
    }
}
