use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Server-side theme preferences (`theme/me`).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Theme {
    #[serde(default)]
    pub id: Option<i64>,
    pub primary_color: String,
    pub secondary_color: String,
    pub accent_color: String,
    pub font_family: String,
    #[serde(default)]
    pub dark_mode: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            id: None,
            primary_color: "#FF6B35".into(),
            secondary_color: "#004E89".into(),
            accent_color: "#1DD1A1".into(),
            font_family: "Inter".into(),
            dark_mode: false,
        }
    }
}
