use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

fn all() -> String {
    "all".to_string()
}

/// A named, saved combination of list filters. Each filter is `"all"` or a value.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct FilterPreset {
    pub id: i64,
    pub name: String,
    #[serde(default = "all")]
    pub priority_filter: String,
    #[serde(default = "all")]
    pub category_filter: String,
    #[serde(default = "all")]
    pub status_filter: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}
