use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Aggregate productivity counters maintained by the backend (`productivity/me`).
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProductivityStats {
    #[serde(default)]
    pub total_tasks_completed: u32,
    #[serde(default)]
    pub total_study_minutes: u32,
    #[serde(default)]
    pub current_streak: u32,
    #[serde(default)]
    pub last_activity_date: Option<NaiveDate>,
}
