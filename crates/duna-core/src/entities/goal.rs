use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

fn default_unit() -> String {
    "tasks".to_string()
}

/// A user-level progress target, unrelated to any single task.
///
/// Progress is display-only; the client never updates `current_value`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Goal {
    pub id: i64,
    pub title: String,
    pub target_value: u32,
    #[serde(default)]
    pub current_value: u32,
    #[serde(default = "default_unit")]
    pub unit: String,
}

impl Goal {
    /// Fraction of the target reached, clamped to `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.target_value == 0 {
            return 1.0;
        }
        (f64::from(self.current_value) / f64::from(self.target_value)).clamp(0.0, 1.0)
    }
}
