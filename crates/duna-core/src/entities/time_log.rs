use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Time spent against a task. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TimeLog {
    pub id: i64,
    pub duration_minutes: u32,
    #[serde(default)]
    pub estimated_minutes: Option<u32>,
    #[serde(default)]
    pub notes: String,
    pub logged_date: NaiveDate,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Totals over a task's time logs.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TimeLogSummary {
    pub entries: usize,
    pub spent_minutes: u64,
    pub estimated_minutes: u64,
}

impl TimeLogSummary {
    /// Sum durations; logs without an estimate contribute zero to the estimate.
    #[must_use]
    pub fn from_logs(logs: &[TimeLog]) -> Self {
        logs.iter().fold(Self::default(), |acc, log| Self {
            entries: acc.entries + 1,
            spent_minutes: acc.spent_minutes + u64::from(log.duration_minutes),
            estimated_minutes: acc.estimated_minutes
                + u64::from(log.estimated_minutes.unwrap_or(0)),
        })
    }
}
