use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

use crate::entities::Subtask;
use crate::enums::{Priority, Recurrence, TaskStatus};

/// Server-assigned task identifier.
pub type TaskId = i64;

/// A unit of work owned by the current user.
///
/// `order` is only meaningful among pending tasks. `days_until_deadline` and
/// `status_label` are hints computed by the server at response time; the
/// client never relies on them for classification.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub deadline: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub category: Option<String>,
    #[serde(default)]
    pub recurrence: Recurrence,
    #[serde(default)]
    pub order: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub subtasks: Vec<Subtask>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_until_deadline: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_label: Option<String>,
}

impl Task {
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.status.is_pending()
    }

    /// Number of completed subtasks and the total, for checklist progress.
    #[must_use]
    pub fn subtask_progress(&self) -> (usize, usize) {
        let done = self
            .subtasks
            .iter()
            .filter(|subtask| subtask.status == TaskStatus::Completed)
            .count();
        (done, self.subtasks.len())
    }
}

/// The backend stores "no category" as an empty string.
fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|value| !value.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_minimal_backend_payload() {
        let task: Task = serde_json::from_value(serde_json::json!({
            "id": 7,
            "title": "Read chapter 3",
            "created_at": "2026-03-01T09:00:00Z",
            "updated_at": "2026-03-01T09:00:00Z"
        }))
        .unwrap();

        assert_eq!(task.id, 7);
        assert_eq!(task.description, "");
        assert_eq!(task.status, TaskStatus::Pending);
        assert_eq!(task.priority, Priority::Medium);
        assert_eq!(task.recurrence, Recurrence::None);
        assert!(task.deadline.is_none());
        assert!(task.subtasks.is_empty());
    }

    #[test]
    fn empty_category_becomes_none() {
        let task: Task = serde_json::from_value(serde_json::json!({
            "id": 1,
            "title": "x",
            "category": "",
            "created_at": "2026-03-01T09:00:00Z",
            "updated_at": "2026-03-01T09:00:00Z"
        }))
        .unwrap();
        assert!(task.category.is_none());
    }

    #[test]
    fn subtask_progress_counts_completed() {
        let now = Utc::now();
        let subtask = |id, status| Subtask {
            id,
            title: format!("step {id}"),
            status,
            order: 0,
            created_at: None,
            updated_at: None,
        };
        let task = Task {
            id: 1,
            title: "x".into(),
            description: String::new(),
            status: TaskStatus::Pending,
            priority: Priority::Low,
            deadline: None,
            category: None,
            recurrence: Recurrence::None,
            order: 0,
            created_at: now,
            updated_at: now,
            subtasks: vec![
                subtask(1, TaskStatus::Completed),
                subtask(2, TaskStatus::Pending),
                subtask(3, TaskStatus::Completed),
            ],
            days_until_deadline: None,
            status_label: None,
        };
        assert_eq!(task.subtask_progress(), (2, 3));
    }
}
