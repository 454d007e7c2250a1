use chrono::{DateTime, FixedOffset};
use duna_core::entities::{Goal, Task};
use duna_view::DeadlineUrgency;
use serde::Serialize;

use crate::output::Tabular;

/// One line of the task list: the task plus what the card shows for it.
#[derive(Debug, Serialize)]
pub struct TaskRow {
    #[serde(flatten)]
    pub task: Task,
    pub urgency: String,
    pub days_left: Option<i64>,
    pub subtasks_done: usize,
}

impl TaskRow {
    #[must_use]
    pub fn new(task: Task, now: DateTime<FixedOffset>) -> Self {
        let urgency = DeadlineUrgency::classify(task.deadline, now);
        let (subtasks_done, _) = task.subtask_progress();
        Self {
            urgency: urgency.label(),
            days_left: urgency.days_left(),
            subtasks_done,
            task,
        }
    }

    pub fn all(tasks: impl IntoIterator<Item = Task>, now: DateTime<FixedOffset>) -> Vec<Self> {
        tasks.into_iter().map(|task| Self::new(task, now)).collect()
    }
}

impl Tabular for TaskRow {
    fn headers() -> &'static [&'static str] {
        &["id", "status", "priority", "title", "due", "category", "subtasks", "repeats"]
    }

    fn row(&self) -> Vec<String> {
        let task = &self.task;
        let due = if task.is_pending() {
            self.urgency.clone()
        } else {
            String::from("-")
        };
        let subtasks = if task.subtasks.is_empty() {
            String::from("-")
        } else {
            format!("{}/{}", self.subtasks_done, task.subtasks.len())
        };
        vec![
            task.id.to_string(),
            task.status.as_str().to_string(),
            task.priority.as_str().to_string(),
            task.title.clone(),
            due,
            task.category.clone().unwrap_or_else(|| String::from("-")),
            subtasks,
            task.recurrence.to_string(),
        ]
    }
}

#[derive(Debug, Serialize)]
pub struct GoalRow {
    #[serde(flatten)]
    pub goal: Goal,
    pub progress_percent: u32,
}

impl From<Goal> for GoalRow {
    fn from(goal: Goal) -> Self {
        // progress() is clamped to [0, 1].
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let progress_percent = (goal.progress() * 100.0).round() as u32;
        Self {
            goal,
            progress_percent,
        }
    }
}

impl Tabular for GoalRow {
    fn headers() -> &'static [&'static str] {
        &["id", "title", "progress", "target", "done"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.goal.id.to_string(),
            self.goal.title.clone(),
            format!("{}%", self.progress_percent),
            format!("{} {}", self.goal.target_value, self.goal.unit),
            self.goal.current_value.to_string(),
        ]
    }
}
