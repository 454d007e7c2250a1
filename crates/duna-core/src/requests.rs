//! Request payloads sent to the Duna REST API.
//!
//! Payloads with user-entered content carry a `validate()` method. Validation
//! failures are caught before a request is issued and never reach the network.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Task, TaskId};
use crate::enums::{Priority, Recurrence, TaskStatus};
use crate::errors::CoreError;

/// Task-shaped draft used for creation and full updates (`PUT tasks/{id}/`).
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub deadline: Option<DateTime<Utc>>,
    /// Sent as an empty string when absent, which the backend stores as "no category".
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub recurrence: Recurrence,
}

impl TaskDraft {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Draft carrying the current field values of an existing task, for edits.
    #[must_use]
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone(),
            priority: task.priority,
            status: task.status,
            deadline: task.deadline,
            category: task.category.clone().unwrap_or_default(),
            recurrence: task.recurrence,
        }
    }

    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] if the title is blank.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.title.trim().is_empty() {
            return Err(CoreError::validation("task title must not be empty"));
        }
        Ok(())
    }
}

/// Body of `POST tasks/update_order/`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct UpdateOrderRequest {
    pub order: Vec<TaskId>,
}

/// Body of `POST tasks/{id}/subtasks/`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewSubtask {
    pub title: String,
}

impl NewSubtask {
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] if the title is blank.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.title.trim().is_empty() {
            return Err(CoreError::validation("subtask title must not be empty"));
        }
        Ok(())
    }
}

/// Body of `PUT tasks/{id}/subtasks/{subtask_id}/`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SubtaskStatusUpdate {
    pub status: TaskStatus,
}

/// Body of `POST tasks/{id}/time-logs/`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewTimeLog {
    pub duration_minutes: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_minutes: Option<u32>,
    #[serde(default)]
    pub notes: String,
}

impl NewTimeLog {
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] if the duration is zero.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.duration_minutes == 0 {
            return Err(CoreError::validation(
                "duration must be a positive number of minutes",
            ));
        }
        Ok(())
    }
}

/// Body for creating a note or a comment.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewNote {
    pub content: String,
}

impl NewNote {
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] if the content is blank.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.content.trim().is_empty() {
            return Err(CoreError::validation("note content must not be empty"));
        }
        Ok(())
    }
}

/// Body of `POST goals/`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewGoal {
    pub title: String,
    pub target_value: u32,
    #[serde(default)]
    pub current_value: u32,
    pub unit: String,
}

impl NewGoal {
    /// Goal with the defaults the settings screen used: target 10, unit "tasks".
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            target_value: 10,
            current_value: 0,
            unit: "tasks".into(),
        }
    }

    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] if the title is blank or the target is zero.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.title.trim().is_empty() {
            return Err(CoreError::validation("goal title must not be empty"));
        }
        if self.target_value == 0 {
            return Err(CoreError::validation("goal target must be positive"));
        }
        Ok(())
    }
}

/// Body of `PUT theme/me/`. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ThemeUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dark_mode: Option<bool>,
}

/// Body of `POST filter-presets/`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewFilterPreset {
    pub name: String,
    pub priority_filter: String,
    pub category_filter: String,
    pub status_filter: String,
}

impl NewFilterPreset {
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] if the name is blank.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.name.trim().is_empty() {
            return Err(CoreError::validation("preset name must not be empty"));
        }
        Ok(())
    }
}

/// Body of `POST auth/token/`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Body of `POST auth/token/refresh/`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RefreshRequest {
    pub refresh: String,
}

/// Body of `POST auth/register/`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub password2: String,
}

impl RegisterRequest {
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] if a field is blank or the passwords differ.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.username.trim().is_empty() {
            return Err(CoreError::validation("username must not be empty"));
        }
        if self.password.is_empty() {
            return Err(CoreError::validation("password must not be empty"));
        }
        if self.password != self.password2 {
            return Err(CoreError::validation("passwords must match"));
        }
        Ok(())
    }
}
