//! Nested and auxiliary resources reached through the store.
//!
//! None of these are cached locally; they share the store's error recording so
//! the UI has one place to read the last failure from.

use duna_core::entities::{
    Comment, FilterPreset, Goal, Note, ProductivityStats, TaskId, Theme, TimeLog, TimeLogSummary,
};
use duna_core::requests::{NewFilterPreset, NewGoal, NewNote, NewTimeLog, ThemeUpdate};

use crate::error::StoreError;
use crate::store::TaskStore;

/// Result of [`TaskStore::record_time`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedTime {
    /// The entry as the server stored it.
    pub log: TimeLog,
    /// The task's logs re-listed after the write, when that succeeded.
    pub logs: Option<Vec<TimeLog>>,
    /// Soft notification: the entry was saved but the re-list failed.
    pub warning: Option<String>,
}

impl RecordedTime {
    /// Totals over the re-listed logs.
    #[must_use]
    pub fn summary(&self) -> Option<TimeLogSummary> {
        self.logs.as_deref().map(TimeLogSummary::from_logs)
    }
}

impl TaskStore {
    // -- Time logs -----------------------------------------------------------

    /// # Errors
    ///
    /// [`StoreError::Validation`] for a zero duration, [`StoreError::Request`]
    /// if the backend rejects the entry.
    pub async fn log_time(&self, task_id: TaskId, entry: &NewTimeLog) -> Result<TimeLog, StoreError> {
        entry.validate()?;
        self.client
            .log_time(task_id, entry)
            .await
            .map_err(|e| self.fail(e, "Failed to log time"))
    }

    /// Log time, then re-list the task's logs.
    ///
    /// The re-list is best effort: its failure is reported in
    /// [`RecordedTime::warning`] and is not recorded as the last error.
    ///
    /// # Errors
    ///
    /// Same as [`TaskStore::log_time`].
    pub async fn record_time(
        &self,
        task_id: TaskId,
        entry: &NewTimeLog,
    ) -> Result<RecordedTime, StoreError> {
        let log = self.log_time(task_id, entry).await?;
        match self.client.time_logs(task_id).await {
            Ok(logs) => Ok(RecordedTime {
                log,
                logs: Some(logs),
                warning: None,
            }),
            Err(error) => {
                tracing::warn!(task_id, %error, "time logs not refreshed after write");
                let warning = format!(
                    "Time logged, but the log list could not be refreshed: {}",
                    error.user_message("Failed to fetch time logs")
                );
                Ok(RecordedTime {
                    log,
                    logs: None,
                    warning: Some(warning),
                })
            }
        }
    }

    /// # Errors
    ///
    /// [`StoreError::Request`] if the logs cannot be fetched.
    pub async fn time_logs(&self, task_id: TaskId) -> Result<Vec<TimeLog>, StoreError> {
        self.client
            .time_logs(task_id)
            .await
            .map_err(|e| self.fail(e, "Failed to fetch time logs"))
    }

    /// Spent and estimated totals over a task's time logs.
    ///
    /// # Errors
    ///
    /// [`StoreError::Request`] if the logs cannot be fetched.
    pub async fn time_log_summary(&self, task_id: TaskId) -> Result<TimeLogSummary, StoreError> {
        let logs = self.time_logs(task_id).await?;
        Ok(TimeLogSummary::from_logs(&logs))
    }

    // -- Notes and comments --------------------------------------------------

    /// # Errors
    ///
    /// [`StoreError::Request`] if the notes cannot be fetched.
    pub async fn notes(&self, task_id: TaskId) -> Result<Vec<Note>, StoreError> {
        self.client
            .notes(task_id)
            .await
            .map_err(|e| self.fail(e, "Failed to fetch notes"))
    }

    /// # Errors
    ///
    /// [`StoreError::Validation`] for blank content, [`StoreError::Request`]
    /// if the backend rejects the note.
    pub async fn add_note(&self, task_id: TaskId, content: &str) -> Result<Note, StoreError> {
        let body = NewNote {
            content: content.to_string(),
        };
        body.validate()?;
        self.client
            .add_note(task_id, &body)
            .await
            .map_err(|e| self.fail(e, "Failed to add note"))
    }

    /// # Errors
    ///
    /// [`StoreError::Request`] if the backend refuses the delete.
    pub async fn delete_note(&self, task_id: TaskId, note_id: i64) -> Result<(), StoreError> {
        self.client
            .delete_note(task_id, note_id)
            .await
            .map_err(|e| self.fail(e, "Failed to delete note"))
    }

    /// # Errors
    ///
    /// [`StoreError::Request`] if the comments cannot be fetched.
    pub async fn comments(&self, task_id: TaskId) -> Result<Vec<Comment>, StoreError> {
        self.client
            .comments(task_id)
            .await
            .map_err(|e| self.fail(e, "Failed to fetch comments"))
    }

    /// # Errors
    ///
    /// [`StoreError::Validation`] for blank content, [`StoreError::Request`]
    /// if the backend rejects the comment.
    pub async fn add_comment(&self, task_id: TaskId, content: &str) -> Result<Comment, StoreError> {
        let body = NewNote {
            content: content.to_string(),
        };
        body.validate()?;
        self.client
            .add_comment(task_id, &body)
            .await
            .map_err(|e| self.fail(e, "Failed to add comment"))
    }

    /// # Errors
    ///
    /// [`StoreError::Request`] if the backend refuses the delete.
    pub async fn delete_comment(&self, task_id: TaskId, comment_id: i64) -> Result<(), StoreError> {
        self.client
            .delete_comment(task_id, comment_id)
            .await
            .map_err(|e| self.fail(e, "Failed to delete comment"))
    }

    // -- Auxiliary resources -------------------------------------------------

    /// # Errors
    ///
    /// [`StoreError::Request`] if the goals cannot be fetched.
    pub async fn goals(&self) -> Result<Vec<Goal>, StoreError> {
        self.client
            .goals()
            .await
            .map_err(|e| self.fail(e, "Failed to fetch goals"))
    }

    /// # Errors
    ///
    /// [`StoreError::Validation`] for a blank title or zero target,
    /// [`StoreError::Request`] if the backend rejects the goal.
    pub async fn create_goal(&self, goal: &NewGoal) -> Result<Goal, StoreError> {
        goal.validate()?;
        self.client
            .create_goal(goal)
            .await
            .map_err(|e| self.fail(e, "Failed to create goal"))
    }

    /// # Errors
    ///
    /// [`StoreError::Request`] if the theme cannot be fetched.
    pub async fn theme(&self) -> Result<Theme, StoreError> {
        self.client
            .theme()
            .await
            .map_err(|e| self.fail(e, "Failed to fetch theme"))
    }

    /// # Errors
    ///
    /// [`StoreError::Request`] if the backend rejects the update.
    pub async fn update_theme(&self, update: &ThemeUpdate) -> Result<Theme, StoreError> {
        self.client
            .update_theme(update)
            .await
            .map_err(|e| self.fail(e, "Failed to update theme"))
    }

    /// # Errors
    ///
    /// [`StoreError::Request`] if the presets cannot be fetched.
    pub async fn filter_presets(&self) -> Result<Vec<FilterPreset>, StoreError> {
        self.client
            .filter_presets()
            .await
            .map_err(|e| self.fail(e, "Failed to fetch filter presets"))
    }

    /// # Errors
    ///
    /// [`StoreError::Validation`] for a blank name, [`StoreError::Request`] if
    /// the backend rejects the preset.
    pub async fn save_filter_preset(
        &self,
        preset: &NewFilterPreset,
    ) -> Result<FilterPreset, StoreError> {
        preset.validate()?;
        self.client
            .save_filter_preset(preset)
            .await
            .map_err(|e| self.fail(e, "Failed to save filter preset"))
    }

    /// # Errors
    ///
    /// [`StoreError::Request`] if the stats cannot be fetched.
    pub async fn productivity(&self) -> Result<ProductivityStats, StoreError> {
        self.client
            .productivity()
            .await
            .map_err(|e| self.fail(e, "Failed to fetch productivity stats"))
    }
}
