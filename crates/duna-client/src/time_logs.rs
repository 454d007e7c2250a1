//! `tasks/{id}/time-logs/` endpoints. Time logs are immutable: list and create only.

use duna_core::entities::{TaskId, TimeLog};
use duna_core::requests::NewTimeLog;

use crate::{ApiClient, error::ClientError};

fn time_logs_path(task_id: TaskId) -> String {
    format!("tasks/{task_id}/time-logs/")
}

impl ApiClient {
    /// # Errors
    ///
    /// Returns [`ClientError`] if the parent task does not exist.
    pub async fn time_logs(&self, task_id: TaskId) -> Result<Vec<TimeLog>, ClientError> {
        self.get(&time_logs_path(task_id)).await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] if the backend rejects the entry.
    pub async fn log_time(&self, task_id: TaskId, entry: &NewTimeLog) -> Result<TimeLog, ClientError> {
        self.post(&time_logs_path(task_id), entry).await
    }
}
