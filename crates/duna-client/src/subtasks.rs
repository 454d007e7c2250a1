//! `tasks/{id}/subtasks/` endpoints.

use duna_core::entities::{Subtask, TaskId};
use duna_core::enums::TaskStatus;
use duna_core::requests::{NewSubtask, SubtaskStatusUpdate};

use crate::{ApiClient, error::ClientError};

fn subtasks_path(task_id: TaskId) -> String {
    format!("tasks/{task_id}/subtasks/")
}

fn subtask_path(task_id: TaskId, subtask_id: i64) -> String {
    format!("tasks/{task_id}/subtasks/{subtask_id}/")
}

impl ApiClient {
    /// # Errors
    ///
    /// Returns [`ClientError`] if the parent task does not exist or the title is rejected.
    pub async fn add_subtask(
        &self,
        task_id: TaskId,
        subtask: &NewSubtask,
    ) -> Result<Subtask, ClientError> {
        self.post(&subtasks_path(task_id), subtask).await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] if the subtask does not exist.
    pub async fn set_subtask_status(
        &self,
        task_id: TaskId,
        subtask_id: i64,
        status: TaskStatus,
    ) -> Result<Subtask, ClientError> {
        self.put(
            &subtask_path(task_id, subtask_id),
            &SubtaskStatusUpdate { status },
        )
        .await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] if the subtask does not exist.
    pub async fn delete_subtask(&self, task_id: TaskId, subtask_id: i64) -> Result<(), ClientError> {
        self.delete(&subtask_path(task_id, subtask_id)).await
    }
}
