//! `tasks/` endpoints: CRUD, status actions, reorder, and recurrence.

use duna_core::entities::{Task, TaskId};
use duna_core::requests::{TaskDraft, UpdateOrderRequest};
use reqwest::Method;

use crate::{ApiClient, error::ClientError};

pub(crate) fn task_path(id: TaskId) -> String {
    format!("tasks/{id}/")
}

fn action_path(id: TaskId, action: &str) -> String {
    format!("tasks/{id}/{action}/")
}

impl ApiClient {
    /// All tasks owned by the current user.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the body is not a task list.
    pub async fn list_tasks(&self) -> Result<Vec<Task>, ClientError> {
        self.get("tasks/").await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] if the backend rejects the draft.
    pub async fn create_task(&self, draft: &TaskDraft) -> Result<Task, ClientError> {
        self.post("tasks/", draft).await
    }

    /// Full update (PUT) of a task's editable fields.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the task does not exist or the draft is rejected.
    pub async fn update_task(&self, id: TaskId, draft: &TaskDraft) -> Result<Task, ClientError> {
        self.put(&task_path(id), draft).await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] if the task does not exist.
    pub async fn delete_task(&self, id: TaskId) -> Result<(), ClientError> {
        self.delete(&task_path(id)).await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] if the task does not exist.
    pub async fn mark_complete(&self, id: TaskId) -> Result<Task, ClientError> {
        self.request(Method::POST, &action_path(id, "mark_complete"), None)
            .await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] if the task does not exist.
    pub async fn mark_pending(&self, id: TaskId) -> Result<Task, ClientError> {
        self.request(Method::POST, &action_path(id, "mark_pending"), None)
            .await
    }

    /// Persist the display order of pending tasks. The response body is a
    /// status message and is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the backend rejects the order.
    pub async fn update_order(&self, order: &[TaskId]) -> Result<(), ClientError> {
        let body = UpdateOrderRequest {
            order: order.to_vec(),
        };
        let body = serde_json::to_value(&body).map_err(|e| ClientError::Encode(e.to_string()))?;
        self.request_empty(Method::POST, "tasks/update_order/", Some(&body))
            .await
    }

    /// Spawn the next instance of a recurring task. The backend answers 400
    /// `{"error": "Task is not recurring"}` for recurrence `none`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the task is not recurring or does not exist.
    pub async fn create_recurring(&self, id: TaskId) -> Result<Task, ClientError> {
        self.request(Method::POST, &action_path(id, "create_recurring"), None)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_carry_trailing_slash() {
        assert_eq!(task_path(12), "tasks/12/");
        assert_eq!(action_path(12, "mark_complete"), "tasks/12/mark_complete/");
    }
}
