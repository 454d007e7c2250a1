//! The task collection and its mutating operations.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use duna_client::{ApiClient, ClientError};
use duna_core::entities::{Subtask, Task, TaskId};
use duna_core::requests::{NewSubtask, TaskDraft};
use duna_view::{ListQuery, ListViewModel, TaskListView};

use crate::error::StoreError;
use crate::reorder::apply_order;

/// Result of [`TaskStore::toggle_status`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleOutcome {
    /// The task as the server returned it after the status change.
    pub task: Task,
    /// Next instance spawned for a completed recurring task.
    pub spawned: Option<Task>,
    /// Soft notification: the status change succeeded but a follow-up did not.
    pub warning: Option<String>,
}

#[derive(Debug, Default)]
struct State {
    tasks: Vec<Task>,
    last_error: Option<String>,
    loading: bool,
    revision: u64,
    closed: bool,
}

/// Owns the in-memory task collection for the current session.
///
/// Cheap to clone; clones share state. The state lock is never held across a
/// request, so several operations may be in flight at once and their results
/// apply in the order they resolve.
#[derive(Debug, Clone)]
pub struct TaskStore {
    pub(crate) client: ApiClient,
    state: Arc<Mutex<State>>,
}

impl TaskStore {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            state: Arc::new(Mutex::new(State::default())),
        }
    }

    #[must_use]
    pub const fn client(&self) -> &ApiClient {
        &self.client
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // -- Read access ---------------------------------------------------------

    #[must_use]
    pub fn tasks(&self) -> Vec<Task> {
        self.state().tasks.clone()
    }

    #[must_use]
    pub fn task(&self, id: TaskId) -> Option<Task> {
        self.state().tasks.iter().find(|t| t.id == id).cloned()
    }

    /// Bumped on every applied local change.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.state().revision
    }

    #[must_use]
    pub fn last_error(&self) -> Option<String> {
        self.state().last_error.clone()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state().loading
    }

    /// Derive the list view through `model`, recomputing only if the
    /// collection changed since the model's last call.
    #[must_use]
    pub fn view(
        &self,
        model: &mut ListViewModel,
        query: &ListQuery,
        now: chrono::DateTime<chrono::FixedOffset>,
    ) -> TaskListView {
        let state = self.state();
        model.view(state.revision, &state.tasks, query, now).clone()
    }

    /// Tear down: results that resolve afterwards are discarded.
    pub fn close(&self) {
        self.state().closed = true;
    }

    // -- State plumbing ------------------------------------------------------

    /// Apply `change` unless the store was closed. Returns whether it applied.
    pub(crate) fn apply(&self, what: &str, change: impl FnOnce(&mut Vec<Task>)) -> bool {
        let mut state = self.state();
        if state.closed {
            tracing::debug!(what, "store closed, discarding result");
            return false;
        }
        change(&mut state.tasks);
        state.revision += 1;
        true
    }

    /// Record the failure as the last error and wrap it for the caller.
    pub(crate) fn fail(&self, error: ClientError, fallback: &str) -> StoreError {
        let message = error.user_message(fallback);
        tracing::debug!(%error, %message, "request failed");
        let mut state = self.state();
        if !state.closed {
            state.last_error = Some(message.clone());
        }
        StoreError::Request {
            message,
            source: error,
        }
    }

    fn set_loading(&self, loading: bool) {
        let mut state = self.state();
        if !state.closed {
            state.loading = loading;
        }
    }

    fn replace(&self, what: &str, task: &Task) {
        self.apply(what, |tasks| {
            if let Some(slot) = tasks.iter_mut().find(|t| t.id == task.id) {
                *slot = task.clone();
            }
        });
    }

    fn prepend(&self, what: &str, task: &Task) {
        self.apply(what, |tasks| tasks.insert(0, task.clone()));
    }

    // -- Task operations -----------------------------------------------------

    /// Replace the collection with the server's.
    ///
    /// # Errors
    ///
    /// [`StoreError::Request`] if the list cannot be fetched; the collection
    /// is left as it was.
    pub async fn fetch(&self) -> Result<(), StoreError> {
        {
            let mut state = self.state();
            if !state.closed {
                state.loading = true;
                state.last_error = None;
            }
        }
        let result = self.client.list_tasks().await;
        self.set_loading(false);
        let tasks = result.map_err(|e| self.fail(e, "Failed to fetch tasks"))?;
        tracing::debug!(count = tasks.len(), "tasks fetched");
        self.apply("fetch", |current| *current = tasks);
        Ok(())
    }

    /// # Errors
    ///
    /// [`StoreError::Validation`] for a blank title (nothing is sent),
    /// [`StoreError::Request`] if the backend rejects the task.
    pub async fn create(&self, draft: &TaskDraft) -> Result<Task, StoreError> {
        draft.validate()?;
        let task = self
            .client
            .create_task(draft)
            .await
            .map_err(|e| self.fail(e, "Failed to create task"))?;
        self.prepend("create", &task);
        Ok(task)
    }

    /// # Errors
    ///
    /// [`StoreError::Validation`] for a blank title (nothing is sent),
    /// [`StoreError::Request`] if the backend rejects the update.
    pub async fn update(&self, id: TaskId, draft: &TaskDraft) -> Result<Task, StoreError> {
        draft.validate()?;
        let task = self
            .client
            .update_task(id, draft)
            .await
            .map_err(|e| self.fail(e, "Failed to update task"))?;
        self.replace("update", &task);
        Ok(task)
    }

    /// # Errors
    ///
    /// [`StoreError::Request`] if the backend refuses the delete.
    pub async fn delete(&self, id: TaskId) -> Result<(), StoreError> {
        self.client
            .delete_task(id)
            .await
            .map_err(|e| self.fail(e, "Failed to delete task"))?;
        self.apply("delete", |tasks| tasks.retain(|t| t.id != id));
        Ok(())
    }

    /// # Errors
    ///
    /// [`StoreError::Request`] if the backend refuses the change.
    pub async fn mark_complete(&self, id: TaskId) -> Result<Task, StoreError> {
        let task = self
            .client
            .mark_complete(id)
            .await
            .map_err(|e| self.fail(e, "Failed to mark complete"))?;
        self.replace("mark_complete", &task);
        Ok(task)
    }

    /// # Errors
    ///
    /// [`StoreError::Request`] if the backend refuses the change.
    pub async fn mark_pending(&self, id: TaskId) -> Result<Task, StoreError> {
        let task = self
            .client
            .mark_pending(id)
            .await
            .map_err(|e| self.fail(e, "Failed to mark pending"))?;
        self.replace("mark_pending", &task);
        Ok(task)
    }

    /// Ask the backend for the next instance of a recurring task and prepend it.
    ///
    /// # Errors
    ///
    /// [`StoreError::Request`] if the task is not recurring or the call fails.
    pub async fn create_recurring(&self, id: TaskId) -> Result<Task, StoreError> {
        let task = self
            .client
            .create_recurring(id)
            .await
            .map_err(|e| self.fail(e, "Failed to create recurring task"))?;
        self.prepend("create_recurring", &task);
        Ok(task)
    }

    /// Flip a loaded task's status.
    ///
    /// Completing a recurring task also requests its next instance. That
    /// follow-up is best effort: its failure is reported in
    /// [`ToggleOutcome::warning`] and does not fail the completion.
    ///
    /// # Errors
    ///
    /// [`StoreError::UnknownTask`] if `id` is not loaded,
    /// [`StoreError::Request`] if the status change itself fails.
    pub async fn toggle_status(&self, id: TaskId) -> Result<ToggleOutcome, StoreError> {
        let current = self.task(id).ok_or(StoreError::UnknownTask(id))?;
        if !current.is_pending() {
            let task = self.mark_pending(id).await?;
            return Ok(ToggleOutcome {
                task,
                spawned: None,
                warning: None,
            });
        }

        let task = self.mark_complete(id).await?;
        if !task.recurrence.is_recurring() {
            return Ok(ToggleOutcome {
                task,
                spawned: None,
                warning: None,
            });
        }

        match self.client.create_recurring(id).await {
            Ok(next) => {
                tracing::info!(id, next = next.id, recurrence = %task.recurrence, "spawned next occurrence");
                self.prepend("create_recurring", &next);
                Ok(ToggleOutcome {
                    task,
                    spawned: Some(next),
                    warning: None,
                })
            }
            Err(error) => {
                tracing::warn!(id, %error, "recurring follow-up failed");
                let warning = format!(
                    "Task completed, but the next occurrence could not be created: {}",
                    error.user_message("Failed to create recurring task")
                );
                Ok(ToggleOutcome {
                    task,
                    spawned: None,
                    warning: Some(warning),
                })
            }
        }
    }

    /// Reorder pending tasks locally, then persist the resulting order.
    ///
    /// The local order is applied before the request and is kept even if the
    /// request fails.
    ///
    /// # Errors
    ///
    /// [`StoreError::Request`] if the order could not be persisted.
    pub async fn update_order(&self, order: &[TaskId]) -> Result<(), StoreError> {
        let mut pending = order.to_vec();
        self.apply("update_order", |tasks| pending = apply_order(tasks, order));
        self.client
            .update_order(&pending)
            .await
            .map_err(|e| self.fail(e, "Failed to update order"))
    }

    // -- Subtasks ------------------------------------------------------------

    /// # Errors
    ///
    /// [`StoreError::Validation`] for a blank title, [`StoreError::Request`]
    /// if the backend rejects the subtask.
    pub async fn add_subtask(&self, task_id: TaskId, title: &str) -> Result<Subtask, StoreError> {
        let body = NewSubtask {
            title: title.to_string(),
        };
        body.validate()?;
        let subtask = self
            .client
            .add_subtask(task_id, &body)
            .await
            .map_err(|e| self.fail(e, "Failed to add subtask"))?;
        self.apply("add_subtask", |tasks| {
            if let Some(task) = tasks.iter_mut().find(|t| t.id == task_id) {
                task.subtasks.push(subtask.clone());
            }
        });
        Ok(subtask)
    }

    /// Flip a subtask between pending and completed.
    ///
    /// # Errors
    ///
    /// [`StoreError::UnknownTask`] if the task or subtask is not loaded,
    /// [`StoreError::Request`] if the update fails.
    pub async fn toggle_subtask(
        &self,
        task_id: TaskId,
        subtask_id: i64,
    ) -> Result<Subtask, StoreError> {
        let status = self
            .task(task_id)
            .and_then(|t| t.subtasks.into_iter().find(|s| s.id == subtask_id))
            .map(|s| s.status)
            .ok_or(StoreError::UnknownTask(task_id))?;
        let updated = self
            .client
            .set_subtask_status(task_id, subtask_id, status.toggled())
            .await
            .map_err(|e| self.fail(e, "Failed to update subtask"))?;
        self.apply("toggle_subtask", |tasks| {
            if let Some(slot) = tasks
                .iter_mut()
                .find(|t| t.id == task_id)
                .and_then(|t| t.subtasks.iter_mut().find(|s| s.id == subtask_id))
            {
                *slot = updated.clone();
            }
        });
        Ok(updated)
    }

    /// # Errors
    ///
    /// [`StoreError::Request`] if the backend refuses the delete.
    pub async fn delete_subtask(&self, task_id: TaskId, subtask_id: i64) -> Result<(), StoreError> {
        self.client
            .delete_subtask(task_id, subtask_id)
            .await
            .map_err(|e| self.fail(e, "Failed to delete subtask"))?;
        self.apply("delete_subtask", |tasks| {
            if let Some(task) = tasks.iter_mut().find(|t| t.id == task_id) {
                task.subtasks.retain(|s| s.id != subtask_id);
            }
        });
        Ok(())
    }
}
