//! `tasks/{id}/notes/` and `tasks/{id}/comments/` endpoints.
//!
//! Both carry free-text content attached to a task and support list, create,
//! and delete. Comments additionally report their author.

use duna_core::entities::{Comment, Note, TaskId};
use duna_core::requests::NewNote;

use crate::{ApiClient, error::ClientError};

fn collection_path(task_id: TaskId, kind: &str) -> String {
    format!("tasks/{task_id}/{kind}/")
}

fn item_path(task_id: TaskId, kind: &str, id: i64) -> String {
    format!("tasks/{task_id}/{kind}/{id}/")
}

impl ApiClient {
    /// # Errors
    ///
    /// Returns [`ClientError`] if the parent task does not exist.
    pub async fn notes(&self, task_id: TaskId) -> Result<Vec<Note>, ClientError> {
        self.get(&collection_path(task_id, "notes")).await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] if the backend rejects the note.
    pub async fn add_note(&self, task_id: TaskId, note: &NewNote) -> Result<Note, ClientError> {
        self.post(&collection_path(task_id, "notes"), note).await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] if the note does not exist.
    pub async fn delete_note(&self, task_id: TaskId, note_id: i64) -> Result<(), ClientError> {
        self.delete(&item_path(task_id, "notes", note_id)).await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] if the parent task does not exist.
    pub async fn comments(&self, task_id: TaskId) -> Result<Vec<Comment>, ClientError> {
        self.get(&collection_path(task_id, "comments")).await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] if the backend rejects the comment.
    pub async fn add_comment(&self, task_id: TaskId, comment: &NewNote) -> Result<Comment, ClientError> {
        self.post(&collection_path(task_id, "comments"), comment).await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] if the comment does not exist.
    pub async fn delete_comment(&self, task_id: TaskId, comment_id: i64) -> Result<(), ClientError> {
        self.delete(&item_path(task_id, "comments", comment_id)).await
    }
}
