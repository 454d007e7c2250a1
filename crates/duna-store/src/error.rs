use duna_client::ClientError;
use duna_core::CoreError;
use duna_core::entities::TaskId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Input rejected before any request was sent.
    #[error(transparent)]
    Validation(#[from] CoreError),

    /// The request failed. `message` is what was recorded as the store's last error.
    #[error("{message}")]
    Request {
        message: String,
        #[source]
        source: ClientError,
    },

    #[error("task {0} is not loaded")]
    UnknownTask(TaskId),
}

impl StoreError {
    #[must_use]
    pub const fn client_error(&self) -> Option<&ClientError> {
        match self {
            Self::Request { source, .. } => Some(source),
            _ => None,
        }
    }

    /// Whether the session must be re-established before retrying.
    #[must_use]
    pub const fn requires_login(&self) -> bool {
        matches!(self.client_error(), Some(ClientError::ReauthRequired(_)))
    }
}
