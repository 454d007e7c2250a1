use duna_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("not authenticated, run `duna auth login`")]
    NotAuthenticated,

    /// The backend refused the exchange; `message` is the server's detail or a generic fallback.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// Refreshing the access credential failed; the session has been cleared.
    #[error("session expired, run `duna auth login` ({0})")]
    ReauthRequired(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Validation(#[from] CoreError),

    #[error("state store error: {0}")]
    Storage(String),

    #[error("{0}")]
    Other(String),
}
