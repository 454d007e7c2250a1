//! Cross-cutting error types for Duna.
//!
//! Transport and storage errors live in their own crates (`ClientError`,
//! `AuthError`, `StoreError`). `CoreError` covers problems detectable from the
//! data alone, before anything reaches the network.

use thiserror::Error;

/// Errors that can be raised by any Duna crate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// A state machine transition was attempted that is not allowed.
    #[error("Invalid state transition: {entity_type} {id} from {from} to {to}")]
    InvalidTransition {
        entity_type: String,
        id: String,
        from: String,
        to: String,
    },

    /// Input failed validation (empty title, non-positive duration, ...).
    #[error("Validation error: {0}")]
    Validation(String),
}

impl CoreError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}
