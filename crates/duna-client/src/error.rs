//! Gateway error types.

use duna_auth::AuthError;
use thiserror::Error;

/// Errors returned by [`crate::ApiClient`] calls.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend returned a non-success status.
    #[error("API error ({status}){}", detail.as_deref().map(|d| format!(": {d}")).unwrap_or_default())]
    Api {
        status: u16,
        /// Human-readable message extracted from the error body, if any.
        detail: Option<String>,
    },

    /// A success response did not match the expected contract.
    #[error("unexpected response from {path}: {reason}")]
    Decode { path: String, reason: String },

    /// A request payload could not be serialized.
    #[error("failed to encode request body: {0}")]
    Encode(String),

    /// The credential refresh failed and the session was cleared.
    #[error("session expired, run `duna auth login` ({0})")]
    ReauthRequired(String),

    #[error(transparent)]
    Auth(AuthError),
}

impl ClientError {
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Message to show the user: the server-provided detail when present,
    /// otherwise `fallback`.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Api {
                detail: Some(detail),
                ..
            } => detail.clone(),
            Self::ReauthRequired(_) => "Session expired, please log in again".to_string(),
            _ => fallback.to_string(),
        }
    }

    #[must_use]
    pub const fn is_reauth_required(&self) -> bool {
        matches!(self, Self::ReauthRequired(_))
    }
}

impl From<AuthError> for ClientError {
    fn from(error: AuthError) -> Self {
        match error {
            AuthError::ReauthRequired(reason) => Self::ReauthRequired(reason),
            AuthError::Http(source) => Self::Http(source),
            AuthError::Rejected { status, message } => Self::Api {
                status,
                detail: Some(message),
            },
            other => Self::Auth(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_display_includes_detail() {
        let err = ClientError::Api {
            status: 400,
            detail: Some("Task is not recurring".into()),
        };
        assert_eq!(err.to_string(), "API error (400): Task is not recurring");
        let bare = ClientError::Api {
            status: 502,
            detail: None,
        };
        assert_eq!(bare.to_string(), "API error (502)");
    }

    #[test]
    fn user_message_prefers_server_detail() {
        let err = ClientError::Api {
            status: 400,
            detail: Some("Title required".into()),
        };
        assert_eq!(err.user_message("Failed to create task"), "Title required");
        let err = ClientError::Api {
            status: 500,
            detail: None,
        };
        assert_eq!(err.user_message("Failed to create task"), "Failed to create task");
    }

    #[test]
    fn reauth_maps_from_auth_error() {
        let err = ClientError::from(AuthError::ReauthRequired("expired".into()));
        assert!(err.is_reauth_required());
        assert_eq!(err.status(), None);
    }
}
