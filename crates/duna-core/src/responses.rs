//! Typed response contracts for the Duna REST API.
//!
//! Entity responses reuse the structs in [`crate::entities`]. This module holds
//! the auth exchange shapes and the error body the backend returns on failure.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Response from `POST auth/token/`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

/// Response from `POST auth/token/refresh/`. `refresh` is present when the
/// backend rotates refresh tokens.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AccessToken {
    pub access: String,
    #[serde(default)]
    pub refresh: Option<String>,
}

/// Response from `POST auth/register/`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RegisteredUser {
    #[serde(default)]
    pub id: Option<i64>,
    pub username: String,
    #[serde(default)]
    pub email: String,
}

/// Error body returned by the backend on a non-success status.
///
/// Shapes seen in practice: `{"detail": "..."}`, `{"error": "..."}`, and
/// field-error maps such as `{"password": ["Passwords must match."]}`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(flatten)]
    pub fields: serde_json::Map<String, Value>,
}

impl ApiErrorBody {
    /// Parse a raw response body. Non-JSON bodies yield an empty error body.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        serde_json::from_str(raw).unwrap_or_default()
    }

    /// Human-readable message: `detail`, then `error`, then the first field error
    /// in the order the server sent them.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        if let Some(detail) = self.detail.as_deref().filter(|d| !d.is_empty()) {
            return Some(detail.to_string());
        }
        if let Some(error) = self.error.as_deref().filter(|e| !e.is_empty()) {
            return Some(error.to_string());
        }
        self.fields.iter().find_map(|(field, value)| {
            let text = match value {
                Value::String(text) => Some(text.clone()),
                Value::Array(items) => items.iter().find_map(|item| item.as_str().map(String::from)),
                _ => None,
            }?;
            Some(format!("{field}: {text}"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_wins() {
        let body = ApiErrorBody::parse(r#"{"detail":"No active account","error":"x"}"#);
        assert_eq!(body.message().as_deref(), Some("No active account"));
    }

    #[test]
    fn error_field_is_used_without_detail() {
        let body = ApiErrorBody::parse(r#"{"error":"Task is not recurring"}"#);
        assert_eq!(body.message().as_deref(), Some("Task is not recurring"));
    }

    #[test]
    fn field_errors_are_flattened() {
        let body = ApiErrorBody::parse(r#"{"password":["Passwords must match."]}"#);
        assert_eq!(
            body.message().as_deref(),
            Some("password: Passwords must match.")
        );
    }

    #[test]
    fn first_field_error_follows_body_order() {
        let body = ApiErrorBody::parse(
            r#"{"username":["A user with that username already exists."],"password":["This password is too short."]}"#,
        );
        assert_eq!(
            body.message().as_deref(),
            Some("username: A user with that username already exists.")
        );
    }

    #[test]
    fn non_json_body_has_no_message() {
        assert!(ApiErrorBody::parse("<html>502</html>").message().is_none());
        assert!(ApiErrorBody::parse("").message().is_none());
    }

    #[test]
    fn refresh_response_tolerates_missing_rotation() {
        let token: AccessToken = serde_json::from_str(r#"{"access":"a2"}"#).unwrap();
        assert_eq!(token.access, "a2");
        assert!(token.refresh.is_none());
    }
}
