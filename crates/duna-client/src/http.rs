//! Shared HTTP response helpers.
//!
//! Centralizes status checks (non-success → [`ClientError::Api`] with the
//! backend's error detail) and body decoding so the resource modules stay
//! focused on paths and payloads.

use duna_core::responses::ApiErrorBody;
use serde::de::DeserializeOwned;

use crate::error::ClientError;

/// Return the response unchanged on success, otherwise map it to
/// [`ClientError::Api`] carrying the extracted error message.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let raw = resp.text().await.unwrap_or_default();
    Err(ClientError::Api {
        status: status.as_u16(),
        detail: ApiErrorBody::parse(&raw).message(),
    })
}

/// Decode a success body into `T`, reporting the path on mismatch.
pub async fn decode<T: DeserializeOwned>(
    resp: reqwest::Response,
    path: &str,
) -> Result<T, ClientError> {
    let raw = resp.text().await?;
    serde_json::from_str(&raw).map_err(|e| ClientError::Decode {
        path: path.to_string(),
        reason: e.to_string(),
    })
}
