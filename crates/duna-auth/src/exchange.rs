//! Unauthenticated credential exchanges against the backend's `auth/` routes.
//!
//! These calls never carry a bearer header, so they bypass the gateway.

use duna_core::requests::{LoginRequest, RefreshRequest, RegisterRequest};
use duna_core::responses::{AccessToken, ApiErrorBody, RegisteredUser, TokenPair};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::AuthError;

pub const TOKEN_PATH: &str = "auth/token/";
pub const REFRESH_PATH: &str = "auth/token/refresh/";
pub const REGISTER_PATH: &str = "auth/register/";

/// HTTP endpoint for the `auth/` routes, sharing one connection pool.
#[derive(Debug, Clone)]
pub struct AuthEndpoint {
    http: reqwest::Client,
    base_url: String,
}

impl AuthEndpoint {
    #[must_use]
    pub fn new(http: reqwest::Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// # Errors
    ///
    /// `AuthError::Rejected` with the server detail or "Login failed".
    pub async fn obtain(&self, request: &LoginRequest) -> Result<TokenPair, AuthError> {
        self.post(TOKEN_PATH, request, "Login failed").await
    }

    /// # Errors
    ///
    /// `AuthError::Rejected` when the refresh credential is refused.
    pub async fn refresh(&self, refresh: &str) -> Result<AccessToken, AuthError> {
        let body = RefreshRequest {
            refresh: refresh.to_string(),
        };
        self.post(REFRESH_PATH, &body, "Token refresh failed").await
    }

    /// # Errors
    ///
    /// `AuthError::Rejected` with the server detail or "Registration failed".
    pub async fn register(&self, request: &RegisterRequest) -> Result<RegisteredUser, AuthError> {
        self.post(REGISTER_PATH, request, "Registration failed").await
    }

    async fn post<B, T>(&self, path: &str, body: &B, fallback: &str) -> Result<T, AuthError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let url = format!("{}/{path}", self.base_url);
        tracing::debug!(%url, "POST");
        let resp = self.http.post(&url).json(body).send().await?;
        let status = resp.status();
        if !status.is_success() {
            let raw = resp.text().await.unwrap_or_default();
            let message = ApiErrorBody::parse(&raw)
                .message()
                .unwrap_or_else(|| fallback.to_string());
            return Err(AuthError::Rejected {
                status: status.as_u16(),
                message,
            });
        }
        resp.json::<T>()
            .await
            .map_err(|e| AuthError::Other(format!("{fallback}: unexpected response: {e}")))
    }
}
