//! Session store: access and refresh credentials plus the identity record.
//!
//! Lifecycle is `open` (read persisted values) → `login` / `refresh_access` /
//! `logout` (mutate) → persisted on every change through the injected
//! [`KeyValueStore`]. Clones share the same state and refresh gate.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use duna_core::identity::UserIdentity;
use duna_core::requests::{LoginRequest, RegisterRequest};
use duna_core::responses::RegisteredUser;

use crate::claims::decode_expiry;
use crate::error::AuthError;
use crate::exchange::AuthEndpoint;
use crate::storage::{ACCESS_TOKEN, KeyValueStore, REFRESH_TOKEN, USER};

#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<Inner>,
}

struct Inner {
    storage: Arc<dyn KeyValueStore>,
    endpoint: AuthEndpoint,
    /// Serialises refresh exchanges so concurrent 401s share one network call.
    refresh_gate: tokio::sync::Mutex<()>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("base_url", &self.inner.endpoint.base_url())
            .field("authenticated", &self.is_authenticated())
            .finish_non_exhaustive()
    }
}

impl SessionStore {
    #[must_use]
    pub fn open(storage: Arc<dyn KeyValueStore>, endpoint: AuthEndpoint) -> Self {
        let session = Self {
            inner: Arc::new(Inner {
                storage,
                endpoint,
                refresh_gate: tokio::sync::Mutex::new(()),
            }),
        };
        tracing::debug!(
            authenticated = session.is_authenticated(),
            "session opened"
        );
        session
    }

    /// True iff an access credential is present. Does not check expiry.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.access_token().is_some()
    }

    #[must_use]
    pub fn access_token(&self) -> Option<String> {
        self.inner
            .storage
            .get(ACCESS_TOKEN)
            .filter(|token| !token.is_empty())
    }

    #[must_use]
    pub fn refresh_token(&self) -> Option<String> {
        self.inner
            .storage
            .get(REFRESH_TOKEN)
            .filter(|token| !token.is_empty())
    }

    /// Identity recorded at login. A malformed record reads as absent.
    #[must_use]
    pub fn user(&self) -> Option<UserIdentity> {
        let raw = self.inner.storage.get(USER)?;
        serde_json::from_str(&raw)
            .inspect_err(|error| tracing::warn!(%error, "ignoring malformed identity record"))
            .ok()
    }

    /// Expiry of the stored access credential, if it is a JWT carrying `exp`.
    #[must_use]
    pub fn access_expiry(&self) -> Option<DateTime<Utc>> {
        decode_expiry(&self.access_token()?).ok()
    }

    /// Exchange username and password for a credential pair and persist it.
    ///
    /// On failure the previously stored session is left untouched.
    ///
    /// # Errors
    ///
    /// `AuthError::Rejected` carrying the server detail or "Login failed",
    /// `AuthError::Http` on transport failure, `AuthError::Storage` if the new
    /// credentials cannot be persisted.
    pub async fn login(&self, username: &str, password: &str) -> Result<UserIdentity, AuthError> {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let pair = self.inner.endpoint.obtain(&request).await?;

        let identity = UserIdentity {
            username: username.to_string(),
        };
        let user = serde_json::to_string(&identity)
            .map_err(|e| AuthError::Storage(format!("serialize identity: {e}")))?;

        self.inner.storage.set_many(&[
            (ACCESS_TOKEN, pair.access.as_str()),
            (REFRESH_TOKEN, pair.refresh.as_str()),
            (USER, user.as_str()),
        ])?;

        tracing::info!(username, "logged in");
        Ok(identity)
    }

    /// Create an account. Never logs in.
    ///
    /// # Errors
    ///
    /// `AuthError::Validation` if the confirmation does not match (no request
    /// is sent), `AuthError::Rejected` with the server detail or
    /// "Registration failed".
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
        confirmation: &str,
    ) -> Result<RegisteredUser, AuthError> {
        let request = RegisterRequest {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            password2: confirmation.to_string(),
        };
        request.validate()?;
        let user = self.inner.endpoint.register(&request).await?;
        tracing::info!(username = %user.username, "registered");
        Ok(user)
    }

    /// Clear every session field. Storage failures are logged, never returned.
    pub fn logout(&self) {
        self.clear();
        tracing::info!("logged out");
    }

    fn clear(&self) {
        for key in [ACCESS_TOKEN, REFRESH_TOKEN, USER] {
            if let Err(error) = self.inner.storage.remove(key) {
                tracing::warn!(%error, key, "failed to clear session field");
            }
        }
    }

    /// Obtain a fresh access credential after `rejected` was refused with 401.
    ///
    /// Only one exchange runs at a time. A caller that finds the stored access
    /// credential already differs from the one it was refused with returns
    /// the stored one without a network call. When the exchange fails, or no
    /// refresh credential is stored, the session is cleared.
    ///
    /// # Errors
    ///
    /// `AuthError::ReauthRequired` when the session could not be refreshed.
    pub async fn refresh_access(&self, rejected: Option<&str>) -> Result<String, AuthError> {
        let _gate = self.inner.refresh_gate.lock().await;

        if let Some(current) = self.access_token()
            && rejected != Some(current.as_str())
        {
            tracing::debug!("access credential already refreshed by another request");
            return Ok(current);
        }

        let Some(refresh) = self.refresh_token() else {
            self.clear();
            return Err(AuthError::ReauthRequired(
                "no refresh credential stored".into(),
            ));
        };

        match self.inner.endpoint.refresh(&refresh).await {
            Ok(token) => {
                let storage = &self.inner.storage;
                if let Err(error) = storage.set(ACCESS_TOKEN, &token.access) {
                    tracing::warn!(%error, "failed to persist refreshed access credential");
                }
                if let Some(rotated) = token.refresh.as_deref()
                    && let Err(error) = storage.set(REFRESH_TOKEN, rotated)
                {
                    tracing::warn!(%error, "failed to persist rotated refresh credential");
                }
                tracing::info!("access credential refreshed");
                Ok(token.access)
            }
            Err(error) => {
                tracing::warn!(%error, "credential refresh failed, clearing session");
                self.clear();
                Err(AuthError::ReauthRequired(error.to_string()))
            }
        }
    }
}
