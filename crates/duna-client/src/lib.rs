//! # duna-client
//!
//! HTTP gateway for the Duna REST API.
//!
//! Every call carries the session's access credential as a bearer header and
//! gets one automatic refresh-and-retry on 401. Typed accessors per resource:
//! - tasks (CRUD, status actions, reorder, recurrence)
//! - subtasks, time logs, notes, comments
//! - goals, theme, filter presets, productivity stats

pub mod filter_presets;
pub mod goals;
pub mod notes;
pub mod productivity;
pub mod subtasks;
pub mod tasks;
pub mod theme;
pub mod time_logs;

mod error;
mod gateway;
mod http;

pub use error::ClientError;

use std::sync::Arc;
use std::time::Duration;

use duna_auth::{AuthEndpoint, KeyValueStore, SessionStore};
use duna_config::ApiConfig;

/// Authenticated client for the Duna API. Cheap to clone.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: SessionStore,
}

impl ApiClient {
    /// Wrap an existing HTTP client and session.
    #[must_use]
    pub fn new(http: reqwest::Client, base_url: &str, session: SessionStore) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            session,
        }
    }

    /// Build the HTTP client from `config` and open a session over `storage`
    /// sharing the same connection pool.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the HTTP client cannot be built.
    pub fn connect(
        config: &ApiConfig,
        storage: Arc<dyn KeyValueStore>,
    ) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        let base_url = config.normalized_base_url();
        let session = SessionStore::open(storage, AuthEndpoint::new(http.clone(), base_url));
        Ok(Self::new(http, base_url, session))
    }

    #[must_use]
    pub const fn session(&self) -> &SessionStore {
        &self.session
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}
