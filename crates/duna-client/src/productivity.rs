//! `productivity/me/`: aggregate stats maintained by the backend.

use duna_core::entities::ProductivityStats;

use crate::{ApiClient, error::ClientError};

impl ApiClient {
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails.
    pub async fn productivity(&self) -> Result<ProductivityStats, ClientError> {
        self.get("productivity/me/").await
    }
}
