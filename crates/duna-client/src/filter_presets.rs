//! `filter-presets/` endpoints.

use duna_core::entities::FilterPreset;
use duna_core::requests::NewFilterPreset;

use crate::{ApiClient, error::ClientError};

impl ApiClient {
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails.
    pub async fn filter_presets(&self) -> Result<Vec<FilterPreset>, ClientError> {
        self.get("filter-presets/").await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] if the backend rejects the preset.
    pub async fn save_filter_preset(
        &self,
        preset: &NewFilterPreset,
    ) -> Result<FilterPreset, ClientError> {
        self.post("filter-presets/", preset).await
    }
}
