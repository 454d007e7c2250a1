//! `theme/me/`: the current user's theme. Read and partial update only.

use duna_core::entities::Theme;
use duna_core::requests::ThemeUpdate;

use crate::{ApiClient, error::ClientError};

const THEME_PATH: &str = "theme/me/";

impl ApiClient {
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails.
    pub async fn theme(&self) -> Result<Theme, ClientError> {
        self.get(THEME_PATH).await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] if the backend rejects a value.
    pub async fn update_theme(&self, update: &ThemeUpdate) -> Result<Theme, ClientError> {
        self.put(THEME_PATH, update).await
    }
}
