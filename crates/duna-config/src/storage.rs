//! Client-local persisted state location.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::ConfigError;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Directory holding the persisted session/preferences document.
    /// Empty means the platform data directory (`~/.local/share/duna` on Linux).
    #[serde(default)]
    pub state_dir: String,
}

impl StorageConfig {
    /// # Errors
    ///
    /// Returns [`ConfigError::NoStateDir`] if `state_dir` is empty and the
    /// platform has no data directory.
    pub fn resolve_state_dir(&self) -> Result<PathBuf, ConfigError> {
        if !self.state_dir.is_empty() {
            return Ok(PathBuf::from(&self.state_dir));
        }
        dirs::data_dir()
            .map(|dir| dir.join("duna"))
            .ok_or(ConfigError::NoStateDir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_dir_wins() {
        let config = StorageConfig {
            state_dir: "/tmp/duna-state".into(),
        };
        assert_eq!(
            config.resolve_state_dir().unwrap(),
            PathBuf::from("/tmp/duna-state")
        );
    }

    #[test]
    fn default_dir_is_named_duna() {
        if let Ok(dir) = StorageConfig::default().resolve_state_dir() {
            assert!(dir.ends_with("duna"));
        }
    }
}
