//! Configuration error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Figment extraction or merge error.
    #[error("Configuration error: {0}")]
    Figment(#[from] figment::Error),

    /// A configuration field has an invalid value.
    #[error("Invalid configuration value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },

    /// No platform data directory and no explicit `storage.state_dir`.
    #[error("cannot resolve a state directory; set DUNA_STORAGE__STATE_DIR")]
    NoStateDir,
}
