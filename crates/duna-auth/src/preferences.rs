//! Locally persisted display preferences: the dark-mode flag and a free-form
//! preferences record. Neither is sent to the backend.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::AuthError;
use crate::storage::{DARK_MODE, KeyValueStore, USER_PREFERENCES};

/// Free-form preferences record. Unknown keys are kept as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default = "enabled")]
    pub enable_notifications: bool,
    #[serde(default = "enabled")]
    pub enable_sound_alerts: bool,
    #[serde(default)]
    pub enable_focus_mode: bool,
    #[serde(default)]
    pub auto_save: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

const fn enabled() -> bool {
    true
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            enable_notifications: true,
            enable_sound_alerts: true,
            enable_focus_mode: false,
            auto_save: false,
            extra: Map::new(),
        }
    }
}

impl Preferences {
    /// Flip the boolean preference `key`. An absent key starts out false, so
    /// the first toggle sets it to true.
    ///
    /// # Errors
    ///
    /// `AuthError::Other` if `key` holds a non-boolean value.
    pub fn toggle(&mut self, key: &str) -> Result<bool, AuthError> {
        let flag = match key {
            "enable_notifications" => &mut self.enable_notifications,
            "enable_sound_alerts" => &mut self.enable_sound_alerts,
            "enable_focus_mode" => &mut self.enable_focus_mode,
            "auto_save" => &mut self.auto_save,
            _ => {
                let entry = self
                    .extra
                    .entry(key.to_string())
                    .or_insert(Value::Bool(false));
                let Value::Bool(flag) = entry else {
                    return Err(AuthError::Other(format!(
                        "preference '{key}' is not a boolean"
                    )));
                };
                flag
            }
        };
        *flag = !*flag;
        Ok(*flag)
    }
}

/// Reads and writes [`Preferences`] and the dark-mode flag.
#[derive(Clone)]
pub struct PreferenceStore {
    storage: Arc<dyn KeyValueStore>,
}

impl PreferenceStore {
    #[must_use]
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self { storage }
    }

    #[must_use]
    pub fn dark_mode(&self) -> bool {
        self.storage
            .get(DARK_MODE)
            .is_some_and(|raw| raw.trim() == "true")
    }

    /// # Errors
    ///
    /// `AuthError::Storage` if the flag cannot be persisted.
    pub fn set_dark_mode(&self, enabled: bool) -> Result<(), AuthError> {
        self.storage.set(DARK_MODE, if enabled { "true" } else { "false" })
    }

    /// Stored preferences, or the defaults when none are stored or the record
    /// is unreadable.
    #[must_use]
    pub fn load(&self) -> Preferences {
        self.storage
            .get(USER_PREFERENCES)
            .and_then(|raw| {
                serde_json::from_str(&raw)
                    .inspect_err(|error| {
                        tracing::warn!(%error, "ignoring malformed preferences record");
                    })
                    .ok()
            })
            .unwrap_or_default()
    }

    /// # Errors
    ///
    /// `AuthError::Storage` if the record cannot be persisted.
    pub fn save(&self, preferences: &Preferences) -> Result<(), AuthError> {
        let raw = serde_json::to_string(preferences)
            .map_err(|e| AuthError::Storage(format!("serialize preferences: {e}")))?;
        self.storage.set(USER_PREFERENCES, &raw)
    }

    /// Toggle one boolean preference and persist the record.
    ///
    /// # Errors
    ///
    /// See [`Preferences::toggle`] and [`Self::save`].
    pub fn toggle_preference(&self, key: &str) -> Result<bool, AuthError> {
        let mut preferences = self.load();
        let value = preferences.toggle(key)?;
        self.save(&preferences)?;
        Ok(value)
    }
}
