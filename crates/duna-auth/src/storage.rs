//! Client-local persistent key-value storage.
//!
//! Holds the session credentials, identity record, dark-mode flag and the
//! preferences record. Values are strings (JSON-encoded where structured), the
//! whole document is rewritten on every change, and nothing is versioned or
//! migrated.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::AuthError;

pub const ACCESS_TOKEN: &str = "access_token";
pub const REFRESH_TOKEN: &str = "refresh_token";
pub const USER: &str = "user";
pub const DARK_MODE: &str = "dark_mode";
pub const USER_PREFERENCES: &str = "user_preferences";

const STATE_FILE_NAME: &str = "state.json";

/// Persistent string map shared by the session and preference stores.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns `AuthError::Storage` if the change cannot be persisted.
    fn set(&self, key: &str, value: &str) -> Result<(), AuthError>;

    /// Removing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Storage` if the change cannot be persisted.
    fn remove(&self, key: &str) -> Result<(), AuthError>;

    /// Set several keys at once. Either every entry is applied or none is.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Storage` if the change cannot be persisted.
    fn set_many(&self, entries: &[(&str, &str)]) -> Result<(), AuthError>;
}

// ---------------------------------------------------------------------------
// MemoryStore
// ---------------------------------------------------------------------------

/// Non-persistent store for tests and one-shot runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<BTreeMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn values(&self) -> std::sync::MutexGuard<'_, BTreeMap<String, String>> {
        self.values
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AuthError> {
        self.values().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), AuthError> {
        self.values().remove(key);
        Ok(())
    }

    fn set_many(&self, entries: &[(&str, &str)]) -> Result<(), AuthError> {
        let mut values = self.values();
        for (key, value) in entries {
            values.insert((*key).to_string(), (*value).to_string());
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// FileStore
// ---------------------------------------------------------------------------

/// JSON document at `<state_dir>/state.json`, directory 0700 and file 0600 on unix.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    values: Mutex<BTreeMap<String, String>>,
}

impl FileStore {
    /// Open the store, reading any previously persisted document.
    ///
    /// A missing file is an empty store. An unreadable or corrupt file is
    /// logged and treated as empty; it is overwritten on the next change.
    #[must_use]
    pub fn open(state_dir: &Path) -> Self {
        let path = state_dir.join(STATE_FILE_NAME);
        let values = read_document(&path).unwrap_or_else(|error| {
            tracing::warn!(%error, path = %path.display(), "ignoring unreadable state file");
            BTreeMap::new()
        });
        Self {
            path,
            values: Mutex::new(values),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Apply `change` to a copy, persist it, then swap it in.
    ///
    /// When the write fails the in-memory document is left as it was.
    fn update(
        &self,
        change: impl FnOnce(&mut BTreeMap<String, String>) -> bool,
    ) -> Result<(), AuthError> {
        let mut values = self
            .values
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let mut next = values.clone();
        if change(&mut next) {
            write_document(&self.path, &next)?;
            *values = next;
        }
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AuthError> {
        self.update(|values| {
            values.insert(key.to_string(), value.to_string()).as_deref() != Some(value)
        })
    }

    fn remove(&self, key: &str) -> Result<(), AuthError> {
        self.update(|values| values.remove(key).is_some())
    }

    fn set_many(&self, entries: &[(&str, &str)]) -> Result<(), AuthError> {
        self.update(|values| {
            entries.iter().fold(false, |changed, (key, value)| {
                values.insert((*key).to_string(), (*value).to_string()).as_deref() != Some(*value)
                    || changed
            })
        })
    }
}

fn read_document(path: &Path) -> Result<BTreeMap<String, String>, AuthError> {
    if !path.exists() {
        return Ok(BTreeMap::new());
    }
    let raw = fs::read_to_string(path)
        .map_err(|e| AuthError::Storage(format!("read {}: {e}", path.display())))?;
    if raw.trim().is_empty() {
        return Ok(BTreeMap::new());
    }
    serde_json::from_str(&raw)
        .map_err(|e| AuthError::Storage(format!("parse {}: {e}", path.display())))
}

fn write_document(path: &Path, values: &BTreeMap<String, String>) -> Result<(), AuthError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| AuthError::Storage(format!("mkdir {}: {e}", parent.display())))?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Err(e) = fs::set_permissions(parent, fs::Permissions::from_mode(0o700)) {
                tracing::warn!("failed to chmod 0700 {}: {e}", parent.display());
            }
        }
    }

    let contents = serde_json::to_string_pretty(values)
        .map_err(|e| AuthError::Storage(format!("serialize state: {e}")))?;
    fs::write(path, contents)
        .map_err(|e| AuthError::Storage(format!("write {}: {e}", path.display())))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600))
            .map_err(|e| AuthError::Storage(format!("chmod {}: {e}", path.display())))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_set_get_remove() {
        let store = MemoryStore::new();
        assert!(store.get(ACCESS_TOKEN).is_none());
        store.set(ACCESS_TOKEN, "abc").unwrap();
        assert_eq!(store.get(ACCESS_TOKEN).as_deref(), Some("abc"));
        store.remove(ACCESS_TOKEN).unwrap();
        store.remove(ACCESS_TOKEN).unwrap();
        assert!(store.get(ACCESS_TOKEN).is_none());
    }

    #[test]
    fn file_store_persists_across_reopen() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let store = FileStore::open(tmp.path());
        store.set(ACCESS_TOKEN, "token-1").unwrap();
        store.set(USER, r#"{"username":"ana"}"#).unwrap();
        drop(store);

        let reopened = FileStore::open(tmp.path());
        assert_eq!(reopened.get(ACCESS_TOKEN).as_deref(), Some("token-1"));
        assert_eq!(reopened.get(USER).as_deref(), Some(r#"{"username":"ana"}"#));
    }

    #[cfg(unix)]
    #[test]
    fn file_store_restricts_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let state_dir = tmp.path().join("nested");
        let store = FileStore::open(&state_dir);
        store.set(REFRESH_TOKEN, "secret").unwrap();

        let mode = fs::metadata(store.path()).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o600, "state file should be 0600");
        let dir_mode = fs::metadata(&state_dir).unwrap().permissions().mode() & 0o777;
        assert_eq!(dir_mode, 0o700, "state dir should be 0700");
    }

    #[test]
    fn corrupt_file_is_treated_as_empty() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        fs::write(tmp.path().join(STATE_FILE_NAME), "{not json").unwrap();
        let store = FileStore::open(tmp.path());
        assert!(store.get(ACCESS_TOKEN).is_none());
        store.set(ACCESS_TOKEN, "fresh").unwrap();
        assert_eq!(
            FileStore::open(tmp.path()).get(ACCESS_TOKEN).as_deref(),
            Some("fresh")
        );
    }

    #[test]
    fn failed_write_leaves_document_unchanged() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let blocker = tmp.path().join("not-a-dir");
        fs::write(&blocker, "").unwrap();
        let store = FileStore::open(&blocker.join("state"));

        assert!(store.set(ACCESS_TOKEN, "a1").is_err());
        assert!(
            store
                .set_many(&[(ACCESS_TOKEN, "a1"), (REFRESH_TOKEN, "r1")])
                .is_err()
        );
        assert!(store.get(ACCESS_TOKEN).is_none());
        assert!(store.get(REFRESH_TOKEN).is_none());
    }

    #[test]
    fn set_many_writes_all_entries_together() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let store = FileStore::open(tmp.path());
        store
            .set_many(&[(ACCESS_TOKEN, "a1"), (REFRESH_TOKEN, "r1")])
            .unwrap();

        let reopened = FileStore::open(tmp.path());
        assert_eq!(reopened.get(ACCESS_TOKEN).as_deref(), Some("a1"));
        assert_eq!(reopened.get(REFRESH_TOKEN).as_deref(), Some("r1"));
    }

    #[test]
    fn removing_absent_key_does_not_create_file() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let store = FileStore::open(tmp.path());
        store.remove(ACCESS_TOKEN).unwrap();
        assert!(!store.path().exists());
    }
}
