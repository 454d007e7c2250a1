use std::path::PathBuf;
use std::sync::Arc;

use chrono::{DateTime, FixedOffset, Local};
use duna_auth::{FileStore, KeyValueStore, PreferenceStore, SessionStore};
use duna_client::ApiClient;
use duna_config::DunaConfig;
use duna_store::TaskStore;

/// Shared application resources initialized once at startup.
///
/// Building the context touches only the local state file; nothing here
/// talks to the backend.
pub struct AppContext {
    pub config: DunaConfig,
    pub store: TaskStore,
    pub preferences: PreferenceStore,
    pub state_file: PathBuf,
}

impl AppContext {
    pub fn init(config: DunaConfig) -> anyhow::Result<Self> {
        let state_dir = config.storage.resolve_state_dir()?;
        let file = FileStore::open(&state_dir);
        let state_file = file.path().to_path_buf();
        tracing::debug!(path = %state_file.display(), "opened client state");

        let storage: Arc<dyn KeyValueStore> = Arc::new(file);
        let client = ApiClient::connect(&config.api, Arc::clone(&storage))?;

        Ok(Self {
            config,
            store: TaskStore::new(client),
            preferences: PreferenceStore::new(storage),
            state_file,
        })
    }

    #[must_use]
    pub const fn session(&self) -> &SessionStore {
        self.store.client().session()
    }

    /// Fail early instead of letting an anonymous request bounce off a 401.
    pub fn require_session(&self) -> anyhow::Result<()> {
        if self.session().is_authenticated() {
            Ok(())
        } else {
            anyhow::bail!("not logged in, run `duna auth login --username <name>` first")
        }
    }

    /// Wall clock in the local offset; deadline days are counted in it.
    #[must_use]
    pub fn now() -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}
