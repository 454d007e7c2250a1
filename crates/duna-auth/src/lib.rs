//! # duna-auth
//!
//! Session state for the Duna client.
//!
//! Provides the persisted key-value state (`FileStore`, `MemoryStore`), the
//! unauthenticated `auth/` exchanges, the [`SessionStore`] with its
//! single-flight credential refresh, and the locally stored display
//! preferences.

pub mod claims;
pub mod error;
pub mod exchange;
pub mod preferences;
pub mod session;
pub mod storage;

pub use error::AuthError;
pub use exchange::AuthEndpoint;
pub use preferences::{PreferenceStore, Preferences};
pub use session::SessionStore;
pub use storage::{FileStore, KeyValueStore, MemoryStore};
