use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Minimal identity record persisted alongside the session credentials.
///
/// Produced by `duna-auth` at login and consumed by the CLI for status output.
/// The backend's token endpoint returns no profile, so this only carries the
/// username the user logged in with.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct UserIdentity {
    pub username: String,
}
