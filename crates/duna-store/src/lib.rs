//! # duna-store
//!
//! Task collection store for the Duna client.
//!
//! [`TaskStore`] exclusively owns the in-memory task list. Every mutating
//! operation follows the same contract: on success the server's
//! representation is applied locally (replace by id, prepend on create,
//! remove on delete); on failure local state is left as it was, a
//! human-readable message is recorded as the last error, and the failure is
//! returned to the caller. Reordering is the exception: it is applied locally
//! first and never rolled back.

mod error;
mod reorder;
mod resources;
mod store;

pub use error::StoreError;
pub use reorder::apply_order;
pub use resources::RecordedTime;
pub use store::{TaskStore, ToggleOutcome};
