//! Entity structs for all Duna domain objects.
//!
//! Each entity mirrors a JSON representation returned by the backend REST API.
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON
//! roundtrip and schema validation at the API boundary.

mod filter_preset;
mod goal;
mod note;
mod productivity;
mod subtask;
mod task;
mod theme;
mod time_log;

pub use filter_preset::FilterPreset;
pub use goal::Goal;
pub use note::{Comment, CommentAuthor, Note};
pub use productivity::ProductivityStats;
pub use subtask::Subtask;
pub use task::{Task, TaskId};
pub use theme::Theme;
pub use time_log::{TimeLog, TimeLogSummary};
