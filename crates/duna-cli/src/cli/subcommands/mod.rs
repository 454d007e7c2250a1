mod auth;
mod goal;
mod note;
mod prefs;
mod preset;
mod stats;
mod subtask;
mod task;
mod theme;
mod time;
mod timer;

pub use auth::{AuthCommands, AuthLoginArgs, AuthRegisterArgs};
pub use goal::GoalCommands;
pub use note::{CommentCommands, NoteCommands};
pub use prefs::PrefsCommands;
pub use preset::PresetCommands;
pub use stats::StatsCommands;
pub use subtask::SubtaskCommands;
pub use task::{TaskCommands, TaskFieldArgs, TaskListArgs};
pub use theme::ThemeCommands;
pub use time::TimeCommands;
pub use timer::{TimerCommands, TimerStartArgs};
