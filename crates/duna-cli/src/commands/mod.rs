pub mod dispatch;

mod auth;
mod goal;
mod note;
mod prefs;
mod preset;
mod shared;
mod stats;
mod subtask;
mod task;
mod theme;
mod time;
mod timer;
