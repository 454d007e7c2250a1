//! # duna-view
//!
//! Read-only projections of the task collection. Nothing here mutates state
//! or touches the network.
//!
//! - [`list`]: search, filter, sort, and partition the task list, plus counters
//! - [`urgency`]: deadline classification at day granularity and badge labels
//! - [`analytics`]: completion rate, priority breakdown, completion history
//! - [`pomodoro`]: countdown state machine driven by an external clock

pub mod analytics;
pub mod list;
pub mod pomodoro;
pub mod query;
pub mod urgency;

pub use list::{ListViewModel, TaskCounts, TaskListView, derive};
pub use query::{CategoryFilter, ListQuery, PriorityFilter, SortKey};
pub use urgency::{DeadlineUrgency, days_until};
