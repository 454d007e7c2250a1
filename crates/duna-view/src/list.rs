//! Derivation of the displayed task list from the raw collection.

use std::cmp::Ordering;

use chrono::{DateTime, FixedOffset, NaiveDate};
use duna_core::entities::Task;
use serde::Serialize;

use crate::query::{ListQuery, SortKey};
use crate::urgency::DeadlineUrgency;

/// Counters over the whole collection, independent of search and filters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TaskCounts {
    pub total: usize,
    pub pending: usize,
    pub completed: usize,
    /// Pending tasks whose deadline day is before today.
    pub overdue: usize,
}

impl TaskCounts {
    #[must_use]
    pub fn compute(tasks: &[Task], now: DateTime<FixedOffset>) -> Self {
        let mut counts = Self {
            total: tasks.len(),
            ..Self::default()
        };
        for task in tasks {
            if task.is_pending() {
                counts.pending += 1;
                if DeadlineUrgency::classify(task.deadline, now).is_overdue() {
                    counts.overdue += 1;
                }
            } else {
                counts.completed += 1;
            }
        }
        counts
    }
}

/// What the task list renders: two ordered partitions plus the counters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TaskListView {
    pub pending: Vec<Task>,
    pub completed: Vec<Task>,
    pub counts: TaskCounts,
}

/// Filter, sort, and partition `tasks` for `query`.
///
/// Sorting is stable, so ties keep their collection order.
#[must_use]
pub fn derive(tasks: &[Task], query: &ListQuery, now: DateTime<FixedOffset>) -> TaskListView {
    let mut visible: Vec<&Task> = tasks.iter().filter(|task| query.matches(task)).collect();
    visible.sort_by(|a, b| compare(a, b, query.sort, now));

    let (pending, completed) = visible
        .into_iter()
        .cloned()
        .partition(Task::is_pending);

    TaskListView {
        pending,
        completed,
        counts: TaskCounts::compute(tasks, now),
    }
}

/// Ordering of two tasks under `key`.
#[must_use]
pub fn compare(a: &Task, b: &Task, key: SortKey, now: DateTime<FixedOffset>) -> Ordering {
    match key {
        SortKey::Deadline => match (a.deadline, b.deadline) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        },
        SortKey::Priority => a.priority.rank().cmp(&b.priority.rank()),
        SortKey::Status => {
            if a.is_pending() && b.is_pending() {
                a.order.cmp(&b.order)
            } else {
                status_rank(a, now).cmp(&status_rank(b, now))
            }
        }
        SortKey::Created => b.created_at.cmp(&a.created_at),
    }
}

/// Completed tasks rank after every urgency class.
fn status_rank(task: &Task, now: DateTime<FixedOffset>) -> u8 {
    if task.is_pending() {
        DeadlineUrgency::classify(task.deadline, now).rank()
    } else {
        3
    }
}

/// Memoised [`derive`], recomputed only when the collection revision, the
/// query, or the current day changes.
#[derive(Debug, Default)]
pub struct ListViewModel {
    cached: Option<Cached>,
    computations: u64,
}

#[derive(Debug)]
struct Cached {
    revision: u64,
    query: ListQuery,
    day: NaiveDate,
    view: TaskListView,
}

impl ListViewModel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The view for `tasks` at `revision`. `tasks` must be the collection
    /// `revision` was taken from.
    pub fn view(
        &mut self,
        revision: u64,
        tasks: &[Task],
        query: &ListQuery,
        now: DateTime<FixedOffset>,
    ) -> &TaskListView {
        let day = now.date_naive();
        let fresh = self
            .cached
            .as_ref()
            .is_some_and(|c| c.revision == revision && c.day == day && &c.query == query);
        if !fresh {
            self.cached = None;
        }
        let computations = &mut self.computations;
        let cached = self.cached.get_or_insert_with(|| {
            tracing::trace!(revision, "recomputing task list view");
            *computations += 1;
            Cached {
                revision,
                query: query.clone(),
                day,
                view: derive(tasks, query, now),
            }
        });
        &cached.view
    }

    /// How many times the view has been recomputed.
    #[must_use]
    pub const fn computations(&self) -> u64 {
        self.computations
    }
}
