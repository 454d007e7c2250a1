//! Aggregates for the stats and analytics screens.

use std::collections::BTreeMap;

use chrono::{DateTime, Days, FixedOffset, NaiveDate};
use duna_core::entities::Task;
use duna_core::enums::{Priority, TaskStatus};
use serde::Serialize;

const UNCATEGORIZED: &str = "uncategorized";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PriorityBreakdown {
    pub priority: Priority,
    pub completed: usize,
    pub pending: usize,
}

impl PriorityBreakdown {
    #[must_use]
    pub const fn total(&self) -> usize {
        self.completed + self.pending
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyCompletions {
    pub date: NaiveDate,
    pub completed: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analytics {
    pub total: usize,
    pub completed: usize,
    pub completion_rate: u32,
    pub by_priority: Vec<PriorityBreakdown>,
    pub history: Vec<DailyCompletions>,
    pub categories: Vec<CategoryCount>,
}

impl Analytics {
    #[must_use]
    pub fn compute(tasks: &[Task], history_days: u32, now: DateTime<FixedOffset>) -> Self {
        Self {
            total: tasks.len(),
            completed: tasks.iter().filter(|t| !t.is_pending()).count(),
            completion_rate: completion_rate(tasks),
            by_priority: priority_breakdown(tasks),
            history: completions_by_day(tasks, history_days, now),
            categories: category_counts(tasks),
        }
    }
}

/// Share of completed tasks as a rounded percentage; 0 for an empty collection.
#[must_use]
pub fn completion_rate(tasks: &[Task]) -> u32 {
    if tasks.is_empty() {
        return 0;
    }
    let completed = tasks.iter().filter(|t| !t.is_pending()).count();
    // Integer round-half-up of completed * 100 / total.
    let rate = (completed * 200 + tasks.len()) / (tasks.len() * 2);
    u32::try_from(rate).unwrap_or(100)
}

/// Completed and pending counts per priority, high first.
#[must_use]
pub fn priority_breakdown(tasks: &[Task]) -> Vec<PriorityBreakdown> {
    Priority::ALL
        .into_iter()
        .map(|priority| {
            let (completed, pending) = tasks
                .iter()
                .filter(|t| t.priority == priority)
                .fold((0, 0), |(done, open), t| match t.status {
                    TaskStatus::Completed => (done + 1, open),
                    TaskStatus::Pending => (done, open + 1),
                });
            PriorityBreakdown {
                priority,
                completed,
                pending,
            }
        })
        .collect()
}

/// Completed tasks per day for the last `days` days ending today, oldest
/// first. A task counts on the local date of its last update.
#[must_use]
pub fn completions_by_day(
    tasks: &[Task],
    days: u32,
    now: DateTime<FixedOffset>,
) -> Vec<DailyCompletions> {
    let today = now.date_naive();
    let mut per_day: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for task in tasks.iter().filter(|t| !t.is_pending()) {
        let day = task.updated_at.with_timezone(now.offset()).date_naive();
        *per_day.entry(day).or_default() += 1;
    }
    (0..days)
        .rev()
        .filter_map(|back| today.checked_sub_days(Days::new(u64::from(back))))
        .map(|date| DailyCompletions {
            date,
            completed: per_day.get(&date).copied().unwrap_or(0),
        })
        .collect()
}

/// Tasks per category, most used first, ties by name.
#[must_use]
pub fn category_counts(tasks: &[Task]) -> Vec<CategoryCount> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for task in tasks {
        *counts
            .entry(task.category.as_deref().unwrap_or(UNCATEGORIZED))
            .or_default() += 1;
    }
    let mut counts: Vec<CategoryCount> = counts
        .into_iter()
        .map(|(category, count)| CategoryCount {
            category: category.to_string(),
            count,
        })
        .collect();
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}
