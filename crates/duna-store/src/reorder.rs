//! Local reconstitution of the collection for a drag-and-drop reorder.

use std::collections::HashSet;

use duna_core::entities::{Task, TaskId};

/// Rebuild `tasks` so pending tasks follow `order`.
///
/// Result layout: pending tasks listed in `order` (in that order), then
/// pending tasks `order` omitted (existing relative order), then completed
/// tasks (existing relative order). Ids that are unknown, completed, or
/// repeated are skipped. Pending `order` fields are rewritten to `0..n`.
///
/// Returns the resulting pending id sequence.
pub fn apply_order(tasks: &mut Vec<Task>, order: &[TaskId]) -> Vec<TaskId> {
    let (mut pending, completed): (Vec<Task>, Vec<Task>) =
        std::mem::take(tasks).into_iter().partition(Task::is_pending);

    let mut placed = HashSet::new();
    let mut arranged = Vec::with_capacity(pending.len() + completed.len());
    for id in order {
        if !placed.insert(*id) {
            continue;
        }
        if let Some(pos) = pending.iter().position(|t| t.id == *id) {
            arranged.push(pending.remove(pos));
        }
    }
    arranged.append(&mut pending);

    let mut pending_ids = Vec::with_capacity(arranged.len());
    for (index, task) in (0_i64..).zip(arranged.iter_mut()) {
        task.order = index;
        pending_ids.push(task.id);
    }

    arranged.extend(completed);
    *tasks = arranged;
    pending_ids
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use duna_core::enums::{Priority, Recurrence, TaskStatus};
    use pretty_assertions::assert_eq;

    fn task(id: TaskId, status: TaskStatus, order: i64) -> Task {
        let at = Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap();
        Task {
            id,
            title: format!("task {id}"),
            description: String::new(),
            status,
            priority: Priority::Medium,
            deadline: None,
            category: None,
            recurrence: Recurrence::None,
            order,
            created_at: at,
            updated_at: at,
            subtasks: Vec::new(),
            days_until_deadline: None,
            status_label: None,
        }
    }

    fn ids(tasks: &[Task]) -> Vec<TaskId> {
        tasks.iter().map(|t| t.id).collect()
    }

    #[test]
    fn listed_pending_then_completed() {
        let mut tasks = vec![
            task(9, TaskStatus::Completed, 0),
            task(1, TaskStatus::Pending, 0),
            task(2, TaskStatus::Pending, 1),
            task(3, TaskStatus::Pending, 2),
        ];
        let pending = apply_order(&mut tasks, &[3, 1, 2]);
        assert_eq!(pending, vec![3, 1, 2]);
        assert_eq!(ids(&tasks), vec![3, 1, 2, 9]);
        assert_eq!(
            tasks.iter().map(|t| t.order).collect::<Vec<_>>(),
            vec![0, 1, 2, 0]
        );
    }

    #[test]
    fn omitted_pending_tasks_are_kept_after_listed_ones() {
        let mut tasks = vec![
            task(1, TaskStatus::Pending, 0),
            task(2, TaskStatus::Pending, 1),
            task(3, TaskStatus::Pending, 2),
            task(4, TaskStatus::Pending, 3),
        ];
        let pending = apply_order(&mut tasks, &[4, 2]);
        assert_eq!(pending, vec![4, 2, 1, 3]);
    }

    #[test]
    fn unknown_completed_and_repeated_ids_are_skipped() {
        let mut tasks = vec![
            task(1, TaskStatus::Pending, 0),
            task(2, TaskStatus::Pending, 1),
            task(5, TaskStatus::Completed, 0),
        ];
        let pending = apply_order(&mut tasks, &[2, 42, 5, 2, 1]);
        assert_eq!(pending, vec![2, 1]);
        assert_eq!(ids(&tasks), vec![2, 1, 5]);
    }

    #[test]
    fn completed_relative_order_is_preserved() {
        let mut tasks = vec![
            task(7, TaskStatus::Completed, 0),
            task(1, TaskStatus::Pending, 0),
            task(6, TaskStatus::Completed, 0),
        ];
        apply_order(&mut tasks, &[1]);
        assert_eq!(ids(&tasks), vec![1, 7, 6]);
    }
}
