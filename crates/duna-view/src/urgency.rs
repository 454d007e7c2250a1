//! Deadline urgency at day granularity.
//!
//! Days are counted midnight to midnight in the offset of `now`, so a
//! deadline at 00:30 tomorrow is "due tomorrow" even if it is 40 minutes away.

use std::fmt;

use chrono::{DateTime, FixedOffset, Utc};
use serde::Serialize;

/// Whole calendar days from `now`'s date to the deadline's date, both taken in
/// `now`'s offset. Negative when the deadline's day has passed.
#[must_use]
pub fn days_until(deadline: DateTime<Utc>, now: DateTime<FixedOffset>) -> i64 {
    let deadline_day = deadline.with_timezone(now.offset()).date_naive();
    (deadline_day - now.date_naive()).num_days()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DeadlineUrgency {
    /// `days` is how many days late, always at least 1.
    Overdue { days: i64 },
    DueToday,
    DueTomorrow,
    /// `days` is at least 2.
    DueIn { days: i64 },
    /// No deadline.
    Upcoming,
}

impl DeadlineUrgency {
    #[must_use]
    pub fn classify(deadline: Option<DateTime<Utc>>, now: DateTime<FixedOffset>) -> Self {
        let Some(deadline) = deadline else {
            return Self::Upcoming;
        };
        match days_until(deadline, now) {
            days if days < 0 => Self::Overdue { days: -days },
            0 => Self::DueToday,
            1 => Self::DueTomorrow,
            days => Self::DueIn { days },
        }
    }

    /// Days until the deadline, `None` without one.
    #[must_use]
    pub const fn days_left(self) -> Option<i64> {
        match self {
            Self::Overdue { days } => Some(-days),
            Self::DueToday => Some(0),
            Self::DueTomorrow => Some(1),
            Self::DueIn { days } => Some(days),
            Self::Upcoming => None,
        }
    }

    /// Rank used by the status sort: overdue, then due today, then the rest.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Overdue { .. } => 0,
            Self::DueToday => 1,
            Self::DueTomorrow | Self::DueIn { .. } | Self::Upcoming => 2,
        }
    }

    #[must_use]
    pub const fn is_overdue(self) -> bool {
        matches!(self, Self::Overdue { .. })
    }

    /// Badge text shown next to a task.
    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::Overdue { days: 1 } => "Overdue by 1 day".to_string(),
            Self::Overdue { days } => format!("Overdue by {days} days"),
            Self::DueToday => "Due today".to_string(),
            Self::DueTomorrow => "Due tomorrow".to_string(),
            Self::DueIn { days } => format!("Due in {days} days"),
            Self::Upcoming => "Upcoming".to_string(),
        }
    }
}

impl fmt::Display for DeadlineUrgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(offset_hours: i32, y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<FixedOffset> {
        FixedOffset::east_opt(offset_hours * 3600)
            .unwrap()
            .with_ymd_and_hms(y, m, d, h, min, 0)
            .unwrap()
    }

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    #[test]
    fn classification_boundaries() {
        let now = at(0, 2026, 3, 10, 15, 0);
        assert_eq!(
            DeadlineUrgency::classify(Some(utc(2026, 3, 8, 12, 0)), now),
            DeadlineUrgency::Overdue { days: 2 }
        );
        assert_eq!(
            DeadlineUrgency::classify(Some(utc(2026, 3, 10, 1, 0)), now),
            DeadlineUrgency::DueToday
        );
        assert_eq!(
            DeadlineUrgency::classify(Some(utc(2026, 3, 11, 0, 30)), now),
            DeadlineUrgency::DueTomorrow
        );
        assert_eq!(
            DeadlineUrgency::classify(Some(utc(2026, 3, 15, 9, 0)), now),
            DeadlineUrgency::DueIn { days: 5 }
        );
        assert_eq!(DeadlineUrgency::classify(None, now), DeadlineUrgency::Upcoming);
    }

    #[test]
    fn earlier_today_is_due_today_not_overdue() {
        let now = at(0, 2026, 3, 10, 23, 0);
        let urgency = DeadlineUrgency::classify(Some(utc(2026, 3, 10, 8, 0)), now);
        assert_eq!(urgency, DeadlineUrgency::DueToday);
        assert!(!urgency.is_overdue());
    }

    #[test]
    fn day_boundary_follows_callers_offset() {
        // 23:30 UTC on the 10th is already the 11th at UTC+2.
        let deadline = utc(2026, 3, 10, 23, 30);
        assert_eq!(days_until(deadline, at(0, 2026, 3, 10, 12, 0)), 0);
        assert_eq!(days_until(deadline, at(2, 2026, 3, 10, 12, 0)), 1);
    }

    #[test]
    fn days_left_matches_days_until_for_every_class() {
        let now = at(-5, 2026, 1, 31, 18, 0);
        for offset_days in -40..40 {
            let deadline = (now + chrono::Duration::days(offset_days)).with_timezone(&Utc);
            let urgency = DeadlineUrgency::classify(Some(deadline), now);
            assert_eq!(urgency.days_left(), Some(days_until(deadline, now)));
            assert_eq!(urgency.days_left(), Some(offset_days));
        }
    }

    #[test]
    fn labels() {
        assert_eq!(DeadlineUrgency::Overdue { days: 1 }.label(), "Overdue by 1 day");
        assert_eq!(DeadlineUrgency::Overdue { days: 3 }.label(), "Overdue by 3 days");
        assert_eq!(DeadlineUrgency::DueToday.to_string(), "Due today");
        assert_eq!(DeadlineUrgency::DueTomorrow.label(), "Due tomorrow");
        assert_eq!(DeadlineUrgency::DueIn { days: 4 }.label(), "Due in 4 days");
        assert_eq!(DeadlineUrgency::Upcoming.label(), "Upcoming");
    }

    #[test]
    fn rank_orders_overdue_then_today_then_rest() {
        assert!(DeadlineUrgency::Overdue { days: 1 }.rank() < DeadlineUrgency::DueToday.rank());
        assert!(DeadlineUrgency::DueToday.rank() < DeadlineUrgency::DueTomorrow.rank());
        assert_eq!(DeadlineUrgency::DueIn { days: 9 }.rank(), DeadlineUrgency::Upcoming.rank());
    }
}
