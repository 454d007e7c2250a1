//! List query: search text, priority and category filters, sort key.

use std::fmt;
use std::str::FromStr;

use duna_core::CoreError;
use duna_core::entities::Task;
use duna_core::enums::Priority;
use serde::{Deserialize, Serialize};

/// `"all"` or one priority.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriorityFilter {
    #[default]
    All,
    Only(Priority),
}

impl PriorityFilter {
    #[must_use]
    pub fn matches(self, priority: Priority) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == priority,
        }
    }
}

impl FromStr for PriorityFilter {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" | "" => Ok(Self::All),
            "low" => Ok(Self::Only(Priority::Low)),
            "medium" => Ok(Self::Only(Priority::Medium)),
            "high" => Ok(Self::Only(Priority::High)),
            other => Err(CoreError::Validation(format!(
                "unknown priority filter '{other}' (expected all, low, medium, high)"
            ))),
        }
    }
}

impl fmt::Display for PriorityFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(priority) => f.write_str(priority.as_str()),
        }
    }
}

/// `"all"` or one exact category. Tasks without a category only pass `All`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    #[must_use]
    pub fn matches(&self, category: Option<&str>) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => category == Some(wanted.as_str()),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || s.eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            Ok(Self::Only(s.to_string()))
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(category) => f.write_str(category),
        }
    }
}

/// Sort key for the task list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Deadline,
    Priority,
    /// Pending by display order, urgent first, completed last.
    #[default]
    Status,
    /// Newest first.
    Created,
}

impl SortKey {
    pub const ALL: [Self; 4] = [Self::Status, Self::Deadline, Self::Priority, Self::Created];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Deadline => "deadline",
            Self::Priority => "priority",
            Self::Status => "status",
            Self::Created => "created",
        }
    }
}

impl FromStr for SortKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == wanted)
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "unknown sort key '{s}' (expected status, deadline, priority, created)"
                ))
            })
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the list derivation depends on besides the tasks and the clock.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListQuery {
    pub search: String,
    pub priority: PriorityFilter,
    pub category: CategoryFilter,
    pub sort: SortKey,
}

impl ListQuery {
    /// Whether `task` passes the search text and both filters.
    ///
    /// Search is a case-insensitive substring match on title or description.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        let needle = self.search.to_lowercase();
        let found = needle.is_empty()
            || task.title.to_lowercase().contains(&needle)
            || task.description.to_lowercase().contains(&needle);
        found && self.priority.matches(task.priority) && self.category.matches(task.category.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_filter_parses_all_and_values() {
        assert_eq!("all".parse::<PriorityFilter>().unwrap(), PriorityFilter::All);
        assert_eq!(
            "High".parse::<PriorityFilter>().unwrap(),
            PriorityFilter::Only(Priority::High)
        );
        assert!("urgent".parse::<PriorityFilter>().is_err());
    }

    #[test]
    fn category_filter_matches_exactly() {
        let filter: CategoryFilter = "Math".parse().unwrap();
        assert!(filter.matches(Some("Math")));
        assert!(!filter.matches(Some("math")));
        assert!(!filter.matches(None));
        assert!(CategoryFilter::All.matches(None));
    }

    #[test]
    fn sort_key_round_trips_through_str() {
        for key in SortKey::ALL {
            assert_eq!(key.as_str().parse::<SortKey>().unwrap(), key);
            assert_eq!(key.to_string(), key.as_str());
        }
        assert_eq!(SortKey::default(), SortKey::Status);
        assert!("alphabetical".parse::<SortKey>().is_err());
    }
}
