//! General application configuration.

use serde::{Deserialize, Serialize};

fn default_sort() -> String {
    "status".to_string()
}

const fn default_pomodoro_minutes() -> u32 {
    25
}

const fn default_break_minutes() -> u32 {
    5
}

const fn default_history_days() -> u32 {
    7
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Sort key used by `task list` when none is given.
    #[serde(default = "default_sort")]
    pub default_sort: String,

    /// Focus phase length for the Pomodoro timer.
    #[serde(default = "default_pomodoro_minutes")]
    pub pomodoro_minutes: u32,

    /// Break phase length for the Pomodoro timer.
    #[serde(default = "default_break_minutes")]
    pub break_minutes: u32,

    /// Days of completion history shown by `stats`.
    #[serde(default = "default_history_days")]
    pub history_days: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_sort: default_sort(),
            pomodoro_minutes: default_pomodoro_minutes(),
            break_minutes: default_break_minutes(),
            history_days: default_history_days(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert_eq!(config.default_sort, "status");
        assert_eq!(config.pomodoro_minutes, 25);
        assert_eq!(config.break_minutes, 5);
        assert_eq!(config.history_days, 7);
    }
}
