use clap::Subcommand;

use crate::cli::subcommands::{
    AuthCommands, CommentCommands, GoalCommands, NoteCommands, PrefsCommands, PresetCommands,
    StatsCommands, SubtaskCommands, TaskCommands, ThemeCommands, TimeCommands, TimerCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Log in, register, and inspect the stored session.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Tasks.
    Task {
        #[command(subcommand)]
        action: TaskCommands,
    },
    /// Checklist items inside a task.
    Subtask {
        #[command(subcommand)]
        action: SubtaskCommands,
    },
    /// Time logged against a task.
    Time {
        #[command(subcommand)]
        action: TimeCommands,
    },
    /// Private notes on a task.
    Note {
        #[command(subcommand)]
        action: NoteCommands,
    },
    /// Comments on a task.
    Comment {
        #[command(subcommand)]
        action: CommentCommands,
    },
    /// Goals.
    Goal {
        #[command(subcommand)]
        action: GoalCommands,
    },
    /// Account theme.
    Theme {
        #[command(subcommand)]
        action: ThemeCommands,
    },
    /// Saved filter presets.
    Preset {
        #[command(subcommand)]
        action: PresetCommands,
    },
    /// Local preferences (no network).
    Prefs {
        #[command(subcommand)]
        action: PrefsCommands,
    },
    /// Counters, analytics, and productivity stats.
    Stats {
        #[command(subcommand)]
        action: StatsCommands,
    },
    /// Pomodoro focus timer.
    Timer {
        #[command(subcommand)]
        action: TimerCommands,
    },
}

impl Commands {
    /// Whether the command talks to the backend on the user's behalf.
    #[must_use]
    pub fn requires_session(&self) -> bool {
        match self {
            Self::Auth { .. } | Self::Prefs { .. } => false,
            Self::Timer {
                action: TimerCommands::Start(args),
            } => args.log,
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use crate::cli::Cli;

    fn requires_session(args: &[&str]) -> bool {
        Cli::try_parse_from(args)
            .expect("cli should parse")
            .command
            .requires_session()
    }

    #[test]
    fn local_commands_do_not_need_a_session() {
        assert!(!requires_session(&["duna", "auth", "login", "--username", "ada"]));
        assert!(!requires_session(&["duna", "prefs", "show"]));
        assert!(!requires_session(&["duna", "timer", "start"]));
    }

    #[test]
    fn backend_commands_need_a_session() {
        assert!(requires_session(&["duna", "task", "list"]));
        assert!(requires_session(&["duna", "stats", "productivity"]));
        assert!(requires_session(&["duna", "timer", "start", "--task", "1", "--log"]));
    }
}
