use clap::Subcommand;

use crate::cli::Switch;

/// Local preference commands.
#[derive(Clone, Debug, Subcommand)]
pub enum PrefsCommands {
    /// Show dark mode and the preferences record.
    Show,
    /// Flip a boolean preference, e.g. enable_focus_mode.
    Toggle { key: String },
    /// Set the dark mode flag.
    DarkMode { state: Switch },
}
