use clap::Subcommand;

use crate::cli::Switch;

/// Theme commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ThemeCommands {
    /// Show the account theme.
    Show,
    /// Change some theme fields; the rest stay as they are.
    Set {
        #[arg(long)]
        primary: Option<String>,
        #[arg(long)]
        secondary: Option<String>,
        #[arg(long)]
        accent: Option<String>,
        #[arg(long)]
        font: Option<String>,
        #[arg(long)]
        dark_mode: Option<Switch>,
    },
}
