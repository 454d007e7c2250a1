use clap::Subcommand;

/// Subtask commands.
#[derive(Clone, Debug, Subcommand)]
pub enum SubtaskCommands {
    /// Add a checklist item.
    Add {
        task: i64,
        #[arg(long)]
        title: String,
    },
    /// Flip a checklist item between pending and completed.
    Toggle { task: i64, subtask: i64 },
    /// Remove a checklist item.
    Delete { task: i64, subtask: i64 },
}
