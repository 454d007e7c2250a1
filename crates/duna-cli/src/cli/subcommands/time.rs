use clap::Subcommand;

/// Time log commands.
#[derive(Clone, Debug, Subcommand)]
pub enum TimeCommands {
    /// Record time spent on a task.
    Log {
        task: i64,
        #[arg(long)]
        minutes: u32,
        #[arg(long)]
        estimate: Option<u32>,
        #[arg(long, default_value = "")]
        notes: String,
    },
    /// List a task's time logs with spent and estimated totals.
    List { task: i64 },
}
