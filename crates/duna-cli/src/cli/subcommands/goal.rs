use clap::Subcommand;

/// Goal commands.
#[derive(Clone, Debug, Subcommand)]
pub enum GoalCommands {
    /// List goals with progress.
    List,
    /// Create a goal.
    Create {
        #[arg(long)]
        title: String,
        #[arg(long, default_value_t = 10)]
        target: u32,
        #[arg(long, default_value_t = 0)]
        current: u32,
        #[arg(long, default_value = "tasks")]
        unit: String,
    },
}
