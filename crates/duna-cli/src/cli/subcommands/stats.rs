use clap::Subcommand;

/// Statistics commands.
#[derive(Clone, Debug, Subcommand)]
pub enum StatsCommands {
    /// Total, pending, completed, and overdue counters.
    Counts,
    /// Completion rate, priority breakdown, categories, and recent history.
    Analytics {
        /// Days of completion history. Defaults to general.history_days.
        #[arg(long)]
        days: Option<u32>,
    },
    /// Server-side productivity aggregates.
    Productivity,
}
