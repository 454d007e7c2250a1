use clap::Subcommand;

/// Filter preset commands.
#[derive(Clone, Debug, Subcommand)]
pub enum PresetCommands {
    /// List saved presets.
    List,
    /// Save the given filters under a name.
    Save {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "all")]
        priority: String,
        #[arg(long, default_value = "all")]
        category: String,
        #[arg(long, default_value = "all")]
        status: String,
    },
    /// Run `task list` with a saved preset's filters.
    Apply {
        name: String,
        #[arg(long)]
        sort: Option<String>,
    },
}
