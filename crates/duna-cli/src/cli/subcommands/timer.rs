use clap::{Args, Subcommand};

/// Pomodoro timer commands.
#[derive(Clone, Debug, Subcommand)]
pub enum TimerCommands {
    /// Run focus and break phases in the foreground. Ctrl-C stops early.
    Start(TimerStartArgs),
}

#[derive(Clone, Debug, Args)]
pub struct TimerStartArgs {
    /// Focus minutes. Defaults to general.pomodoro_minutes.
    #[arg(long)]
    pub focus: Option<u32>,
    /// Break minutes. Defaults to general.break_minutes.
    #[arg(long = "break")]
    pub break_minutes: Option<u32>,
    /// Focus phases to run; each is followed by a break except the last.
    #[arg(long, default_value_t = 1)]
    pub cycles: u32,
    /// Task the focus time belongs to.
    #[arg(long)]
    pub task: Option<i64>,
    /// Record each finished focus phase as a time log on --task.
    #[arg(long, requires = "task")]
    pub log: bool,
}
