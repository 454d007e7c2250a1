use clap::{Args, Subcommand};

/// Task commands.
#[derive(Clone, Debug, Subcommand)]
pub enum TaskCommands {
    /// List tasks, pending first, with counters over the whole collection.
    List(TaskListArgs),
    /// Show one task with its deadline badge and subtasks.
    Show { id: i64 },
    /// Create a task.
    Create {
        #[arg(long)]
        title: String,
        #[command(flatten)]
        fields: TaskFieldArgs,
    },
    /// Update a task. Omitted fields keep their current value.
    Update {
        id: i64,
        #[arg(long)]
        title: Option<String>,
        #[command(flatten)]
        fields: TaskFieldArgs,
    },
    /// Delete a task.
    Delete { id: i64 },
    /// Mark a task completed. Recurring tasks spawn their next occurrence.
    Complete { id: i64 },
    /// Mark a task pending again.
    Reopen { id: i64 },
    /// Flip a task between pending and completed.
    Toggle { id: i64 },
    /// Set the order of pending tasks. Pending tasks left out keep their place after the listed ones.
    Reorder {
        #[arg(required = true, num_args = 1..)]
        ids: Vec<i64>,
    },
    /// Create the next occurrence of a recurring task.
    Recur { id: i64 },
}

#[derive(Clone, Debug, Default, Args)]
pub struct TaskListArgs {
    /// Case-insensitive match on title or description.
    #[arg(long)]
    pub search: Option<String>,
    /// all, high, medium or low.
    #[arg(long)]
    pub priority: Option<String>,
    /// Category name, or "all".
    #[arg(long)]
    pub category: Option<String>,
    /// status, deadline, priority or created.
    #[arg(long)]
    pub sort: Option<String>,
}

/// Editable task fields shared by create and update.
#[derive(Clone, Debug, Default, Args)]
pub struct TaskFieldArgs {
    #[arg(long)]
    pub description: Option<String>,
    /// high, medium or low.
    #[arg(long)]
    pub priority: Option<String>,
    /// YYYY-MM-DD (end of day, local time) or RFC 3339. Use "none" to clear.
    #[arg(long)]
    pub deadline: Option<String>,
    /// Use "" to clear.
    #[arg(long)]
    pub category: Option<String>,
    /// none, daily, weekly or monthly.
    #[arg(long)]
    pub recurrence: Option<String>,
}
