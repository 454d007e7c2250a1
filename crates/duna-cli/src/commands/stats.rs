use duna_view::TaskCounts;
use duna_view::analytics::{Analytics, CategoryCount, DailyCompletions, PriorityBreakdown};

use crate::cli::{GlobalFlags, OutputFormat};
use crate::cli::subcommands::StatsCommands;
use crate::context::AppContext;
use crate::output::{Tabular, output, output_rows};

/// Handle `duna stats`.
pub async fn handle(action: &StatsCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        StatsCommands::Counts => {
            ctx.store.fetch().await?;
            let counts = TaskCounts::compute(&ctx.store.tasks(), AppContext::now());
            output(&counts, flags.format)
        }
        StatsCommands::Analytics { days } => {
            ctx.store.fetch().await?;
            let days = days.unwrap_or(ctx.config.general.history_days);
            let analytics = Analytics::compute(&ctx.store.tasks(), days, AppContext::now());
            if flags.format == OutputFormat::Table {
                print_analytics_tables(&analytics, flags)
            } else {
                output(&analytics, flags.format)
            }
        }
        StatsCommands::Productivity => output(&ctx.store.productivity().await?, flags.format),
    }
}

fn print_analytics_tables(analytics: &Analytics, flags: &GlobalFlags) -> anyhow::Result<()> {
    println!(
        "{} of {} tasks completed ({}%)\n",
        analytics.completed, analytics.total, analytics.completion_rate
    );
    output_rows(&analytics.by_priority, flags.format)?;
    println!();
    output_rows(&analytics.categories, flags.format)?;
    println!();
    output_rows(&analytics.history, flags.format)
}

impl Tabular for PriorityBreakdown {
    fn headers() -> &'static [&'static str] {
        &["priority", "completed", "pending", "total"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.priority.as_str().to_string(),
            self.completed.to_string(),
            self.pending.to_string(),
            self.total().to_string(),
        ]
    }
}

impl Tabular for CategoryCount {
    fn headers() -> &'static [&'static str] {
        &["category", "tasks"]
    }

    fn row(&self) -> Vec<String> {
        vec![self.category.clone(), self.count.to_string()]
    }
}

impl Tabular for DailyCompletions {
    fn headers() -> &'static [&'static str] {
        &["date", "completed"]
    }

    fn row(&self) -> Vec<String> {
        vec![self.date.format("%a %d %b").to_string(), self.completed.to_string()]
    }
}
