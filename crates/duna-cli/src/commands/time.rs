use duna_core::entities::{TimeLog, TimeLogSummary};
use duna_core::requests::NewTimeLog;
use duna_store::RecordedTime;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::TimeCommands;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct TimeListResponse {
    summary: TimeLogSummary,
    logs: Vec<TimeLog>,
}

#[derive(Serialize)]
struct TimeLogResponse {
    log: TimeLog,
    summary: Option<TimeLogSummary>,
    logs: Option<Vec<TimeLog>>,
    warning: Option<String>,
}

impl From<RecordedTime> for TimeLogResponse {
    fn from(recorded: RecordedTime) -> Self {
        Self {
            summary: recorded.summary(),
            log: recorded.log,
            logs: recorded.logs,
            warning: recorded.warning,
        }
    }
}

/// Handle `duna time`.
pub async fn handle(action: &TimeCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        TimeCommands::Log {
            task,
            minutes,
            estimate,
            notes,
        } => {
            let entry = NewTimeLog {
                duration_minutes: *minutes,
                estimated_minutes: *estimate,
                notes: notes.clone(),
            };
            let response = TimeLogResponse::from(ctx.store.record_time(*task, &entry).await?);
            if let Some(warning) = &response.warning
                && !flags.quiet
            {
                eprintln!("warning: {warning}");
            }
            output(&response, flags.format)
        }
        TimeCommands::List { task } => {
            let logs = ctx.store.time_logs(*task).await?;
            let summary = TimeLogSummary::from_logs(&logs);
            output(&TimeListResponse { summary, logs }, flags.format)
        }
    }
}
