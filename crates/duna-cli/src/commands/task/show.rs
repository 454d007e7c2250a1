use duna_core::entities::{Subtask, TimeLogSummary};
use serde::Serialize;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::rows::TaskRow;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct TaskShowResponse {
    #[serde(flatten)]
    task: TaskRow,
    time: TimeLogSummary,
}

pub async fn run(id: i64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.store.fetch().await?;
    let Some(task) = ctx.store.task(id) else {
        anyhow::bail!("task {id} not found");
    };
    let time = ctx.store.time_log_summary(id).await?;

    let response = TaskShowResponse {
        task: TaskRow::new(task, AppContext::now()),
        time,
    };
    output(&response, flags.format)?;

    if !flags.quiet && flags.format == OutputFormat::Table {
        print_checklist(&response.task.task.subtasks);
    }
    Ok(())
}

fn print_checklist(subtasks: &[Subtask]) {
    if subtasks.is_empty() {
        return;
    }
    println!();
    for subtask in subtasks {
        let mark = if subtask.status.is_pending() { ' ' } else { 'x' };
        println!("[{mark}] {} (#{})", subtask.title, subtask.id);
    }
}
