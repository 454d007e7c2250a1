use duna_core::entities::Task;
use duna_store::ToggleOutcome;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct TaskStatusResponse {
    task: Task,
    next_occurrence: Option<Task>,
    warning: Option<String>,
}

impl From<ToggleOutcome> for TaskStatusResponse {
    fn from(outcome: ToggleOutcome) -> Self {
        Self {
            task: outcome.task,
            next_occurrence: outcome.spawned,
            warning: outcome.warning,
        }
    }
}

/// Complete a pending task; completing a recurring one also requests its next occurrence.
pub async fn complete(id: i64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.store.fetch().await?;
    match ctx.store.task(id) {
        Some(task) if !task.is_pending() => {
            tracing::debug!(id, "already completed");
            report(TaskStatusResponse { task, next_occurrence: None, warning: None }, flags)
        }
        Some(_) => report(ctx.store.toggle_status(id).await?.into(), flags),
        None => anyhow::bail!("task {id} not found"),
    }
}

pub async fn reopen(id: i64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let task = ctx.store.mark_pending(id).await?;
    report(TaskStatusResponse { task, next_occurrence: None, warning: None }, flags)
}

pub async fn toggle(id: i64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.store.fetch().await?;
    if ctx.store.task(id).is_none() {
        anyhow::bail!("task {id} not found");
    }
    report(ctx.store.toggle_status(id).await?.into(), flags)
}

pub async fn recur(id: i64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let next = ctx.store.create_recurring(id).await?;
    output(&next, flags.format)
}

/// The follow-up warning is soft: print it on stderr and still succeed.
fn report(response: TaskStatusResponse, flags: &GlobalFlags) -> anyhow::Result<()> {
    if let Some(warning) = &response.warning
        && !flags.quiet
    {
        eprintln!("warning: {warning}");
    }
    output(&response, flags.format)
}
