use duna_core::requests::TaskDraft;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::TaskFieldArgs;
use crate::commands::shared::parse::{parse_deadline, parse_enum};
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct TaskDeleteResponse {
    id: i64,
    deleted: bool,
}

pub async fn create(title: &str, fields: &TaskFieldArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut draft = TaskDraft::new(title);
    apply_fields(&mut draft, fields)?;
    let task = ctx.store.create(&draft).await?;
    output(&task, flags.format)
}

pub async fn update(
    id: i64,
    title: Option<&str>,
    fields: &TaskFieldArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    ctx.store.fetch().await?;
    let Some(current) = ctx.store.task(id) else {
        anyhow::bail!("task {id} not found");
    };

    let mut draft = TaskDraft::from_task(&current);
    if let Some(title) = title {
        draft.title = title.to_string();
    }
    apply_fields(&mut draft, fields)?;
    if draft == TaskDraft::from_task(&current) {
        tracing::debug!(id, "no field changed, skipping update");
        return output(&current, flags.format);
    }

    let task = ctx.store.update(id, &draft).await?;
    output(&task, flags.format)
}

pub async fn delete(id: i64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.store.delete(id).await?;
    output(&TaskDeleteResponse { id, deleted: true }, flags.format)
}

/// Overlay the flags that were given onto `draft`.
fn apply_fields(draft: &mut TaskDraft, fields: &TaskFieldArgs) -> anyhow::Result<()> {
    if let Some(description) = &fields.description {
        draft.description.clone_from(description);
    }
    if let Some(priority) = &fields.priority {
        draft.priority = parse_enum(priority, "priority")?;
    }
    if let Some(deadline) = &fields.deadline {
        draft.deadline = parse_deadline(deadline)?;
    }
    if let Some(category) = &fields.category {
        draft.category = category.trim().to_string();
    }
    if let Some(recurrence) = &fields.recurrence {
        draft.recurrence = parse_enum(recurrence, "recurrence")?;
    }
    Ok(())
}
