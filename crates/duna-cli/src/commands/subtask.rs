use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::SubtaskCommands;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct SubtaskDeleteResponse {
    task: i64,
    subtask: i64,
    deleted: bool,
}

/// Handle `duna subtask`.
pub async fn handle(action: &SubtaskCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        SubtaskCommands::Add { task, title } => {
            let subtask = ctx.store.add_subtask(*task, title).await?;
            output(&subtask, flags.format)
        }
        SubtaskCommands::Toggle { task, subtask } => {
            // Toggling reads the current status from the loaded collection.
            ctx.store.fetch().await?;
            let updated = ctx.store.toggle_subtask(*task, *subtask).await?;
            output(&updated, flags.format)
        }
        SubtaskCommands::Delete { task, subtask } => {
            ctx.store.delete_subtask(*task, *subtask).await?;
            output(
                &SubtaskDeleteResponse {
                    task: *task,
                    subtask: *subtask,
                    deleted: true,
                },
                flags.format,
            )
        }
    }
}
