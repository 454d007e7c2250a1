use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{CommentCommands, NoteCommands};
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct DeletedResponse {
    task: i64,
    id: i64,
    deleted: bool,
}

/// Handle `duna note`.
pub async fn handle_notes(action: &NoteCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        NoteCommands::List { task } => output(&ctx.store.notes(*task).await?, flags.format),
        NoteCommands::Add { task, content } => {
            output(&ctx.store.add_note(*task, content).await?, flags.format)
        }
        NoteCommands::Delete { task, note } => {
            ctx.store.delete_note(*task, *note).await?;
            output(
                &DeletedResponse {
                    task: *task,
                    id: *note,
                    deleted: true,
                },
                flags.format,
            )
        }
    }
}

/// Handle `duna comment`.
pub async fn handle_comments(
    action: &CommentCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        CommentCommands::List { task } => output(&ctx.store.comments(*task).await?, flags.format),
        CommentCommands::Add { task, content } => {
            output(&ctx.store.add_comment(*task, content).await?, flags.format)
        }
        CommentCommands::Delete { task, comment } => {
            ctx.store.delete_comment(*task, *comment).await?;
            output(
                &DeletedResponse {
                    task: *task,
                    id: *comment,
                    deleted: true,
                },
                flags.format,
            )
        }
    }
}
