mod edit;
pub(crate) mod list;
mod reorder;
mod show;
mod status;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::TaskCommands;
use crate::context::AppContext;

/// Handle `duna task`.
pub async fn handle(action: &TaskCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        TaskCommands::List(args) => list::run(args, ctx, flags).await,
        TaskCommands::Show { id } => show::run(*id, ctx, flags).await,
        TaskCommands::Create { title, fields } => edit::create(title, fields, ctx, flags).await,
        TaskCommands::Update { id, title, fields } => {
            edit::update(*id, title.as_deref(), fields, ctx, flags).await
        }
        TaskCommands::Delete { id } => edit::delete(*id, ctx, flags).await,
        TaskCommands::Complete { id } => status::complete(*id, ctx, flags).await,
        TaskCommands::Reopen { id } => status::reopen(*id, ctx, flags).await,
        TaskCommands::Toggle { id } => status::toggle(*id, ctx, flags).await,
        TaskCommands::Recur { id } => status::recur(*id, ctx, flags).await,
        TaskCommands::Reorder { ids } => reorder::run(ids, ctx, flags).await,
    }
}
