use duna_store::StoreError;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    if command.requires_session() {
        ctx.require_session()?;
    }

    let result = match command {
        Commands::Auth { action } => commands::auth::handle(&action, ctx, flags).await,
        Commands::Task { action } => commands::task::handle(&action, ctx, flags).await,
        Commands::Subtask { action } => commands::subtask::handle(&action, ctx, flags).await,
        Commands::Time { action } => commands::time::handle(&action, ctx, flags).await,
        Commands::Note { action } => commands::note::handle_notes(&action, ctx, flags).await,
        Commands::Comment { action } => commands::note::handle_comments(&action, ctx, flags).await,
        Commands::Goal { action } => commands::goal::handle(&action, ctx, flags).await,
        Commands::Theme { action } => commands::theme::handle(&action, ctx, flags).await,
        Commands::Preset { action } => commands::preset::handle(&action, ctx, flags).await,
        Commands::Prefs { action } => commands::prefs::handle(&action, ctx, flags),
        Commands::Stats { action } => commands::stats::handle(&action, ctx, flags).await,
        Commands::Timer { action } => commands::timer::handle(&action, ctx, flags).await,
    };

    result.map_err(with_login_hint)
}

/// A failed refresh clears the session; say so instead of only echoing the status.
fn with_login_hint(error: anyhow::Error) -> anyhow::Error {
    let expired = error
        .downcast_ref::<StoreError>()
        .is_some_and(StoreError::requires_login);
    if expired {
        error.context("session expired, run `duna auth login` to continue")
    } else {
        error
    }
}
