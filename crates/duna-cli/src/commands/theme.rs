use duna_core::requests::ThemeUpdate;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ThemeCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `duna theme`.
pub async fn handle(action: &ThemeCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        ThemeCommands::Show => output(&ctx.store.theme().await?, flags.format),
        ThemeCommands::Set {
            primary,
            secondary,
            accent,
            font,
            dark_mode,
        } => {
            let update = ThemeUpdate {
                primary_color: primary.clone(),
                secondary_color: secondary.clone(),
                accent_color: accent.clone(),
                font_family: font.clone(),
                dark_mode: dark_mode.map(|state| state.enabled()),
            };
            if update == ThemeUpdate::default() {
                anyhow::bail!("nothing to change, pass at least one of --primary, --secondary, --accent, --font, --dark-mode");
            }
            let theme = ctx.store.update_theme(&update).await?;
            // Keep the local flag in step with the account theme.
            if let Some(enabled) = update.dark_mode {
                ctx.preferences.set_dark_mode(enabled)?;
            }
            output(&theme, flags.format)
        }
    }
}
