use duna_auth::Preferences;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::PrefsCommands;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct PrefsResponse {
    dark_mode: bool,
    preferences: Preferences,
}

#[derive(Serialize)]
struct PrefToggleResponse {
    key: String,
    enabled: bool,
}

/// Handle `duna prefs`. Only reads and writes the local state file.
pub fn handle(action: &PrefsCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let prefs = &ctx.preferences;
    match action {
        PrefsCommands::Show => output(
            &PrefsResponse {
                dark_mode: prefs.dark_mode(),
                preferences: prefs.load(),
            },
            flags.format,
        ),
        PrefsCommands::Toggle { key } => {
            let enabled = prefs.toggle_preference(key)?;
            output(
                &PrefToggleResponse {
                    key: key.clone(),
                    enabled,
                },
                flags.format,
            )
        }
        PrefsCommands::DarkMode { state } => {
            prefs.set_dark_mode(state.enabled())?;
            output(
                &PrefsResponse {
                    dark_mode: prefs.dark_mode(),
                    preferences: prefs.load(),
                },
                flags.format,
            )
        }
    }
}
