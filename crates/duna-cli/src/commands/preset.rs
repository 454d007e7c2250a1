use duna_core::entities::FilterPreset;
use duna_core::requests::NewFilterPreset;
use duna_view::{CategoryFilter, PriorityFilter};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{PresetCommands, TaskListArgs};
use crate::commands::task::list::{build_query, show_list};
use crate::context::AppContext;
use crate::output::output;

/// Handle `duna preset`.
pub async fn handle(action: &PresetCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        PresetCommands::List => output(&ctx.store.filter_presets().await?, flags.format),
        PresetCommands::Save {
            name,
            priority,
            category,
            status,
        } => {
            // Reject filters the list view could not apply later.
            priority.parse::<PriorityFilter>()?;
            category.parse::<CategoryFilter>()?;
            let preset = NewFilterPreset {
                name: name.clone(),
                priority_filter: priority.trim().to_ascii_lowercase(),
                category_filter: category.clone(),
                status_filter: status.trim().to_ascii_lowercase(),
            };
            output(&ctx.store.save_filter_preset(&preset).await?, flags.format)
        }
        PresetCommands::Apply { name, sort } => {
            let presets = ctx.store.filter_presets().await?;
            let Some(preset) = presets.into_iter().find(|preset| preset.name == *name) else {
                anyhow::bail!("no filter preset named '{name}'");
            };
            let args = preset_args(&preset, sort.clone());
            let query = build_query(&args, &ctx.config.general.default_sort)?;
            show_list(&query, ctx, flags).await
        }
    }
}

/// Presets carry a status filter too, but the list always shows both
/// partitions, so only priority and category narrow it.
fn preset_args(preset: &FilterPreset, sort: Option<String>) -> TaskListArgs {
    TaskListArgs {
        search: None,
        priority: Some(preset.priority_filter.clone()),
        category: Some(preset.category_filter.clone()),
        sort,
    }
}

#[cfg(test)]
mod tests {
    use duna_core::entities::FilterPreset;
    use pretty_assertions::assert_eq;

    use super::preset_args;

    #[test]
    fn preset_maps_onto_list_flags() {
        let preset = FilterPreset {
            id: 3,
            name: String::from("urgent history"),
            priority_filter: String::from("high"),
            category_filter: String::from("History"),
            status_filter: String::from("pending"),
            created_at: None,
        };
        let args = preset_args(&preset, Some(String::from("deadline")));
        assert_eq!(args.priority.as_deref(), Some("high"));
        assert_eq!(args.category.as_deref(), Some("History"));
        assert_eq!(args.sort.as_deref(), Some("deadline"));
        assert_eq!(args.search, None);
    }
}
