use duna_core::requests::NewGoal;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::GoalCommands;
use crate::commands::shared::rows::GoalRow;
use crate::context::AppContext;
use crate::output::output_rows;

/// Handle `duna goal`.
pub async fn handle(action: &GoalCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        GoalCommands::List => {
            let rows = ctx.store.goals().await?.into_iter().map(GoalRow::from).collect::<Vec<_>>();
            output_rows(&rows, flags.format)
        }
        GoalCommands::Create {
            title,
            target,
            current,
            unit,
        } => {
            let goal = NewGoal {
                target_value: *target,
                current_value: *current,
                unit: unit.clone(),
                ..NewGoal::new(title.as_str())
            };
            let created = ctx.store.create_goal(&goal).await?;
            output_rows(&[GoalRow::from(created)], flags.format)
        }
    }
}
