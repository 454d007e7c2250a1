use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct TaskReorderResponse {
    pending_order: Vec<i64>,
    saved: bool,
}

/// Reorder pending tasks. The new order is applied to the loaded collection
/// first; a failed save is reported but the local order is not undone.
pub async fn run(ids: &[i64], ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.store.fetch().await?;
    let saved = ctx.store.update_order(ids).await;

    let pending_order = ctx
        .store
        .tasks()
        .iter()
        .filter(|task| task.is_pending())
        .map(|task| task.id)
        .collect();

    if let Err(error) = saved {
        output(&TaskReorderResponse { pending_order, saved: false }, flags.format)?;
        return Err(error.into());
    }
    output(&TaskReorderResponse { pending_order, saved: true }, flags.format)
}
