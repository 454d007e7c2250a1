use duna_view::{CategoryFilter, ListQuery, ListViewModel, PriorityFilter, SortKey, TaskCounts};
use serde::Serialize;

use crate::cli::subcommands::TaskListArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::rows::TaskRow;
use crate::context::AppContext;
use crate::output::{output, output_rows};
use crate::progress::Spinner;

#[derive(Debug, Serialize)]
struct TaskListResponse {
    counts: TaskCounts,
    pending: Vec<TaskRow>,
    completed: Vec<TaskRow>,
}

pub async fn run(args: &TaskListArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let query = build_query(args, &ctx.config.general.default_sort)?;
    show_list(&query, ctx, flags).await
}

/// Load the collection and print the derived list for `query`.
pub async fn show_list(query: &ListQuery, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let spinner = Spinner::new("Loading tasks");
    let fetched = ctx.store.fetch().await;
    spinner.finish();
    fetched?;

    let now = AppContext::now();
    let mut model = ListViewModel::new();
    let view = ctx.store.view(&mut model, query, now);
    tracing::debug!(
        search = %query.search,
        sort = %query.sort,
        shown = view.pending.len() + view.completed.len(),
        total = view.counts.total,
        "derived task list"
    );

    if flags.format == OutputFormat::Table {
        let rows = TaskRow::all(view.pending.into_iter().chain(view.completed), now);
        output_rows(&rows, flags.format)?;
        if !flags.quiet {
            let counts = view.counts;
            println!(
                "\n{} total, {} pending, {} completed, {} overdue",
                counts.total, counts.pending, counts.completed, counts.overdue
            );
        }
        return Ok(());
    }

    output(
        &TaskListResponse {
            counts: view.counts,
            pending: TaskRow::all(view.pending, now),
            completed: TaskRow::all(view.completed, now),
        },
        flags.format,
    )
}

/// Turn the list flags into a query. `default_sort` applies when `--sort` is absent.
pub fn build_query(args: &TaskListArgs, default_sort: &str) -> anyhow::Result<ListQuery> {
    let priority = match &args.priority {
        Some(raw) => raw.parse::<PriorityFilter>()?,
        None => PriorityFilter::All,
    };
    let category = match &args.category {
        Some(raw) => raw.parse::<CategoryFilter>()?,
        None => CategoryFilter::All,
    };
    let sort = args
        .sort
        .as_deref()
        .unwrap_or(default_sort)
        .parse::<SortKey>()?;

    Ok(ListQuery {
        search: args.search.clone().unwrap_or_default(),
        priority,
        category,
        sort,
    })
}
