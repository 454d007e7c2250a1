use std::time::Duration;

use duna_core::entities::TimeLog;
use duna_core::requests::NewTimeLog;
use duna_view::pomodoro::{Phase, PomodoroTimer, TimerEvent};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{TimerCommands, TimerStartArgs};
use crate::context::AppContext;
use crate::output::output;
use crate::progress::PhaseBar;

const TICK: Duration = Duration::from_secs(1);

#[derive(Debug, Serialize)]
struct TimerSummary {
    focus_minutes: u32,
    break_minutes: u32,
    completed_focus: u32,
    interrupted: bool,
    logged: Vec<TimeLog>,
    warnings: Vec<String>,
}

/// Handle `duna timer`.
pub async fn handle(action: &TimerCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        TimerCommands::Start(args) => start(args, ctx, flags).await,
    }
}

async fn start(args: &TimerStartArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let focus_minutes = args.focus.unwrap_or(ctx.config.general.pomodoro_minutes);
    let break_minutes = args.break_minutes.unwrap_or(ctx.config.general.break_minutes);
    validate_plan(focus_minutes, args.cycles)?;

    let mut timer = PomodoroTimer::new(focus_minutes, break_minutes);
    let mut summary = TimerSummary {
        focus_minutes,
        break_minutes,
        completed_focus: 0,
        interrupted: false,
        logged: Vec::new(),
        warnings: Vec::new(),
    };

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    while summary.completed_focus < args.cycles {
        let phase = timer.phase();
        let length = timer.phase_length();
        let bar = PhaseBar::start(phase.as_str(), length);
        tracing::debug!(%phase, secs = length.as_secs(), "phase started");

        let mut ticker = tokio::time::interval(TICK);
        ticker.tick().await;
        timer.start();

        let event = loop {
            tokio::select! {
                _ = ticker.tick() => {
                    if let Some(event) = timer.tick(TICK) {
                        break Some(event);
                    }
                    bar.update(length.saturating_sub(timer.remaining()), &timer.display());
                }
                _ = &mut ctrl_c => break None,
            }
        };

        let Some(TimerEvent::PhaseFinished { phase, minutes }) = event else {
            bar.abandon(&format!("stopped at {}", timer.display()));
            summary.interrupted = true;
            break;
        };
        bar.finish("done");

        if phase == Phase::Focus {
            summary.completed_focus = timer.completed_focus();
            if args.log
                && let Some(task) = args.task
            {
                // Logging is a side effect of the timer; a failure does not stop it.
                match ctx.store.log_time(task, &focus_entry(minutes)).await {
                    Ok(log) => summary.logged.push(log),
                    Err(error) => {
                        tracing::warn!(task, %error, "could not log focus time");
                        summary.warnings.push(format!("focus time not logged: {error}"));
                    }
                }
            }
        }
    }

    for warning in &summary.warnings {
        if !flags.quiet {
            eprintln!("warning: {warning}");
        }
    }
    output(&summary, flags.format)
}

fn validate_plan(focus_minutes: u32, cycles: u32) -> anyhow::Result<()> {
    if focus_minutes == 0 {
        anyhow::bail!("focus length must be at least one minute");
    }
    if cycles == 0 {
        anyhow::bail!("--cycles must be at least 1");
    }
    Ok(())
}

fn focus_entry(minutes: u32) -> NewTimeLog {
    NewTimeLog {
        duration_minutes: minutes,
        estimated_minutes: Some(minutes),
        notes: String::from("Pomodoro focus session"),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{focus_entry, validate_plan};

    #[test]
    fn zero_focus_or_cycles_is_rejected() {
        assert!(validate_plan(0, 1).is_err());
        assert!(validate_plan(25, 0).is_err());
        assert!(validate_plan(25, 4).is_ok());
    }

    #[test]
    fn focus_entry_logs_the_full_phase() {
        let entry = focus_entry(25);
        assert_eq!(entry.duration_minutes, 25);
        assert_eq!(entry.estimated_minutes, Some(25));
        assert!(entry.validate().is_ok());
    }
}
