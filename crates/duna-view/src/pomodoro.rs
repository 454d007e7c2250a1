//! Pomodoro countdown state.
//!
//! The timer holds no clock of its own: the driver calls [`PomodoroTimer::tick`]
//! with the time elapsed since the previous tick.
//!
//! ```text
//! Focus ──finished──▶ Break ──finished──▶ Focus ...
//! ```
//!
//! A finished phase stops the timer; `start` runs the next one.

use std::fmt;
use std::time::Duration;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Focus,
    Break,
}

impl Phase {
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Focus => Self::Break,
            Self::Break => Self::Focus,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Focus => "focus",
            Self::Break => "break",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// `phase` ran to zero. `minutes` is the phase's configured length.
    PhaseFinished { phase: Phase, minutes: u32 },
}

#[derive(Debug, Clone)]
pub struct PomodoroTimer {
    focus_minutes: u32,
    break_minutes: u32,
    phase: Phase,
    remaining: Duration,
    running: bool,
    completed_focus: u32,
}

impl Default for PomodoroTimer {
    fn default() -> Self {
        Self::new(25, 5)
    }
}

impl PomodoroTimer {
    /// A stopped timer at the start of a focus phase.
    #[must_use]
    pub fn new(focus_minutes: u32, break_minutes: u32) -> Self {
        Self {
            focus_minutes,
            break_minutes,
            phase: Phase::Focus,
            remaining: minutes(focus_minutes),
            running: false,
            completed_focus: 0,
        }
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub const fn remaining(&self) -> Duration {
        self.remaining
    }

    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Focus phases run to completion since construction.
    #[must_use]
    pub const fn completed_focus(&self) -> u32 {
        self.completed_focus
    }

    #[must_use]
    pub const fn phase_minutes(&self, phase: Phase) -> u32 {
        match phase {
            Phase::Focus => self.focus_minutes,
            Phase::Break => self.break_minutes,
        }
    }

    /// Total length of the current phase.
    #[must_use]
    pub fn phase_length(&self) -> Duration {
        minutes(self.phase_minutes(self.phase))
    }

    /// Start or resume. A zero-length phase finishes on the next tick.
    pub const fn start(&mut self) {
        self.running = true;
    }

    pub const fn pause(&mut self) {
        self.running = false;
    }

    pub const fn toggle(&mut self) {
        self.running = !self.running;
    }

    /// Stop and rewind to a full focus phase.
    pub fn reset(&mut self) {
        self.phase = Phase::Focus;
        self.remaining = minutes(self.focus_minutes);
        self.running = false;
    }

    /// Advance by `elapsed`. Returns the finish event exactly once per phase;
    /// the timer then stops at the start of the next phase.
    pub fn tick(&mut self, elapsed: Duration) -> Option<TimerEvent> {
        if !self.running {
            return None;
        }
        self.remaining = self.remaining.saturating_sub(elapsed);
        if !self.remaining.is_zero() {
            return None;
        }

        let finished = self.phase;
        if finished == Phase::Focus {
            self.completed_focus += 1;
        }
        self.running = false;
        self.phase = finished.next();
        self.remaining = self.phase_length();
        Some(TimerEvent::PhaseFinished {
            phase: finished,
            minutes: self.phase_minutes(finished),
        })
    }

    /// `MM:SS` of the time remaining.
    #[must_use]
    pub fn display(&self) -> String {
        let secs = self.remaining.as_secs();
        format!("{:02}:{:02}", secs / 60, secs % 60)
    }
}

fn minutes(count: u32) -> Duration {
    Duration::from_secs(u64::from(count) * 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECOND: Duration = Duration::from_secs(1);

    #[test]
    fn new_timer_is_stopped_at_full_focus() {
        let timer = PomodoroTimer::new(25, 5);
        assert_eq!(timer.phase(), Phase::Focus);
        assert!(!timer.is_running());
        assert_eq!(timer.display(), "25:00");
    }

    #[test]
    fn ticks_are_ignored_while_paused() {
        let mut timer = PomodoroTimer::new(1, 1);
        assert_eq!(timer.tick(SECOND * 30), None);
        assert_eq!(timer.remaining(), Duration::from_secs(60));
    }

    #[test]
    fn focus_finishes_exactly_once_then_moves_to_break() {
        let mut timer = PomodoroTimer::new(1, 2);
        timer.start();
        let mut events = Vec::new();
        for _ in 0..90 {
            if let Some(event) = timer.tick(SECOND) {
                events.push(event);
            }
        }
        assert_eq!(
            events,
            vec![TimerEvent::PhaseFinished {
                phase: Phase::Focus,
                minutes: 1
            }]
        );
        assert_eq!(timer.phase(), Phase::Break);
        assert!(!timer.is_running());
        assert_eq!(timer.display(), "02:00");
        assert_eq!(timer.completed_focus(), 1);
    }

    #[test]
    fn overshooting_tick_still_finishes_once() {
        let mut timer = PomodoroTimer::new(1, 1);
        timer.start();
        assert!(timer.tick(Duration::from_secs(600)).is_some());
        assert!(timer.tick(Duration::from_secs(600)).is_none());
    }

    #[test]
    fn pause_and_resume_keep_remaining_time() {
        let mut timer = PomodoroTimer::new(1, 1);
        timer.start();
        timer.tick(SECOND * 10);
        timer.pause();
        timer.tick(SECOND * 10);
        assert_eq!(timer.display(), "00:50");
        timer.toggle();
        timer.tick(SECOND * 10);
        assert_eq!(timer.display(), "00:40");
    }

    #[test]
    fn reset_returns_to_full_focus() {
        let mut timer = PomodoroTimer::new(25, 5);
        timer.start();
        timer.tick(Duration::from_secs(25 * 60));
        assert_eq!(timer.phase(), Phase::Break);
        timer.reset();
        assert_eq!(timer.phase(), Phase::Focus);
        assert_eq!(timer.display(), "25:00");
        assert!(!timer.is_running());
    }
}
