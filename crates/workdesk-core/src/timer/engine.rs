//! Pomodoro session state machine.
//!
//! The engine is tick-driven: it holds no timer of its own and the caller is
//! responsible for delivering one tick per second while the session runs
//! (see [`super::Ticker`]). Countdown progress depends only on delivered
//! ticks, so tests drive the machine without any clock.
//!
//! ## Cycle
//!
//! ```text
//! work -> break -> work -> ... -> work -> longBreak -> work -> ...
//! ```
//!
//! Every `long_break_interval`-th completed work session routes to the long
//! break; every other completion alternates with the short break. Completing
//! a session stops the countdown — the user resumes explicitly.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::history::SessionLog;
use crate::events::Event;

/// Phase of the pomodoro cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Mode {
    Work,
    Break,
    LongBreak,
}

impl Mode {
    pub fn is_work(self) -> bool {
        matches!(self, Mode::Work)
    }

    pub fn label(self) -> &'static str {
        match self {
            Mode::Work => "work",
            Mode::Break => "break",
            Mode::LongBreak => "long break",
        }
    }
}

/// User-editable durations for the cycle.
///
/// Values are clamped into their valid ranges wherever a config enters the
/// engine, so a malformed edit can never produce a zero-length countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerConfig {
    #[serde(default = "default_work_minutes")]
    pub work_minutes: u32,
    #[serde(default = "default_break_minutes")]
    pub break_minutes: u32,
    #[serde(default = "default_long_break_minutes")]
    pub long_break_minutes: u32,
    /// Work sessions between long breaks.
    #[serde(default = "default_long_break_interval")]
    pub long_break_interval: u32,
}

fn default_work_minutes() -> u32 {
    25
}
fn default_break_minutes() -> u32 {
    5
}
fn default_long_break_minutes() -> u32 {
    15
}
fn default_long_break_interval() -> u32 {
    4
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            work_minutes: default_work_minutes(),
            break_minutes: default_break_minutes(),
            long_break_minutes: default_long_break_minutes(),
            long_break_interval: default_long_break_interval(),
        }
    }
}

impl TimerConfig {
    /// Clamp every field into its valid range.
    pub fn clamped(self) -> Self {
        Self {
            work_minutes: self.work_minutes.clamp(1, 60),
            break_minutes: self.break_minutes.clamp(1, 30),
            long_break_minutes: self.long_break_minutes.clamp(1, 60),
            long_break_interval: self.long_break_interval.clamp(2, 10),
        }
    }

    /// Configured duration of `mode`, in seconds.
    pub fn duration_secs(&self, mode: Mode) -> u64 {
        let minutes = match mode {
            Mode::Work => self.work_minutes,
            Mode::Break => self.break_minutes,
            Mode::LongBreak => self.long_break_minutes,
        };
        u64::from(minutes) * 60
    }
}

/// Pomodoro session state machine.
///
/// Owns the current mode, the remaining seconds, the completed-work-session
/// counter, and the in-memory log of completed sessions. All mutation goes
/// through the command methods, each of which returns the [`Event`] it
/// produced (or `None` for a no-op).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionTimer {
    config: TimerConfig,
    mode: Mode,
    remaining_secs: u64,
    running: bool,
    completed_work_sessions: u64,
    #[serde(default)]
    log: SessionLog,
}

impl SessionTimer {
    /// Create a session in `work` mode with the full work duration ahead.
    pub fn new(config: TimerConfig) -> Self {
        let config = config.clamped();
        Self {
            config,
            mode: Mode::Work,
            remaining_secs: config.duration_secs(Mode::Work),
            running: false,
            completed_work_sessions: 0,
            log: SessionLog::default(),
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn remaining_secs(&self) -> u64 {
        self.remaining_secs
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn completed_work_sessions(&self) -> u64 {
        self.completed_work_sessions
    }

    pub fn config(&self) -> &TimerConfig {
        &self.config
    }

    pub fn log(&self) -> &SessionLog {
        &self.log
    }

    /// Configured duration of the current mode, in seconds.
    pub fn total_secs(&self) -> u64 {
        self.config.duration_secs(self.mode)
    }

    /// 0.0 .. 100.0 progress within the current session.
    pub fn progress_pct(&self) -> f64 {
        let total = self.total_secs();
        if total == 0 {
            return 0.0;
        }
        (total - self.remaining_secs) as f64 / total as f64 * 100.0
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        Event::StateSnapshot {
            mode: self.mode,
            remaining_secs: self.remaining_secs,
            total_secs: self.total_secs(),
            running: self.running,
            completed_work_sessions: self.completed_work_sessions,
            progress_pct: self.progress_pct(),
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    pub fn start(&mut self) -> Option<Event> {
        if self.running {
            return None;
        }
        self.running = true;
        Some(Event::TimerStarted {
            mode: self.mode,
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        })
    }

    pub fn pause(&mut self) -> Option<Event> {
        if !self.running {
            return None;
        }
        self.running = false;
        Some(Event::TimerPaused {
            mode: self.mode,
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        })
    }

    /// Deliver one second of countdown.
    ///
    /// While paused this is a strict no-op. While running it decrements the
    /// remaining time by exactly one second; the tick that exhausts the
    /// countdown completes the session instead, returning
    /// [`Event::SessionCompleted`]. Completion records the session, advances
    /// the mode per the cycle policy, and stops the countdown — the caller
    /// is expected to notify and to resume explicitly.
    pub fn tick(&mut self) -> Option<Event> {
        if !self.running {
            return None;
        }
        if self.remaining_secs > 1 {
            self.remaining_secs -= 1;
            return None;
        }
        self.remaining_secs = 0;
        Some(self.complete())
    }

    /// Abandon the countdown and advance to the next mode immediately.
    ///
    /// Skipping is silent: no session record is appended and the caller
    /// should not notify. Skipping out of `work` still advances the
    /// completed-session counter, since the next-break policy depends on it.
    pub fn skip(&mut self) -> Event {
        let from = self.mode;
        self.advance();
        Event::SessionSkipped {
            from_mode: from,
            to_mode: self.mode,
            at: Utc::now(),
        }
    }

    /// Restore the current mode's full duration and stop the countdown.
    pub fn reset(&mut self) -> Event {
        self.running = false;
        self.remaining_secs = self.config.duration_secs(self.mode);
        Event::TimerReset {
            mode: self.mode,
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        }
    }

    /// Manual override to an arbitrary mode, bypassing the cycle policy.
    ///
    /// The completed-session counter is untouched; switching to the current
    /// mode acts as a reset.
    pub fn switch_mode(&mut self, mode: Mode) -> Event {
        let from = self.mode;
        self.mode = mode;
        self.remaining_secs = self.config.duration_secs(mode);
        self.running = false;
        Event::ModeSwitched {
            from_mode: from,
            to_mode: mode,
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        }
    }

    /// Replace the configuration.
    ///
    /// The running countdown keeps its remaining time; new durations apply
    /// from the next reset, switch, or completion.
    pub fn set_config(&mut self, config: TimerConfig) {
        self.config = config.clamped();
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn complete(&mut self) -> Event {
        let mode = self.mode;
        let duration_secs = self.config.duration_secs(mode);
        self.log.record(mode, duration_secs);
        self.advance();
        Event::SessionCompleted {
            mode,
            next_mode: self.mode,
            duration_secs,
            completed_work_sessions: self.completed_work_sessions,
            at: Utc::now(),
        }
    }

    fn advance(&mut self) {
        let next = self.next_mode();
        if self.mode.is_work() {
            self.completed_work_sessions += 1;
        }
        self.mode = next;
        self.remaining_secs = self.config.duration_secs(next);
        self.running = false;
    }

    fn next_mode(&self) -> Mode {
        match self.mode {
            Mode::Work => {
                let done = self.completed_work_sessions + 1;
                if done % u64::from(self.config.long_break_interval) == 0 {
                    Mode::LongBreak
                } else {
                    Mode::Break
                }
            }
            Mode::Break | Mode::LongBreak => Mode::Work,
        }
    }
}

impl Default for SessionTimer {
    fn default() -> Self {
        Self::new(TimerConfig::default())
    }
}

/// The mode sequence the cycle policy produces for `sessions` consecutive
/// completions, starting from a fresh `work` session.
pub fn preview_cycle(config: &TimerConfig, sessions: usize) -> Vec<Mode> {
    let mut timer = SessionTimer::new(*config);
    let mut modes = vec![timer.mode()];
    for _ in 0..sessions {
        timer.skip();
        modes.push(timer.mode());
    }
    modes
}
