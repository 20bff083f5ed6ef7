use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timer::Mode;

/// Every timer state change produces an Event.
/// Hosts (CLI, GUI) print or poll these; the notifier consumes completions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    TimerStarted {
        mode: Mode,
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    TimerPaused {
        mode: Mode,
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    /// A session counted down to zero. The host decides whether to notify.
    SessionCompleted {
        mode: Mode,
        next_mode: Mode,
        duration_secs: u64,
        completed_work_sessions: u64,
        at: DateTime<Utc>,
    },
    /// The user skipped ahead without finishing the countdown.
    SessionSkipped {
        from_mode: Mode,
        to_mode: Mode,
        at: DateTime<Utc>,
    },
    TimerReset {
        mode: Mode,
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    /// Manual override to an arbitrary mode, bypassing the cycle policy.
    ModeSwitched {
        from_mode: Mode,
        to_mode: Mode,
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    StateSnapshot {
        mode: Mode,
        remaining_secs: u64,
        total_secs: u64,
        running: bool,
        completed_work_sessions: u64,
        progress_pct: f64,
        at: DateTime<Utc>,
    },
}
