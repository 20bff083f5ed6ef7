//! Notification sink for session completions.
//!
//! The sink is an injected capability so the state machine stays testable
//! without real audio or desktop-notification APIs. `notify` is infallible
//! by signature: implementations swallow their own failures and must never
//! panic into the tick path.

use serde::{Deserialize, Serialize};

use super::engine::Mode;

/// What the host should tell the user about a finished session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionNotice {
    pub mode: Mode,
    pub next_mode: Mode,
    pub title: String,
    pub body: String,
}

impl CompletionNotice {
    /// Build the notice for a completed `mode`.
    pub fn for_completion(mode: Mode, next_mode: Mode) -> Self {
        let (title, body) = match mode {
            Mode::Work => ("Work session over", "Time for a break"),
            Mode::Break => ("Break over", "Ready for the next work session"),
            Mode::LongBreak => ("Long break over", "Ready for a fresh cycle"),
        };
        Self {
            mode,
            next_mode,
            title: title.to_string(),
            body: body.to_string(),
        }
    }
}

/// Fire-and-forget completion sink.
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: &CompletionNotice);
}

/// Sink that drops every notice. Default for tests and `--silent` runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _notice: &CompletionNotice) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notices_carry_mode_specific_copy() {
        let work = CompletionNotice::for_completion(Mode::Work, Mode::Break);
        let brk = CompletionNotice::for_completion(Mode::Break, Mode::Work);
        assert_ne!(work.title, brk.title);
        assert_eq!(work.next_mode, Mode::Break);
    }
}
