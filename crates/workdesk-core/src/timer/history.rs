//! In-memory log of completed sessions and the statistics derived from it.
//!
//! The log lives and dies with the hosting session — nothing here touches
//! disk. Entries are kept most-recent-first and the log is unbounded.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::engine::Mode;

/// One finished work/break/longBreak cycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletedSession {
    pub id: Uuid,
    pub mode: Mode,
    pub duration_secs: u64,
    pub completed_at: DateTime<Utc>,
}

/// Ordered log of completed sessions, most recent first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionLog {
    entries: Vec<CompletedSession>,
}

/// Display statistics derived from the log.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerStats {
    pub total_sessions: u64,
    pub work_sessions: u64,
    pub total_work_secs: u64,
    pub total_break_secs: u64,
    pub today_sessions: u64,
}

impl SessionLog {
    /// Prepend a completed session.
    pub fn record(&mut self, mode: Mode, duration_secs: u64) -> &CompletedSession {
        self.entries.insert(
            0,
            CompletedSession {
                id: Uuid::new_v4(),
                mode,
                duration_secs,
                completed_at: Utc::now(),
            },
        );
        &self.entries[0]
    }

    /// All entries, most recent first.
    pub fn entries(&self) -> &[CompletedSession] {
        &self.entries
    }

    /// The `n` most recent entries.
    pub fn recent(&self, n: usize) -> &[CompletedSession] {
        &self.entries[..n.min(self.entries.len())]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> TimerStats {
        let today = Utc::now().date_naive();
        let mut stats = TimerStats::default();
        for entry in &self.entries {
            stats.total_sessions += 1;
            if entry.mode.is_work() {
                stats.work_sessions += 1;
                stats.total_work_secs += entry.duration_secs;
            } else {
                stats.total_break_secs += entry.duration_secs;
            }
            if entry.completed_at.date_naive() == today {
                stats.today_sessions += 1;
            }
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_prepends() {
        let mut log = SessionLog::default();
        log.record(Mode::Work, 1500);
        log.record(Mode::Break, 300);
        assert_eq!(log.len(), 2);
        assert_eq!(log.entries()[0].mode, Mode::Break);
        assert_eq!(log.entries()[1].mode, Mode::Work);
    }

    #[test]
    fn recent_caps_at_len() {
        let mut log = SessionLog::default();
        log.record(Mode::Work, 1500);
        assert_eq!(log.recent(10).len(), 1);
        assert_eq!(log.recent(0).len(), 0);
    }

    #[test]
    fn stats_split_work_and_break_time() {
        let mut log = SessionLog::default();
        log.record(Mode::Work, 1500);
        log.record(Mode::Break, 300);
        log.record(Mode::Work, 1500);
        log.record(Mode::LongBreak, 900);

        let stats = log.stats();
        assert_eq!(stats.total_sessions, 4);
        assert_eq!(stats.work_sessions, 2);
        assert_eq!(stats.total_work_secs, 3000);
        assert_eq!(stats.total_break_secs, 1200);
        // Everything recorded just now counts as today.
        assert_eq!(stats.today_sessions, 4);
    }

    #[test]
    fn empty_log_has_zero_stats() {
        assert_eq!(SessionLog::default().stats(), TimerStats::default());
    }
}
