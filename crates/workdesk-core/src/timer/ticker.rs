//! Cancellable periodic tick source.
//!
//! The engine assumes nothing about timer APIs — it only needs "one tick per
//! second, cancellable". [`Ticker`] is that primitive for tokio hosts: the
//! consumer awaits [`Ticker::tick`] in a loop, and any holder of the
//! [`TickerHandle`] stops the stream. Once cancelled, no further ticks are
//! delivered; dropping the handle cancels too, so an abandoned ticker cannot
//! leak a recurring callback.

use std::time::Duration;

use tokio::sync::watch;
use tokio::time::{self, Instant, Interval, MissedTickBehavior};

pub struct Ticker {
    interval: Interval,
    cancelled: watch::Receiver<bool>,
}

/// Cancels the paired [`Ticker`].
pub struct TickerHandle {
    cancel: watch::Sender<bool>,
}

impl TickerHandle {
    pub fn cancel(&self) {
        // Receiver side may already be gone; nothing to do then.
        let _ = self.cancel.send(true);
    }
}

impl Ticker {
    /// A ticker that fires once per second, first tick one second from now.
    pub fn second() -> (Self, TickerHandle) {
        Self::with_period(Duration::from_secs(1))
    }

    /// A ticker with an arbitrary period (tests use short ones).
    pub fn with_period(period: Duration) -> (Self, TickerHandle) {
        let mut interval = time::interval_at(Instant::now() + period, period);
        // A stalled consumer should not be repaid with a tick burst.
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let (cancel, cancelled) = watch::channel(false);
        (
            Self {
                interval,
                cancelled,
            },
            TickerHandle { cancel },
        )
    }

    /// Wait for the next tick. Returns `false` once cancelled.
    pub async fn tick(&mut self) -> bool {
        if *self.cancelled.borrow() {
            return false;
        }
        tokio::select! {
            _ = self.interval.tick() => true,
            // Err means the handle was dropped; treat both as cancellation.
            _ = self.cancelled.changed() => false,
        }
    }
}
