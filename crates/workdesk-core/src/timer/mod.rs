mod engine;
mod history;
mod notify;
mod ticker;

pub use engine::{preview_cycle, Mode, SessionTimer, TimerConfig};
pub use history::{CompletedSession, SessionLog, TimerStats};
pub use notify::{CompletionNotice, Notifier, NullNotifier};
pub use ticker::{Ticker, TickerHandle};
