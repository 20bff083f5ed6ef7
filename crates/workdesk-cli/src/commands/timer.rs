//! Pomodoro timer commands.
//!
//! `timer run` hosts the session for the lifetime of the process: it drives
//! the engine from a cancellable one-second ticker, notifies on completions,
//! and issues the explicit restart between sessions until the target number
//! of work sessions is done. Ctrl-C cancels the ticker and exits cleanly.

use clap::Subcommand;

use workdesk_core::timer::{preview_cycle, Mode, SessionTimer, Ticker};
use workdesk_core::{CompletionNotice, Config, Event, Notifier, NullNotifier};

use super::print_json;
use crate::notifier::DesktopNotifier;

#[derive(Subcommand)]
pub enum TimerAction {
    /// Run the timer in the foreground
    Run {
        /// Work duration in minutes (overrides config)
        #[arg(long)]
        work: Option<u32>,
        /// Short break duration in minutes (overrides config)
        #[arg(long)]
        short_break: Option<u32>,
        /// Long break duration in minutes (overrides config)
        #[arg(long)]
        long_break: Option<u32>,
        /// Work sessions between long breaks (overrides config)
        #[arg(long)]
        interval: Option<u32>,
        /// Work sessions to complete before exiting
        #[arg(long, default_value = "1")]
        sessions: u64,
        /// Suppress the bell and desktop notification
        #[arg(long)]
        silent: bool,
    },
    /// Print the mode sequence the cycle policy produces
    Preview {
        /// Number of session completions to preview
        #[arg(long, default_value = "8")]
        sessions: usize,
    },
    /// Print a fresh session snapshot under the current configuration
    Status,
}

pub fn run(action: TimerAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();

    match action {
        TimerAction::Run {
            work,
            short_break,
            long_break,
            interval,
            sessions,
            silent,
        } => {
            let mut timer_config = config.timer;
            if let Some(minutes) = work {
                timer_config.work_minutes = minutes;
            }
            if let Some(minutes) = short_break {
                timer_config.break_minutes = minutes;
            }
            if let Some(minutes) = long_break {
                timer_config.long_break_minutes = minutes;
            }
            if let Some(count) = interval {
                timer_config.long_break_interval = count;
            }

            let notifier: Box<dyn Notifier> = if silent || !config.notifications.enabled {
                Box::new(NullNotifier)
            } else {
                Box::new(DesktopNotifier::new(config.notifications.sound))
            };

            // The engine clamps the overrides on entry.
            let timer = SessionTimer::new(timer_config);
            super::block_on(run_loop(timer, notifier, sessions))?
        }
        TimerAction::Preview { sessions } => {
            let modes = preview_cycle(&config.timer, sessions);
            print_json(&modes)
        }
        TimerAction::Status => print_json(&SessionTimer::new(config.timer).snapshot()),
    }
}

async fn run_loop(
    mut timer: SessionTimer,
    notifier: Box<dyn Notifier>,
    target: u64,
) -> Result<(), Box<dyn std::error::Error>> {
    let (mut ticker, handle) = Ticker::second();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            handle.cancel();
        }
    });

    if let Some(event) = timer.start() {
        print_json(&event)?;
    }

    let mut completed = 0u64;
    while completed < target {
        if !ticker.tick().await {
            // Cancelled: park the session and report where it stopped.
            timer.pause();
            print_json(&timer.snapshot())?;
            return Ok(());
        }
        let Some(event) = timer.tick() else {
            continue;
        };
        print_json(&event)?;
        if let Event::SessionCompleted {
            mode, next_mode, ..
        } = event
        {
            notifier.notify(&CompletionNotice::for_completion(mode, next_mode));
            if mode == Mode::Work {
                completed += 1;
            }
            if completed < target {
                // The process is the user's agent here: issue the explicit
                // restart the engine requires after every completion.
                if let Some(started) = timer.start() {
                    print_json(&started)?;
                }
            }
        }
    }

    print_json(&timer.snapshot())?;
    print_json(&timer.log().stats())?;
    Ok(())
}
