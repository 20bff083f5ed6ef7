//! Property tests for the pomodoro cycle.

use proptest::prelude::*;

use workdesk_core::timer::{Mode, SessionTimer, TimerConfig};

fn valid_config() -> impl Strategy<Value = TimerConfig> {
    (1u32..=60, 1u32..=30, 1u32..=60, 2u32..=10).prop_map(
        |(work_minutes, break_minutes, long_break_minutes, long_break_interval)| TimerConfig {
            work_minutes,
            break_minutes,
            long_break_minutes,
            long_break_interval,
        },
    )
}

/// Tick a running session all the way to its completion event.
fn complete_session(timer: &mut SessionTimer) {
    timer.start();
    loop {
        if timer.tick().is_some() {
            return;
        }
    }
}

proptest! {
    /// Completing `interval` consecutive work sessions routes exactly one
    /// of them to the long break and the rest to the short break.
    #[test]
    fn one_long_break_per_interval(config in valid_config()) {
        let interval = config.long_break_interval as usize;
        let mut timer = SessionTimer::new(config);
        let mut breaks = Vec::new();

        for _ in 0..interval {
            prop_assert_eq!(timer.mode(), Mode::Work);
            complete_session(&mut timer);
            breaks.push(timer.mode());
            // Step over the break without completing it.
            timer.skip();
        }

        let long = breaks.iter().filter(|m| **m == Mode::LongBreak).count();
        prop_assert_eq!(long, 1);
        prop_assert_eq!(breaks.last(), Some(&Mode::LongBreak));
        prop_assert_eq!(timer.completed_work_sessions(), interval as u64);
    }

    /// Each delivered tick removes exactly one second while running, and the
    /// remaining time never exceeds the configured total or underflows.
    #[test]
    fn ticks_decrement_by_one(config in valid_config(), ticks in 1usize..400) {
        let mut timer = SessionTimer::new(config);
        timer.start();
        let total = timer.total_secs();
        let mut expected = total;
        for _ in 0..ticks {
            let completed = timer.tick().is_some();
            if completed {
                // Completion swaps modes and parks the timer.
                prop_assert!(!timer.is_running());
                break;
            }
            expected -= 1;
            prop_assert_eq!(timer.remaining_secs(), expected);
        }
        prop_assert!(timer.remaining_secs() <= timer.total_secs());
    }

    /// A paused session ignores ticks entirely.
    #[test]
    fn paused_sessions_ignore_ticks(config in valid_config(), ticks in 1usize..100) {
        let mut timer = SessionTimer::new(config);
        timer.start();
        timer.tick();
        timer.pause();

        let before = (
            timer.mode(),
            timer.remaining_secs(),
            timer.completed_work_sessions(),
        );
        for _ in 0..ticks {
            prop_assert!(timer.tick().is_none());
        }
        let after = (
            timer.mode(),
            timer.remaining_secs(),
            timer.completed_work_sessions(),
        );
        prop_assert_eq!(before, after);
    }

    /// Reset twice is the same as reset once.
    #[test]
    fn reset_is_idempotent(config in valid_config(), ticks in 0usize..120) {
        let mut timer = SessionTimer::new(config);
        timer.start();
        for _ in 0..ticks {
            timer.tick();
        }
        timer.reset();
        let once = (timer.mode(), timer.remaining_secs(), timer.is_running());
        timer.reset();
        let twice = (timer.mode(), timer.remaining_secs(), timer.is_running());
        prop_assert_eq!(once, twice);
    }

    /// Out-of-range configurations are clamped into the valid ranges before
    /// they can reach the countdown.
    #[test]
    fn arbitrary_configs_are_clamped(
        work in any::<u32>(),
        brk in any::<u32>(),
        long in any::<u32>(),
        interval in any::<u32>(),
    ) {
        let timer = SessionTimer::new(TimerConfig {
            work_minutes: work,
            break_minutes: brk,
            long_break_minutes: long,
            long_break_interval: interval,
        });
        let c = *timer.config();
        prop_assert!((1..=60).contains(&c.work_minutes));
        prop_assert!((1..=30).contains(&c.break_minutes));
        prop_assert!((1..=60).contains(&c.long_break_minutes));
        prop_assert!((2..=10).contains(&c.long_break_interval));
        prop_assert!(timer.remaining_secs() >= 60);
    }
}

/// The documented 25/5/15/interval-4 walkthrough, completion by completion.
#[test]
fn default_cycle_walkthrough() {
    let mut timer = SessionTimer::new(TimerConfig::default());
    let mut transitions = Vec::new();

    for _ in 0..8 {
        complete_session(&mut timer);
        transitions.push(timer.mode());
    }

    assert_eq!(
        transitions,
        vec![
            Mode::Break,
            Mode::Work,
            Mode::Break,
            Mode::Work,
            Mode::Break,
            Mode::Work,
            Mode::LongBreak,
            Mode::Work,
        ]
    );
    assert_eq!(timer.completed_work_sessions(), 4);
    // Only completions land in the log.
    assert_eq!(timer.log().len(), 8);
}
