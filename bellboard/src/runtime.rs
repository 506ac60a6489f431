//! Clock abstraction and the periodic tick loop.
//!
//! One tick: read the clock, resolve the day, render, push to the sink.
//! Ticks are independent; each recomputes from the live clock, so a delayed
//! or missed tick self-corrects on the next firing.

use std::time::Duration;

use chrono::{DateTime, Local};
use tokio::time::MissedTickBehavior;
use tracing::warn;

use crate::config::SchoolConfig;
use crate::display::DisplaySink;
use crate::presenter;
use crate::services::{day_state, letter_cycle};

/// Tick cadence in milliseconds.
pub const TICK_INTERVAL_MS: u64 = 1_000;

/// Wall-clock source, injected so tests can supply arbitrary timestamps.
pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

/// The system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Compute and push one display update.
///
/// A letter-cycle configuration fault degrades the date label to "Error" and
/// is logged; it never stops the loop. Everything else in the tick is pure
/// computation over validated tables.
pub fn tick(config: &SchoolConfig, clock: &impl Clock, sink: &mut impl DisplaySink) {
    let now = clock.now();

    let letter_label = match letter_cycle::letter_for(&config.cycle, &config.terms, now.date_naive())
    {
        Ok(day) => day.to_string(),
        Err(err) => {
            warn!(%err, "letter cycle unavailable");
            "Error".to_string()
        }
    };

    let state = day_state::classify(config, now);
    let frame = presenter::render(&now, &letter_label, &state);
    sink.apply(&frame);
}

/// Run the display loop: one immediate tick, then one per second, forever.
pub async fn run(config: &SchoolConfig, clock: &impl Clock, sink: &mut impl DisplaySink) {
    let mut ticker = tokio::time::interval(Duration::from_millis(TICK_INTERVAL_MS));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    loop {
        ticker.tick().await;
        tick(config, clock, sink);
    }
}
