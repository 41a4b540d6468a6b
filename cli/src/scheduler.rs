use std::time::Duration;

use snake_engine::{Status, log};
use tokio::time::{Instant, Interval, MissedTickBehavior, interval_at};

/// Drives engine ticks at the current speed. At most one interval exists at a
/// time; reconfiguring drops the old one before installing the new one.
#[derive(Default)]
pub struct TickScheduler {
    interval: Option<Interval>,
    period_ms: Option<u32>,
}

impl TickScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.interval.is_some()
    }

    pub fn period_ms(&self) -> Option<u32> {
        self.period_ms
    }

    /// Brings the timer in line with the engine: stopped unless playing,
    /// otherwise firing every `speed_ms`.
    pub fn sync(&mut self, status: Status, speed_ms: u32) {
        if status != Status::Playing {
            if self.interval.take().is_some() {
                log!("Tick timer stopped ({:?})", status);
            }
            self.period_ms = None;
            return;
        }

        if self.interval.is_some() && self.period_ms == Some(speed_ms) {
            return;
        }

        self.interval = None;
        let period = Duration::from_millis(speed_ms as u64);
        // interval() would fire immediately; the first tick is a full period away.
        let mut timer = interval_at(Instant::now() + period, period);
        timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
        self.interval = Some(timer);
        self.period_ms = Some(speed_ms);
        log!("Tick timer set to {}ms", speed_ms);
    }

    /// Resolves on the next tick, or never while stopped.
    pub async fn tick(&mut self) {
        match self.interval.as_mut() {
            Some(timer) => {
                timer.tick().await;
            }
            None => std::future::pending::<()>().await,
        }
    }
}
