//! Fall scheduler - decides when the moving piece is nudged down one row
//!
//! Time is measured as a [`Duration`] since an arbitrary clock origin (see
//! [`crate::ports::Clock`]). The interval only changes on level-up.

use std::time::Duration;

use crate::types::LEVEL_SPEEDUP;

/// Shortest interval the scheduler will ever use
const MIN_INTERVAL: Duration = Duration::from_nanos(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallScheduler {
    interval: Duration,
    last_fall: Duration,
}

impl FallScheduler {
    pub fn new(interval: Duration, now: Duration) -> Self {
        Self {
            interval: interval.max(MIN_INTERVAL),
            last_fall: now,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn last_fall(&self) -> Duration {
        self.last_fall
    }

    /// Whether a full interval has elapsed since the last fall
    pub fn is_due(&self, now: Duration) -> bool {
        now.saturating_sub(self.last_fall) >= self.interval
    }

    /// Record a fall attempt at `now`
    pub fn mark(&mut self, now: Duration) {
        self.last_fall = now;
    }

    /// Restart the interval from `now` (used when resuming from pause)
    pub fn resume(&mut self, now: Duration) {
        self.mark(now);
    }

    /// Apply the per-level speedup `levels` times
    pub fn level_up(&mut self, levels: u32) {
        for _ in 0..levels {
            self.interval = self.interval.mul_f64(LEVEL_SPEEDUP).max(MIN_INTERVAL);
        }
    }
}
