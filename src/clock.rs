//! Fixed-rate frame pacing.

use std::time::{Duration, Instant};

/// Limits a loop to a fixed number of ticks per second.
#[derive(Debug, Clone)]
pub struct FrameClock {
    frame_time: Duration,
    last_tick: Instant,
}

impl FrameClock {
    /// Creates a clock for `ticks_per_second` ticks.
    pub fn new(ticks_per_second: u32) -> Self {
        Self {
            frame_time: Duration::from_secs(1) / ticks_per_second.max(1),
            last_tick: Instant::now(),
        }
    }

    /// Duration of one tick.
    pub fn frame_time(&self) -> Duration {
        self.frame_time
    }

    /// Time left in the current tick at `now`.
    pub fn remaining(&self, now: Instant) -> Duration {
        self.frame_time
            .saturating_sub(now.saturating_duration_since(self.last_tick))
    }

    /// Blocks until the current tick is over.
    ///
    /// # Returns
    ///
    /// Time elapsed since the previous call.
    pub fn tick(&mut self) -> Duration {
        let remaining = self.remaining(Instant::now());
        if !remaining.is_zero() {
            std::thread::sleep(remaining);
        }

        let now = Instant::now();
        let elapsed = now.saturating_duration_since(self.last_tick);
        self.last_tick = now;
        elapsed
    }
}
