//! Fixed-cadence frame timer.

use std::time::{Duration, Instant};

use crate::types::TICK_MS;

#[derive(Debug, Clone, Copy)]
pub struct FramePacer {
    frame: Duration,
    last: Instant,
}

impl FramePacer {
    pub fn new(frame: Duration, now: Instant) -> Self {
        Self { frame, last: now }
    }

    /// Pacer at the default ~60 Hz cadence.
    pub fn standard(now: Instant) -> Self {
        Self::new(Duration::from_millis(TICK_MS as u64), now)
    }

    /// How long the host may block on input before the next frame is due.
    pub fn timeout(&self, now: Instant) -> Duration {
        self.frame
            .checked_sub(now.saturating_duration_since(self.last))
            .unwrap_or(Duration::ZERO)
    }

    /// Returns `true` (and starts the next frame) when a frame is due.
    ///
    /// Missed frames are not replayed; at most one frame is due per call.
    pub fn due(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last) >= self.frame {
            self.last = now;
            return true;
        }
        false
    }
}
