//! Periodic autosave schedule
//!
//! A fixed-interval timer the owning event loop polls; when it fires it
//! rearms itself for one interval later. Cancelled on shutdown.

use std::time::{Duration, Instant};

/// Autosave period, matching the 30-second editor flush cadence
pub const DEFAULT_AUTOSAVE_INTERVAL: Duration = Duration::from_secs(30);

#[derive(Debug)]
pub struct AutosaveTimer {
    interval: Duration,
    next_due: Option<Instant>,
}

impl AutosaveTimer {
    /// Arm a timer that first fires one interval from `now`
    pub fn new(interval: Duration, now: Instant) -> Self {
        AutosaveTimer {
            interval,
            next_due: Some(now + interval),
        }
    }

    pub fn with_default_interval(now: Instant) -> Self {
        Self::new(DEFAULT_AUTOSAVE_INTERVAL, now)
    }

    /// Whether a flush is due at `now`. Firing rearms the timer for one
    /// interval after `now`.
    pub fn due(&mut self, now: Instant) -> bool {
        match self.next_due {
            Some(deadline) if now >= deadline => {
                self.next_due = Some(now + self.interval);
                true
            }
            _ => false,
        }
    }

    /// Stop the timer; it never fires again
    pub fn cancel(&mut self) {
        self.next_due = None;
    }

    pub fn is_cancelled(&self) -> bool {
        self.next_due.is_none()
    }
}
