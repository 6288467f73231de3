//! One-shot timer
//!
//! The reveal never has more than one pending timer. The timer only stores a
//! deadline; callers pass `now` in, so tests drive it without sleeping.

use std::time::{Duration, Instant};

/// A single pending deadline, or none
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OneShotTimer {
    deadline: Option<Instant>,
}

impl OneShotTimer {
    /// Create a disarmed timer
    #[must_use]
    pub const fn new() -> Self {
        Self { deadline: None }
    }

    /// Fire once, `after` from `now`; replaces any pending deadline
    pub fn arm(&mut self, now: Instant, after: Duration) {
        self.deadline = Some(now + after);
    }

    /// Drop the pending deadline, if any
    pub fn disarm(&mut self) {
        self.deadline = None;
    }

    /// Whether a deadline is pending
    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Time left until the deadline, zero if already due
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Consume the deadline if it has passed
    ///
    /// Returns `true` exactly once per arming.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
