//! Debounce timer
//!
//! Holds back a value until no newer value has been scheduled for a fixed
//! delay. Scheduling replaces whatever was pending and restarts the delay.
//! Callers pass the current `Instant` in, so the event loop owns the clock.

use std::time::{Duration, Instant};

pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule `value`, dropping any value still waiting
    pub fn schedule(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now));
    }

    /// Take the pending value if it has been quiet for the full delay
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        let due = match &self.pending {
            Some((_, scheduled_at)) => now.saturating_duration_since(*scheduled_at) >= self.delay,
            None => false,
        };

        if due {
            self.pending.take().map(|(value, _)| value)
        } else {
            None
        }
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Time left before the pending value fires, `None` when idle
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.pending.as_ref().map(|(_, scheduled_at)| {
            self.delay
                .saturating_sub(now.saturating_duration_since(*scheduled_at))
        })
    }
}

#[cfg(test)]
#[path = "debounce_tests.rs"]
mod debounce_tests;
