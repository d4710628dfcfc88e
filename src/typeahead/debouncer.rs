//! Trailing-edge debouncer
//!
//! Each keystroke reschedules a single deadline; the action fires only after
//! a quiet period of the configured delay. Time is an explicit argument so
//! state tests can step a virtual clock instead of sleeping.

use std::time::{Duration, Instant};

/// Debounces an action behind a movable deadline
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Schedule (or reschedule) the deadline at `now + delay`
    ///
    /// A later call replaces the pending deadline, so within a burst of
    /// keystrokes only the last one fires.
    pub fn schedule(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// Discard any pending deadline
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Whether a deadline is currently pending
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Fire the deadline if it is due; fires at most once per schedule
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Time remaining until the pending deadline, if any
    ///
    /// Used to size the event-loop poll timeout so the fire isn't delayed by
    /// a full idle tick.
    pub fn time_until(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }
}

#[cfg(test)]
#[path = "debouncer_tests.rs"]
mod debouncer_tests;
