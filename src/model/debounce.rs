//! Cancel-and-reschedule debouncer for the filter input fields.
//!
//! Each keystroke replaces the pending value and restarts the quiet-period
//! deadline, so only the most recent value at quiescence is ever delivered.
//! The debouncer is a pure value polled from the event-loop tick, which
//! keeps it testable with plain `Instant`s.

use std::time::{Duration, Instant};

/// Quiet period for the include/exclude filter fields.
pub const FILTER_DEBOUNCE: Duration = Duration::from_millis(200);

#[derive(Debug)]
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

    /// Record a new value, discarding any pending one and restarting the
    /// quiet period from `now`.
    pub fn trigger(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now + self.delay));
    }

    /// Deliver the pending value if its quiet period has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some((_, deadline)) if *deadline <= now => {
                self.pending.take().map(|(value, _)| value)
            }
            _ => None,
        }
    }

    #[allow(dead_code)]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
