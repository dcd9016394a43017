//! Cancellable one-shot delayed evaluation.
//!
//! At most one evaluation is pending at a time. Scheduling replaces whatever was pending,
//! so an earlier, slower query can never land after a newer one.

use tokio::time::{Duration, Instant};

/// Quiet period between the last keystroke and the query evaluation.
pub const DEBOUNCE_DELAY: Duration = Duration::from_millis(150);

#[derive(Debug, Clone, PartialEq, Eq)]
struct Pending {
    query: String,
    deadline: Instant,
}

/// The pending query of one controller and when it becomes due.
#[derive(Debug, Clone)]
pub struct Debounce {
    delay: Duration,
    pending: Option<Pending>,
}

impl Default for Debounce {
    fn default() -> Self {
        Self::new(DEBOUNCE_DELAY)
    }
}

impl Debounce {
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule `query` to run `delay` after `now`, cancelling any pending one first.
    pub fn schedule(&mut self, query: String, now: Instant) -> Instant {
        self.cancel_pending();
        let deadline = now + self.delay;
        self.pending = Some(Pending { query, deadline });
        deadline
    }

    /// Drop the pending evaluation. Returns whether there was one.
    pub fn cancel_pending(&mut self) -> bool {
        self.pending.take().is_some()
    }

    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// When the pending evaluation becomes due.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    /// Take the pending query if its deadline has passed.
    pub fn take_due(&mut self, now: Instant) -> Option<String> {
        if self.deadline().is_some_and(|deadline| deadline <= now) {
            self.pending.take().map(|p| p.query)
        } else {
            None
        }
    }
}
