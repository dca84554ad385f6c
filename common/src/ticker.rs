//! Re-arming fixed-delay scheduler.
//!
//! Mirrors a callback that reschedules itself with a fixed delay after each run:
//! the next deadline is measured from when the tick actually ran, not from the
//! previous deadline, so a late tick pushes every later one back.
//!
//! The ticker holds no clock. Callers pass `now_ms` in, which lets tests drive
//! it with simulated time.

/// Fixed-delay ticker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticker {
    interval_ms: u64,
    /// `None` until the first tick: fire immediately.
    next_due_ms: Option<u64>,
}

impl Ticker {
    /// Create a ticker whose first poll fires immediately.
    pub const fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            next_due_ms: None,
        }
    }

    #[inline]
    pub const fn interval_ms(&self) -> u64 { self.interval_ms }

    /// Deadline of the next tick, if one has been scheduled.
    #[inline]
    pub const fn next_due_ms(&self) -> Option<u64> { self.next_due_ms }

    /// Whether a tick is due at `now_ms`.
    #[inline]
    pub const fn is_due(
        &self,
        now_ms: u64,
    ) -> bool {
        match self.next_due_ms {
            None => true,
            Some(due) => now_ms >= due,
        }
    }

    /// Schedule the next tick `interval_ms` after `now_ms`.
    #[inline]
    pub const fn rearm(
        &mut self,
        now_ms: u64,
    ) {
        self.next_due_ms = Some(now_ms.saturating_add(self.interval_ms));
    }

    /// If due, re-arm and return `true`.
    pub const fn poll(
        &mut self,
        now_ms: u64,
    ) -> bool {
        if self.is_due(now_ms) {
            self.rearm(now_ms);
            true
        } else {
            false
        }
    }

    /// Milliseconds until the next tick (0 when due).
    pub const fn remaining(
        &self,
        now_ms: u64,
    ) -> u64 {
        match self.next_due_ms {
            None => 0,
            Some(due) => due.saturating_sub(now_ms),
        }
    }
}
