//! Millisecond clock abstraction.
//!
//! The simulation only ever asks "what time is it, in milliseconds since the
//! Unix epoch". Front ends provide the wall clock; tests use [`ManualClock`]
//! and advance it explicitly instead of sleeping.

use core::cell::Cell;

/// Source of the current time in milliseconds.
pub trait Clock {
    /// Current time in milliseconds since the Unix epoch.
    fn now_ms(&self) -> u64;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_ms(&self) -> u64 { (**self).now_ms() }
}

/// Clock that only moves when told to.
///
/// Uses interior mutability so it can be shared by reference with a
/// [`SensorSimulator`](crate::dashboard::SensorSimulator) while the test keeps
/// advancing it.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<u64>,
}

impl ManualClock {
    /// Create a clock frozen at `start_ms`.
    pub const fn new(start_ms: u64) -> Self { Self { now: Cell::new(start_ms) } }

    /// Move the clock forward by `ms`.
    pub fn advance(
        &self,
        ms: u64,
    ) {
        self.now.set(self.now.get().saturating_add(ms));
    }

    /// Jump to an absolute time (may go backwards).
    pub fn set(
        &self,
        now_ms: u64,
    ) {
        self.now.set(now_ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 { self.now.get() }
}
