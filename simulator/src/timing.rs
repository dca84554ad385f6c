//! Timing constants for the simulator.
//!
//! These constants use `std::time::Duration` which is not available in `no_std`
//! environments, so they are defined here rather than in the common crate.

use std::time::Duration;

/// Target frame time (~50 FPS). The window loop sleeps if a frame completes early.
#[cfg(feature = "window")]
pub const FRAME_TIME: Duration = Duration::from_millis(20);

/// Longest single sleep of the headless loop.
#[cfg(not(feature = "window"))]
pub const MAX_IDLE: Duration = Duration::from_millis(500);

/// Sleep before the next headless poll, given the time until the next tick.
#[cfg(not(feature = "window"))]
pub fn idle_for(until_next_tick_ms: u64) -> Duration { Duration::from_millis(until_next_tick_ms).min(MAX_IDLE) }
