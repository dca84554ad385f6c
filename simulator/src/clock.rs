//! Wall clock for the desktop front ends.

use std::time::{SystemTime, UNIX_EPOCH};

use sensor_dashboard_common::Clock;

/// Reads `SystemTime` on every call.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        // A clock set before 1970 reads as the epoch
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
    }
}
