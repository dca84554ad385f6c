//! Sensor Monitor Dashboard Simulator for desktop platforms.
//!
//! Runs headless by default, logging each tick. Build with `--features window`
//! to open an SDL window through `embedded-graphics-simulator`.
//!
//! Log verbosity follows `RUST_LOG` (default `info`; `debug` shows every field
//! write).

mod clock;
#[cfg(not(feature = "window"))]
mod headless;
mod surface;
mod timing;
#[cfg(feature = "window")]
mod window;

use rand::SeedableRng;
use rand::rngs::StdRng;
use sensor_dashboard_common::{DashboardView, SensorSimulator};

use crate::clock::SystemClock;
use crate::surface::LoggingSurface;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let surface = LoggingSurface::new(DashboardView::new());
    let sim = SensorSimulator::new(SystemClock, StdRng::from_entropy(), surface);

    #[cfg(feature = "window")]
    {
        window::run(sim)
    }
    #[cfg(not(feature = "window"))]
    {
        headless::run(sim)
    }
}
