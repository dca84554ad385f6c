//! Platform-agnostic core of the sensor monitor dashboard.
//!
//! Everything here is shared by the desktop simulator and any other front end
//! that can provide an `embedded_graphics` draw target:
//!
//! - [`clock`]: Injectable millisecond clock (`Clock`, `ManualClock`)
//! - [`thresholds`]: Simulation constants (bounds, deadbands, waveform)
//! - [`simulation`]: Simulation state, readings, trends and calibration status
//! - [`view`]: Named display fields, pill tones and the `DisplaySurface` sink
//! - [`overlay`]: Modal dialog state and the controls that toggle it
//! - [`ticker`]: Re-arming fixed-delay scheduler
//! - [`dashboard`]: `SensorSimulator`, tying the pieces together
//! - [`config`]: Screen geometry and tick interval
//! - [`layout`]: Widget rectangles and click hit-testing
//! - [`colors`] / [`styles`]: RGB565 palette and text styles
//! - [`render`]: Redraw tracking
//! - [`widgets`]: Drawing functions for every part of the screen
//!
//! # no_std Compatibility
//!
//! The crate is `no_std` outside of tests. Time comes in through [`clock::Clock`]
//! as plain milliseconds and randomness through `rand::Rng`, so nothing here
//! depends on `std::time` or an OS entropy source.

#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod clock;
pub mod colors;
pub mod config;
pub mod dashboard;
pub mod layout;
pub mod overlay;
pub mod render;
pub mod simulation;
pub mod styles;
pub mod thresholds;
pub mod ticker;
pub mod view;
pub mod widgets;

// Re-export commonly used items
pub use clock::{Clock, ManualClock};
pub use dashboard::SensorSimulator;
pub use overlay::{Control, Overlay};
pub use simulation::{Reading, SimulationState, SystemStatus, TickReport, Trend};
pub use view::{DashboardView, DisplaySurface, Field, Tone};
