//! Synthetic sensor readings, trend labels and the calibration latch.
//!
//! All mutable simulation state lives in [`SimulationState`] and is advanced by
//! [`SimulationState::step`], which takes the current time and a random source
//! explicitly. Nothing here reads a clock or an entropy source on its own, so a
//! fixed clock and a fixed RNG reproduce a run exactly.
//!
//! # Calibration
//!
//! The system reports `CALIBRATING` until `calibration_ms` have elapsed since
//! `start_ms`, then `CALIBRATED` for the rest of the run. The transition is
//! latched: a clock that later steps backwards does not revert it.
//!
//! # Trends
//!
//! Each reading is compared with the previous tick's value. A change larger
//! than the deadband reads `up`, smaller than its negation reads `down`,
//! anything else (including the very first reading) reads `flat`.

use rand::Rng;

use crate::thresholds::{
    BASE_HUM_PCT,
    BASE_TEMP_C,
    CALIBRATION_MAX_MS,
    CALIBRATION_MIN_MS,
    HUM_AMPLITUDE,
    HUM_DEADBAND,
    HUM_MAX_PCT,
    HUM_MIN_PCT,
    HUM_NOISE,
    HUM_PERIOD_S,
    TEMP_AMPLITUDE,
    TEMP_DEADBAND,
    TEMP_MAX_C,
    TEMP_MIN_C,
    TEMP_NOISE,
    TEMP_PERIOD_S,
    clamp,
};

// =============================================================================
// Status & Trend Enums
// =============================================================================

/// Overall system status shown in the `sysStatus` pill.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SystemStatus {
    #[default]
    Calibrating,
    Calibrated,
}

impl SystemStatus {
    /// Upper-case label as displayed.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Calibrating => "CALIBRATING",
            Self::Calibrated => "CALIBRATED",
        }
    }
}

/// Direction of change between two consecutive readings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    #[default]
    Flat,
}

impl Trend {
    /// Classify `current` against `previous` using a symmetric deadband.
    ///
    /// Without a previous value the trend is always [`Trend::Flat`].
    pub fn classify(
        current: f32,
        previous: Option<f32>,
        deadband: f32,
    ) -> Self {
        let Some(previous) = previous else {
            return Self::Flat;
        };
        let delta = current - previous;
        if delta > deadband {
            Self::Up
        } else if delta < -deadband {
            Self::Down
        } else {
            Self::Flat
        }
    }

    /// Lower-case label as displayed.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Flat => "flat",
        }
    }

    /// Inverse of [`Trend::label`].
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "up" => Some(Self::Up),
            "down" => Some(Self::Down),
            "flat" => Some(Self::Flat),
            _ => None,
        }
    }
}

// =============================================================================
// Reading
// =============================================================================

/// One synthetic sample of both sensors, already clamped.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reading {
    /// Temperature in °C, within `[TEMP_MIN_C, TEMP_MAX_C]`.
    pub temperature_c: f32,
    /// Relative humidity in percent, within `[HUM_MIN_PCT, HUM_MAX_PCT]`.
    pub humidity_pct: f32,
}

impl Reading {
    /// Sample both sensors at wall-clock time `now_ms`.
    ///
    /// The sinusoid phase is computed in `f64` because epoch seconds exceed the
    /// precision of `f32`.
    pub fn sample<R: Rng + ?Sized>(
        now_ms: u64,
        rng: &mut R,
    ) -> Self {
        let t = now_ms as f64 / 1000.0;

        let temp_wave = libm::sin(t / TEMP_PERIOD_S) as f32;
        let temp = BASE_TEMP_C + TEMP_AMPLITUDE * temp_wave + rng.gen_range(-TEMP_NOISE..TEMP_NOISE);

        let hum_wave = libm::sin(t / HUM_PERIOD_S) as f32;
        let hum = BASE_HUM_PCT + HUM_AMPLITUDE * hum_wave + rng.gen_range(-HUM_NOISE..HUM_NOISE);

        Self {
            temperature_c: clamp(temp, TEMP_MIN_C, TEMP_MAX_C),
            humidity_pct: clamp(hum, HUM_MIN_PCT, HUM_MAX_PCT),
        }
    }
}

// =============================================================================
// Tick Report
// =============================================================================

/// Everything one tick produces, ready to be projected onto a display.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickReport {
    pub status: SystemStatus,
    pub reading: Reading,
    pub temperature_trend: Trend,
    pub humidity_trend: Trend,
    /// True only on the tick where the status flipped to `CALIBRATED`.
    pub just_calibrated: bool,
}

// =============================================================================
// Simulation State
// =============================================================================

/// Explicit simulation state, created once at startup and mutated every tick.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationState {
    start_ms: u64,
    calibration_ms: u32,
    calibrated: bool,
    prev_temperature: Option<f32>,
    prev_humidity: Option<f32>,
}

impl SimulationState {
    /// Start a run at `start_ms` with a calibration window drawn from
    /// `[CALIBRATION_MIN_MS, CALIBRATION_MAX_MS)`.
    pub fn new<R: Rng + ?Sized>(
        start_ms: u64,
        rng: &mut R,
    ) -> Self {
        let calibration_ms = rng.gen_range(CALIBRATION_MIN_MS..CALIBRATION_MAX_MS);
        Self::with_calibration(start_ms, calibration_ms)
    }

    /// Start a run with a fixed calibration window.
    pub const fn with_calibration(
        start_ms: u64,
        calibration_ms: u32,
    ) -> Self {
        Self {
            start_ms,
            calibration_ms,
            calibrated: false,
            prev_temperature: None,
            prev_humidity: None,
        }
    }

    #[inline]
    pub const fn start_ms(&self) -> u64 { self.start_ms }

    #[inline]
    pub const fn calibration_ms(&self) -> u32 { self.calibration_ms }

    #[inline]
    pub const fn is_calibrated(&self) -> bool { self.calibrated }

    /// Previous temperature and humidity, if a tick has run.
    #[inline]
    pub const fn previous(&self) -> (Option<f32>, Option<f32>) { (self.prev_temperature, self.prev_humidity) }

    /// Milliseconds since the run started. A clock behind `start_ms` reads 0.
    #[inline]
    pub const fn elapsed_ms(
        &self,
        now_ms: u64,
    ) -> u64 {
        now_ms.saturating_sub(self.start_ms)
    }

    /// Calibration status at `now_ms`, latching `CALIBRATED` once reached.
    pub fn status_at(
        &mut self,
        now_ms: u64,
    ) -> SystemStatus {
        if !self.calibrated && self.elapsed_ms(now_ms) >= u64::from(self.calibration_ms) {
            self.calibrated = true;
        }
        if self.calibrated { SystemStatus::Calibrated } else { SystemStatus::Calibrating }
    }

    /// Run one tick: status, fresh reading and trends against the previous tick.
    pub fn step<R: Rng + ?Sized>(
        &mut self,
        now_ms: u64,
        rng: &mut R,
    ) -> TickReport {
        let was_calibrated = self.calibrated;
        let status = self.status_at(now_ms);

        let reading = Reading::sample(now_ms, rng);
        let temperature_trend = Trend::classify(reading.temperature_c, self.prev_temperature, TEMP_DEADBAND);
        let humidity_trend = Trend::classify(reading.humidity_pct, self.prev_humidity, HUM_DEADBAND);

        self.prev_temperature = Some(reading.temperature_c);
        self.prev_humidity = Some(reading.humidity_pct);

        TickReport {
            status,
            reading,
            temperature_trend,
            humidity_trend,
            just_calibrated: !was_calibrated && self.calibrated,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
