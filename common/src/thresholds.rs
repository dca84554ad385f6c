//! Centralized simulation constants.
//!
//! All values are compile-time constants with validation assertions, so the
//! waveform, clamp bounds and trend deadbands stay consistent between the
//! simulation and the widgets that colour and label them.
//!
//! # Compile-Time Validation
//!
//! Each group carries `const` assertions. If a bound is edited so that, for
//! example, the baseline falls outside its clamp range, compilation fails.
//!
//! # Waveform
//!
//! Each reading is `BASE + AMPLITUDE * sin(t / PERIOD) + noise`, where `t` is the
//! wall-clock time in seconds and `noise` is uniform in `[-NOISE, NOISE)`. The
//! result is clamped to `[MIN, MAX]`.

// =============================================================================
// Temperature (simulated DHT11, winter baseline)
// =============================================================================

/// Baseline temperature in °C.
pub const BASE_TEMP_C: f32 = 11.0;

/// Peak deviation of the slow sinusoid in °C.
pub const TEMP_AMPLITUDE: f32 = 1.4;

/// Divisor applied to wall-clock seconds before `sin`.
pub const TEMP_PERIOD_S: f64 = 35.0;

/// Half-width of the uniform noise band in °C.
pub const TEMP_NOISE: f32 = 0.3;

/// Lowest reportable temperature.
pub const TEMP_MIN_C: f32 = 5.0;

/// Highest reportable temperature.
pub const TEMP_MAX_C: f32 = 20.0;

/// Minimum change between ticks before the trend reads up/down.
pub const TEMP_DEADBAND: f32 = 0.25;

const _: () = assert!(TEMP_MIN_C < TEMP_MAX_C);
const _: () = assert!(TEMP_MIN_C <= BASE_TEMP_C - TEMP_AMPLITUDE - TEMP_NOISE);
const _: () = assert!(BASE_TEMP_C + TEMP_AMPLITUDE + TEMP_NOISE <= TEMP_MAX_C);
const _: () = assert!(TEMP_DEADBAND > 0.0);

// =============================================================================
// Relative Humidity
// =============================================================================

/// Baseline relative humidity in percent.
pub const BASE_HUM_PCT: f32 = 72.0;

/// Peak deviation of the slow sinusoid in percent.
pub const HUM_AMPLITUDE: f32 = 6.0;

/// Divisor applied to wall-clock seconds before `sin`.
pub const HUM_PERIOD_S: f64 = 42.0;

/// Half-width of the uniform noise band in percent.
pub const HUM_NOISE: f32 = 1.6;

/// Lowest reportable humidity.
pub const HUM_MIN_PCT: f32 = 30.0;

/// Highest reportable humidity.
pub const HUM_MAX_PCT: f32 = 95.0;

/// Minimum change between ticks before the trend reads up/down.
pub const HUM_DEADBAND: f32 = 1.0;

const _: () = assert!(HUM_MIN_PCT < HUM_MAX_PCT);
const _: () = assert!(HUM_MIN_PCT <= BASE_HUM_PCT - HUM_AMPLITUDE - HUM_NOISE);
const _: () = assert!(BASE_HUM_PCT + HUM_AMPLITUDE + HUM_NOISE <= HUM_MAX_PCT);
const _: () = assert!(HUM_DEADBAND > 0.0);

// =============================================================================
// Calibration Window
// =============================================================================

/// Shortest calibration window (inclusive).
pub const CALIBRATION_MIN_MS: u32 = 60_000;

/// Longest calibration window (exclusive).
pub const CALIBRATION_MAX_MS: u32 = 120_000;

const _: () = assert!(CALIBRATION_MIN_MS < CALIBRATION_MAX_MS);

/// Clamp `value` into `[lo, hi]`.
///
/// NaN collapses to `lo`, so a reading can never escape its bounds.
#[inline]
pub fn clamp(
    value: f32,
    lo: f32,
    hi: f32,
) -> f32 {
    if value.is_nan() { lo } else { value.max(lo).min(hi) }
}

// =============================================================================
// Unit Tests
// =============================================================================
