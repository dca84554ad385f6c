//! The simulator/renderer: ties simulation, ticker, overlay and surface together.
//!
//! [`SensorSimulator`] owns every piece of mutable state explicitly. The front
//! end calls [`SensorSimulator::poll`] from its main loop and forwards user
//! input through [`SensorSimulator::press`]; everything visible ends up in the
//! [`DisplaySurface`] it was constructed with.
//!
//! # Fixed States
//!
//! Camera, alert and the three detection flags never change during a run. They
//! are written once on construction, before the first tick.

use core::fmt::Write;

use heapless::String;
use rand::Rng;

use crate::clock::Clock;
use crate::config::TICK_INTERVAL_MS;
use crate::overlay::{CAMERA_DISCONNECTED, Control, Overlay};
use crate::simulation::{SimulationState, SystemStatus, TickReport};
use crate::ticker::Ticker;
use crate::view::{DisplaySurface, Field, Tone};

/// Fixed pill states written once at startup.
const FIXED_PILLS: [(Field, &str, Tone); 5] = [
    (Field::CameraStatus, "CONNECTION LOST", Tone::Bad),
    (Field::AlertStatus, "OFF", Tone::Ok),
    (Field::VisualConfirmed, "NO", Tone::Ok),
    (Field::AreaFlag, "NO", Tone::Ok),
    (Field::LineFlag, "NO", Tone::Ok),
];

/// Tone of the system status pill.
pub const fn status_tone(status: SystemStatus) -> Tone {
    match status {
        SystemStatus::Calibrating => Tone::Warn,
        SystemStatus::Calibrated => Tone::Ok,
    }
}

/// Periodic sensor simulator writing into a display surface.
pub struct SensorSimulator<C, R, S> {
    clock: C,
    rng: R,
    surface: S,
    state: SimulationState,
    overlay: Overlay,
    ticker: Ticker,
    ticks: u64,
}

impl<C, R, S> SensorSimulator<C, R, S>
where
    C: Clock,
    R: Rng,
    S: DisplaySurface,
{
    /// Start a run at the clock's current time with a random calibration window.
    pub fn new(
        clock: C,
        mut rng: R,
        surface: S,
    ) -> Self {
        let state = SimulationState::new(clock.now_ms(), &mut rng);
        Self::with_state(clock, rng, surface, state)
    }

    /// Start a run from an explicit simulation state.
    pub fn with_state(
        clock: C,
        rng: R,
        mut surface: S,
        state: SimulationState,
    ) -> Self {
        for (field, text, tone) in FIXED_PILLS {
            surface.set_pill(field, text, tone);
        }
        surface.set_overlay_visible(false);

        log::info!(
            "Simulation started, calibration window {} ms",
            state.calibration_ms()
        );

        Self {
            clock,
            rng,
            surface,
            state,
            overlay: Overlay::new(),
            ticker: Ticker::new(TICK_INTERVAL_MS),
            ticks: 0,
        }
    }

    /// Run a tick if one is due. Returns whether it ran.
    pub fn poll(&mut self) -> bool {
        if self.ticker.is_due(self.clock.now_ms()) {
            self.tick();
            true
        } else {
            false
        }
    }

    /// Milliseconds until the next tick is due.
    pub fn until_next_tick(&self) -> u64 { self.ticker.remaining(self.clock.now_ms()) }

    /// Run one tick now and re-arm the ticker after it.
    pub fn tick(&mut self) -> TickReport {
        let now_ms = self.clock.now_ms();
        let report = self.state.step(now_ms, &mut self.rng);
        self.project(&report);
        self.ticks += 1;

        if report.just_calibrated {
            log::info!("System calibrated after {} ms", self.state.elapsed_ms(now_ms));
        }
        log::debug!(
            "Tick {}: {:.2} C ({}), {:.2} % ({})",
            self.ticks,
            report.reading.temperature_c,
            report.temperature_trend.label(),
            report.reading.humidity_pct,
            report.humidity_trend.label()
        );

        self.ticker.rearm(self.clock.now_ms());
        report
    }

    /// Handle a button or modal control.
    pub fn press(
        &mut self,
        control: Control,
    ) {
        if control.opens_overlay() {
            self.surface.set_hint(CAMERA_DISCONNECTED);
        }
        let visible = self.overlay.apply(control);
        self.surface.set_overlay_visible(visible);
        log::info!(
            "Control '{}': overlay {}",
            control.name(),
            if visible { "shown" } else { "hidden" }
        );
    }

    fn project(
        &mut self,
        report: &TickReport,
    ) {
        self.surface
            .set_pill(Field::SystemStatus, report.status.label(), status_tone(report.status));

        let mut text: String<16> = String::new();
        let _ = write!(text, "{:.1} °C", report.reading.temperature_c);
        self.surface.set_text(Field::Temperature, &text);

        text.clear();
        let _ = write!(text, "{:.0} %", report.reading.humidity_pct);
        self.surface.set_text(Field::Humidity, &text);

        self.surface
            .set_pill(Field::TemperatureTrend, report.temperature_trend.label(), Tone::Warn);
        self.surface
            .set_pill(Field::HumidityTrend, report.humidity_trend.label(), Tone::Warn);
    }

    #[inline]
    pub const fn surface(&self) -> &S { &self.surface }

    #[inline]
    pub const fn surface_mut(&mut self) -> &mut S { &mut self.surface }

    #[inline]
    pub const fn state(&self) -> &SimulationState { &self.state }

    #[inline]
    pub const fn overlay(&self) -> &Overlay { &self.overlay }

    #[inline]
    pub const fn clock(&self) -> &C { &self.clock }

    /// Number of ticks run so far.
    #[inline]
    pub const fn ticks(&self) -> u64 { self.ticks }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use rand::rngs::mock::StepRng;

    use super::*;
    use crate::clock::ManualClock;
    use crate::config::TICK_INTERVAL_MS;
    use crate::thresholds::{HUM_MAX_PCT, HUM_MIN_PCT, TEMP_PERIOD_S};
    use crate::view::DashboardView;

    type TestSim<'a, R> = SensorSimulator<&'a ManualClock, R, DashboardView>;

    /// Simulator at t=0 whose RNG always draws the lower bound (calibration = 60 s).
    fn zero_sim(clock: &ManualClock) -> TestSim<'_, StepRng> {
        SensorSimulator::new(clock, StepRng::new(0, 0), DashboardView::new())
    }

    #[test]
    fn test_fixed_pills_before_first_tick() {
        let clock = ManualClock::new(0);
        let sim = zero_sim(&clock);
        let view = sim.surface();

        assert_eq!(view.text(Field::CameraStatus), "CONNECTION LOST");
        assert_eq!(view.tone(Field::CameraStatus), Some(Tone::Bad));
        assert_eq!(view.text(Field::AlertStatus), "OFF");
        for field in [Field::VisualConfirmed, Field::AreaFlag, Field::LineFlag] {
            assert_eq!(view.text(field), "NO");
            assert_eq!(view.tone(field), Some(Tone::Ok));
        }
        assert_eq!(view.text(Field::SystemStatus), "", "Status is only written by a tick");
        assert!(!view.overlay_visible());
    }

    #[test]
    fn test_first_poll_ticks_immediately() {
        let clock = ManualClock::new(0);
        let mut sim = zero_sim(&clock);

        assert!(sim.poll());
        assert_eq!(sim.ticks(), 1);
        assert_eq!(sim.until_next_tick(), TICK_INTERVAL_MS);
    }

    #[test]
    fn test_ticks_follow_simulated_time() {
        let clock = ManualClock::new(0);
        let mut sim = zero_sim(&clock);
        sim.poll();

        clock.advance(1_999);
        assert!(!sim.poll());
        clock.advance(1);
        assert!(sim.poll());
        assert_eq!(sim.ticks(), 2);

        // Ten more intervals in 100ms steps
        for _ in 0..200 {
            clock.advance(100);
            sim.poll();
        }
        assert_eq!(sim.ticks(), 12);
    }

    #[test]
    fn test_first_tick_values() {
        let clock = ManualClock::new(0);
        let mut sim = zero_sim(&clock);
        sim.poll();
        let view = sim.surface();

        // sin(0) == 0 and noise at its lower bound: 11 - 0.3, 72 - 1.6
        assert_eq!(view.text(Field::Temperature), "10.7 °C");
        assert_eq!(view.text(Field::Humidity), "70 %");
        assert_eq!(view.text(Field::TemperatureTrend), "flat");
        assert_eq!(view.text(Field::HumidityTrend), "flat");
        assert_eq!(view.tone(Field::TemperatureTrend), Some(Tone::Warn));
        assert_eq!(view.text(Field::SystemStatus), "CALIBRATING");
        assert_eq!(view.tone(Field::SystemStatus), Some(Tone::Warn));
    }

    #[test]
    fn test_trends_rise_with_waveform() {
        let clock = ManualClock::new(0);
        let mut sim = zero_sim(&clock);
        sim.poll();

        // Quarter period of the temperature wave: +1.4 C, humidity +5.8 %
        clock.set((core::f64::consts::FRAC_PI_2 * TEMP_PERIOD_S * 1000.0) as u64);
        assert!(sim.poll());
        let view = sim.surface();
        assert_eq!(view.text(Field::TemperatureTrend), "up");
        assert_eq!(view.text(Field::HumidityTrend), "up");
        assert_eq!(view.text(Field::SystemStatus), "CALIBRATING");
    }

    #[test]
    fn test_calibration_transition() {
        let clock = ManualClock::new(0);
        let mut sim = zero_sim(&clock);
        assert_eq!(sim.state().calibration_ms(), 60_000);

        while clock.now_ms() < 60_000 {
            sim.poll();
            assert_eq!(sim.surface().text(Field::SystemStatus), "CALIBRATING");
            clock.advance(TICK_INTERVAL_MS);
        }

        assert!(sim.poll());
        assert_eq!(sim.surface().text(Field::SystemStatus), "CALIBRATED");
        assert_eq!(sim.surface().tone(Field::SystemStatus), Some(Tone::Ok));

        // Clock jumps back: status holds
        clock.set(0);
        sim.tick();
        assert_eq!(sim.surface().text(Field::SystemStatus), "CALIBRATED");
    }

    #[test]
    fn test_start_and_stop_open_modal() {
        let clock = ManualClock::new(0);

        for control in [Control::Start, Control::Stop] {
            let mut sim = zero_sim(&clock);
            sim.press(control);
            assert!(sim.overlay().is_visible());
            assert!(sim.surface().overlay_visible());
            assert_eq!(sim.surface().hint(), "Camera disconnected");
        }
    }

    #[test]
    fn test_backdrop_and_confirm_close_modal() {
        let clock = ManualClock::new(0);

        for control in [Control::Backdrop, Control::Confirm] {
            let mut sim = zero_sim(&clock);
            sim.press(Control::Start);
            sim.press(control);
            assert!(!sim.overlay().is_visible());
            assert!(!sim.surface().overlay_visible());
            assert_eq!(sim.surface().hint(), "Camera disconnected", "Hint line stays after closing");
        }
    }

    #[test]
    fn test_modal_does_not_pause_ticks() {
        let clock = ManualClock::new(0);
        let mut sim = zero_sim(&clock);
        sim.press(Control::Start);

        sim.poll();
        clock.advance(TICK_INTERVAL_MS);
        sim.poll();
        assert_eq!(sim.ticks(), 2);
        assert!(sim.surface().overlay_visible());
    }

    #[test]
    fn test_random_run_keeps_bounds() {
        let clock = ManualClock::new(1_700_000_000_000);
        let mut sim = SensorSimulator::new(&clock, SmallRng::seed_from_u64(3), DashboardView::new());

        for _ in 0..100 {
            let report = sim.tick();
            assert!((HUM_MIN_PCT..=HUM_MAX_PCT).contains(&report.reading.humidity_pct));
            clock.advance(TICK_INTERVAL_MS);
        }
        assert_eq!(sim.surface().text(Field::SystemStatus), "CALIBRATED");
    }
}
