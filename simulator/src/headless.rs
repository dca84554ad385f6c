//! Terminal front end: ticks on the wall clock and logs a summary per tick.

use core::fmt::Write;
use std::thread;

use heapless::String;
use rand::Rng;
use sensor_dashboard_common::{Clock, DashboardView, Field, SensorSimulator};

use crate::surface::LoggingSurface;
use crate::timing::idle_for;

/// One-line summary of the live fields, e.g.
/// `SYSTEM CALIBRATING | TEMPERATURE 10.7 °C (flat) | HUMIDITY 70 % (flat)`.
pub fn summary(view: &DashboardView) -> String<128> {
    let mut line = String::new();
    let _ = write!(
        line,
        "{} {} | {} {} ({}) | {} {} ({})",
        Field::SystemStatus.caption(),
        view.text(Field::SystemStatus),
        Field::Temperature.caption(),
        view.text(Field::Temperature),
        view.text(Field::TemperatureTrend),
        Field::Humidity.caption(),
        view.text(Field::Humidity),
        view.text(Field::HumidityTrend),
    );
    line
}

/// Run until the process is interrupted.
pub fn run<C, R>(mut sim: SensorSimulator<C, R, LoggingSurface<DashboardView>>) -> anyhow::Result<()>
where
    C: Clock,
    R: Rng,
{
    log::info!("Running headless, press Ctrl-C to stop");
    loop {
        if sim.poll() {
            let view = sim.surface_mut().inner_mut();
            if view.take_dirty() {
                log::info!("{}", summary(view));
            } else {
                log::debug!("Tick {} changed nothing", sim.ticks());
            }
        }
        thread::sleep(idle_for(sim.until_next_tick()));
    }
}

#[cfg(test)]
mod tests {
    use sensor_dashboard_common::DisplaySurface;
    use sensor_dashboard_common::view::Tone;

    use super::*;

    #[test]
    fn test_summary_line() {
        let mut view = DashboardView::new();
        view.set_pill(Field::SystemStatus, "CALIBRATING", Tone::Warn);
        view.set_text(Field::Temperature, "10.7 °C");
        view.set_pill(Field::TemperatureTrend, "flat", Tone::Warn);
        view.set_text(Field::Humidity, "70 %");
        view.set_pill(Field::HumidityTrend, "up", Tone::Warn);

        assert_eq!(
            summary(&view).as_str(),
            "SYSTEM CALIBRATING | TEMPERATURE 10.7 °C (flat) | HUMIDITY 70 % (up)"
        );
    }

    #[test]
    fn test_summary_before_first_tick() {
        assert_eq!(summary(&DashboardView::new()).as_str(), "SYSTEM  | TEMPERATURE  () | HUMIDITY  ()");
    }
}
