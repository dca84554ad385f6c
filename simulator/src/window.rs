//! SDL window front end.
//!
//! Controls:
//! - Left click: START / STOP buttons, modal OK button, backdrop
//! - `S` / `T`: press START / STOP
//! - `O`: confirm the modal (OK), `B`: dismiss it via the backdrop
//! - `P`: save a screenshot to `dashboard.png`

use std::thread;
use std::time::Instant;

use anyhow::Context;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::{Keycode, MouseButton};
use embedded_graphics_simulator::{OutputSettings, OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use rand::Rng;
use sensor_dashboard_common::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use sensor_dashboard_common::layout::hit_test;
use sensor_dashboard_common::render::RenderState;
use sensor_dashboard_common::widgets::draw_frame;
use sensor_dashboard_common::{Clock, Control, DashboardView, SensorSimulator};

use crate::surface::LoggingSurface;
use crate::timing::FRAME_TIME;

const WINDOW_TITLE: &str = "Sensor Monitor Sim";

/// Where `P` writes the current frame.
pub const SCREENSHOT_PATH: &str = "dashboard.png";

fn key_control(keycode: Keycode) -> Option<Control> {
    match keycode {
        Keycode::S => Some(Control::Start),
        Keycode::T => Some(Control::Stop),
        Keycode::O => Some(Control::Confirm),
        Keycode::B => Some(Control::Backdrop),
        _ => None,
    }
}

fn save_screenshot(
    display: &SimulatorDisplay<Rgb565>,
    output_settings: &OutputSettings,
) -> anyhow::Result<()> {
    display
        .to_rgb_output_image(output_settings)
        .save_png(SCREENSHOT_PATH)
        .with_context(|| format!("Failed to save screenshot to {SCREENSHOT_PATH}"))
}

/// Run until the window is closed.
pub fn run<C, R>(mut sim: SensorSimulator<C, R, LoggingSurface<DashboardView>>) -> anyhow::Result<()>
where
    C: Clock,
    R: Rng,
{
    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(2).build();
    let mut window = Window::new(WINDOW_TITLE, &output_settings);

    let mut render_state = RenderState::new();

    loop {
        let frame_start = Instant::now();

        sim.poll();

        let view = sim.surface_mut().inner_mut();
        if view.take_dirty() {
            draw_frame(&mut display, view, &mut render_state);
        }
        window.update(&display);

        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => return Ok(()),
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if repeat {
                        continue;
                    }
                    if let Some(control) = key_control(keycode) {
                        sim.press(control);
                    } else if keycode == Keycode::P {
                        match save_screenshot(&display, &output_settings) {
                            Ok(()) => log::info!("Screenshot saved to {SCREENSHOT_PATH}"),
                            Err(e) => log::warn!("{e:#}"),
                        }
                    }
                }
                SimulatorEvent::MouseButtonUp {
                    mouse_btn: MouseButton::Left,
                    point,
                } => {
                    if let Some(control) = hit_test(point, sim.surface().inner().overlay_visible()) {
                        sim.press(control);
                    }
                }
                _ => {}
            }
        }

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME_TIME {
            thread::sleep(FRAME_TIME - elapsed);
        }
    }
}
