//! Widget components for the sensor dashboard display.
//!
//! All widgets are generic over `DrawTarget<Color = Rgb565>` for platform independence.

mod footer;
mod header;
mod modal;
mod primitives;
mod readings;
mod status;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

pub use footer::draw_footer;
pub use header::{TITLE, draw_dividers, draw_header};
pub use modal::{MODAL_TITLE, draw_modal};
pub use primitives::{draw_button, draw_pill, draw_trend_arrow, pill_width};
pub use readings::draw_readings;
pub use status::draw_status_column;

use crate::colors::BLACK;
use crate::render::RenderState;
use crate::view::DashboardView;

/// Draw one frame of the dashboard from `view`.
///
/// Clears the display when `render` asks for it, draws the static chrome only
/// when missing, then all fields, and the modal on top while it is shown.
pub fn draw_frame<D>(
    display: &mut D,
    view: &DashboardView,
    render: &mut RenderState,
) where
    D: DrawTarget<Color = Rgb565>,
{
    render.update_overlay(view.overlay_visible());

    if render.needs_clear() {
        display.clear(BLACK).ok();
    }

    if render.need_chrome() {
        draw_header(display);
        draw_dividers(display);
        render.mark_chrome_drawn();
    }

    draw_status_column(display, view);
    draw_readings(display, view);
    draw_footer(display, view);

    if view.overlay_visible() {
        draw_modal(display, view);
    }

    render.end_frame();
}

/// Draw the whole dashboard from scratch.
pub fn draw_dashboard<D>(
    display: &mut D,
    view: &DashboardView,
) where
    D: DrawTarget<Color = Rgb565>,
{
    draw_frame(display, view, &mut RenderState::new());
}


#[cfg(test)]
mod tests {
    use super::canvas::Canvas;
    use super::*;
    use crate::colors::{BACKDROP, HEADER_BG, PILL_OK};
    use crate::layout::{STATUS_MARGIN_X, status_row_top};
    use crate::view::{DisplaySurface, Field, Tone};

    #[test]
    fn test_first_frame_draws_everything() {
        let mut view = DashboardView::new();
        view.set_pill(Field::AlertStatus, "OFF", Tone::Ok);

        let mut canvas = Canvas::new();
        draw_dashboard(&mut canvas, &view);

        assert_eq!(canvas.pixel(Point::new(0, 0)), HEADER_BG);
        assert_eq!(canvas.pixel(Point::new(STATUS_MARGIN_X, status_row_top(2) + 13)), PILL_OK);
    }

    #[test]
    fn test_modal_only_while_visible() {
        let mut view = DashboardView::new();
        let mut render = RenderState::new();
        let mut canvas = Canvas::new();

        draw_frame(&mut canvas, &view, &mut render);
        assert_eq!(canvas.pixel(Point::new(1, 1)), HEADER_BG);

        view.set_overlay_visible(true);
        draw_frame(&mut canvas, &view, &mut render);
        assert_eq!(canvas.pixel(Point::new(1, 1)), BACKDROP, "Backdrop covers the header");

        view.set_overlay_visible(false);
        draw_frame(&mut canvas, &view, &mut render);
        assert_eq!(canvas.pixel(Point::new(1, 1)), HEADER_BG, "Header restored after close");
        assert_eq!(canvas.pixel(Point::new(300, 100)), BLACK, "Backdrop cleared after close");
    }
}
