//! Left column: one caption and pill per status field.

use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
    text::Text,
};

use super::primitives::draw_pill;
use crate::colors::BLACK;
use crate::config::{PANEL_SPLIT_X, STATUS_ROW_HEIGHT};
use crate::layout::{STATUS_FIELDS, STATUS_MARGIN_X, status_row_top};
use crate::styles::{CAPTION_STYLE, LEFT_TOP};
use crate::view::DashboardView;

/// Caption offset from the row top.
const CAPTION_OFFSET_Y: i32 = 2;

/// Pill offset from the row top.
const PILL_OFFSET_Y: i32 = 13;

const CLEAR_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(BLACK);

/// Draw every status row, clearing each row first.
pub fn draw_status_column<D>(
    display: &mut D,
    view: &DashboardView,
) where
    D: DrawTarget<Color = Rgb565>,
{
    for (row, &field) in STATUS_FIELDS.iter().enumerate() {
        let top = status_row_top(row);

        Rectangle::new(Point::new(0, top), Size::new(PANEL_SPLIT_X, STATUS_ROW_HEIGHT))
            .into_styled(CLEAR_STYLE)
            .draw(display)
            .ok();

        Text::with_text_style(
            field.caption(),
            Point::new(STATUS_MARGIN_X, top + CAPTION_OFFSET_Y),
            CAPTION_STYLE,
            LEFT_TOP,
        )
        .draw(display)
        .ok();

        draw_pill(
            display,
            Point::new(STATUS_MARGIN_X, top + PILL_OFFSET_Y),
            view.text(field),
            view.tone(field),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{PILL_BAD, PILL_OK, PILL_WARN};
    use crate::view::{DisplaySurface, Field, Tone};
    use crate::widgets::canvas::Canvas;

    fn pill_corner(row: usize) -> Point { Point::new(STATUS_MARGIN_X, status_row_top(row) + PILL_OFFSET_Y) }

    #[test]
    fn test_pills_follow_tones() {
        let mut view = DashboardView::new();
        view.set_pill(Field::SystemStatus, "CALIBRATING", Tone::Warn);
        view.set_pill(Field::CameraStatus, "CONNECTION LOST", Tone::Bad);
        view.set_pill(Field::AlertStatus, "OFF", Tone::Ok);

        let mut canvas = Canvas::new();
        draw_status_column(&mut canvas, &view);

        assert_eq!(canvas.pixel(pill_corner(0)), PILL_WARN);
        assert_eq!(canvas.pixel(pill_corner(1)), PILL_BAD);
        assert_eq!(canvas.pixel(pill_corner(2)), PILL_OK);
        assert_eq!(canvas.pixel(pill_corner(3)), BLACK, "Unwritten flag has no pill");
    }

    #[test]
    fn test_redraw_clears_stale_pill() {
        let mut view = DashboardView::new();
        view.set_pill(Field::SystemStatus, "CALIBRATING", Tone::Warn);
        let mut canvas = Canvas::new();
        draw_status_column(&mut canvas, &view);

        // "CALIBRATED" is one char shorter; the old pill's right edge must go
        let old_right = pill_corner(0) + Point::new(11 * 6 + 7, 0);
        assert_eq!(canvas.pixel(old_right), PILL_WARN);

        view.set_pill(Field::SystemStatus, "CALIBRATED", Tone::Ok);
        draw_status_column(&mut canvas, &view);
        assert_eq!(canvas.pixel(pill_corner(0)), PILL_OK);
        assert_eq!(canvas.pixel(old_right), BLACK);
    }
}
