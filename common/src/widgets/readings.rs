//! Right column: temperature and humidity cells.
//!
//! Each cell shows a caption, the formatted value in the large font, the trend
//! pill and an arrow next to the pill.

use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
    text::Text,
};

use super::primitives::{draw_pill, draw_trend_arrow};
use crate::colors::{BLACK, WHITE};
use crate::config::READING_CELL_HEIGHT;
use crate::layout::{READING_FIELDS, READING_WIDTH, READING_X, reading_cell_top};
use crate::simulation::Trend;
use crate::styles::{CAPTION_STYLE, LEFT_MIDDLE, LEFT_TOP, VALUE_STYLE_WHITE};
use crate::view::DashboardView;

const CELL_MARGIN_X: i32 = 8;
const CAPTION_OFFSET_Y: i32 = 6;
const VALUE_OFFSET_Y: i32 = 36;
const TREND_OFFSET_Y: i32 = 58;

/// Gap between the trend pill and its arrow.
const ARROW_GAP: i32 = 10;

const CLEAR_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(BLACK);

/// Area of cell `index` inside the dividers.
const fn cell_interior(index: usize) -> Rectangle {
    Rectangle::new(
        Point::new(READING_X + 1, reading_cell_top(index) + 1),
        Size::new(READING_WIDTH - 1, READING_CELL_HEIGHT - 1),
    )
}

/// Draw both reading cells, clearing each first.
pub fn draw_readings<D>(
    display: &mut D,
    view: &DashboardView,
) where
    D: DrawTarget<Color = Rgb565>,
{
    for (index, &(value_field, trend_field)) in READING_FIELDS.iter().enumerate() {
        let top = reading_cell_top(index);
        let left = READING_X + CELL_MARGIN_X;

        cell_interior(index).into_styled(CLEAR_STYLE).draw(display).ok();

        Text::with_text_style(
            value_field.caption(),
            Point::new(left, top + CAPTION_OFFSET_Y),
            CAPTION_STYLE,
            LEFT_TOP,
        )
        .draw(display)
        .ok();

        Text::with_text_style(
            view.text(value_field),
            Point::new(left, top + VALUE_OFFSET_Y),
            VALUE_STYLE_WHITE,
            LEFT_MIDDLE,
        )
        .draw(display)
        .ok();

        let trend_text = view.text(trend_field);
        let pill = draw_pill(
            display,
            Point::new(left, top + TREND_OFFSET_Y),
            trend_text,
            view.tone(trend_field),
        );

        if let Some(trend) = Trend::from_label(trend_text) {
            let center = pill.center();
            let right = pill.top_left.x + pill.size.width as i32;
            draw_trend_arrow(display, right + ARROW_GAP, center.y, trend, WHITE);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::PILL_WARN;
    use crate::view::{DisplaySurface, Field, Tone};
    use crate::widgets::canvas::Canvas;

    fn filled_view() -> DashboardView {
        let mut view = DashboardView::new();
        view.set_text(Field::Temperature, "10.7 °C");
        view.set_text(Field::Humidity, "70 %");
        view.set_pill(Field::TemperatureTrend, "up", Tone::Warn);
        view.set_pill(Field::HumidityTrend, "flat", Tone::Warn);
        view
    }

    #[test]
    fn test_values_and_trends_drawn() {
        let mut canvas = Canvas::new();
        draw_readings(&mut canvas, &filled_view());

        for index in 0..2 {
            let top = reading_cell_top(index);
            let value_band = Rectangle::new(Point::new(READING_X, top + VALUE_OFFSET_Y - 10), Size::new(READING_WIDTH, 20));
            assert!(canvas.count_in(value_band, WHITE) > 20, "Value text in cell {index}");

            let pill_corner = Point::new(READING_X + CELL_MARGIN_X, top + TREND_OFFSET_Y);
            assert_eq!(canvas.pixel(pill_corner), PILL_WARN, "Trend pill in cell {index}");
        }
    }

    #[test]
    fn test_degree_sign_renders() {
        let mut with_degree = Canvas::new();
        let mut view = filled_view();
        draw_readings(&mut with_degree, &view);

        let mut without = Canvas::new();
        view.set_text(Field::Temperature, "10.7  C");
        draw_readings(&mut without, &view);

        let band = cell_interior(0);
        assert!(with_degree.count_in(band, WHITE) > without.count_in(band, WHITE), "° has glyph pixels");
    }

    #[test]
    fn test_arrow_beside_pill() {
        let mut canvas = Canvas::new();
        draw_readings(&mut canvas, &filled_view());

        // "up" pill is 20px wide; arrow tip 4px above its centre line
        let top = reading_cell_top(0) + TREND_OFFSET_Y;
        let arrow_x = READING_X + CELL_MARGIN_X + 20 + ARROW_GAP;
        assert_eq!(canvas.pixel(Point::new(arrow_x, top + 7 - 4)), WHITE);
    }

    #[test]
    fn test_empty_view_draws_captions_only() {
        let mut canvas = Canvas::new();
        draw_readings(&mut canvas, &DashboardView::new());

        let pill_corner = Point::new(READING_X + CELL_MARGIN_X, reading_cell_top(0) + TREND_OFFSET_Y);
        assert_eq!(canvas.pixel(pill_corner), BLACK);
        assert!(!canvas.is_blank(), "Captions are always shown");
    }
}
