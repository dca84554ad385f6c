//! Header bar and divider line rendering.
//!
//! Both are static chrome: drawn on the first frame and again after the modal
//! backdrop has been cleared away. Every position is a `const` derived from
//! the layout configuration.

use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{Line, PrimitiveStyle, Rectangle},
    text::Text,
};

use crate::{
    colors::{GRAY, HEADER_BG},
    config::{CENTER_X, FOOTER_TOP, HEADER_HEIGHT, PANEL_SPLIT_X, READING_CELL_HEIGHT, SCREEN_WIDTH},
    styles::{CENTERED, TITLE_STYLE_WHITE},
};

/// Header title text.
pub const TITLE: &str = "SENSOR MONITOR";

// =============================================================================
// Header Layout Constants
// =============================================================================

const HEADER_TITLE_POS: Point = Point::new(CENTER_X, (HEADER_HEIGHT / 2) as i32);

const HEADER_RECT: Rectangle = Rectangle::new(Point::zero(), Size::new(SCREEN_WIDTH, HEADER_HEIGHT));

const HEADER_FILL_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(HEADER_BG);

// =============================================================================
// Divider Line Endpoints
// =============================================================================
//
// Endpoints use SCREEN_WIDTH - 1 because valid pixel columns are 0..319.

/// Vertical divider between the status and readings columns.
const DIV_SPLIT_START: Point = Point::new(PANEL_SPLIT_X as i32, HEADER_HEIGHT as i32);
const DIV_SPLIT_END: Point = Point::new(PANEL_SPLIT_X as i32, FOOTER_TOP as i32 - 1);

/// Horizontal divider between the temperature and humidity cells.
const DIV_CELLS_START: Point = Point::new(PANEL_SPLIT_X as i32, (HEADER_HEIGHT + READING_CELL_HEIGHT) as i32);
const DIV_CELLS_END: Point = Point::new((SCREEN_WIDTH - 1) as i32, (HEADER_HEIGHT + READING_CELL_HEIGHT) as i32);

/// Horizontal divider above the footer.
const DIV_FOOTER_START: Point = Point::new(0, FOOTER_TOP as i32);
const DIV_FOOTER_END: Point = Point::new((SCREEN_WIDTH - 1) as i32, FOOTER_TOP as i32);

const DIVIDER_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(GRAY, 1);

/// Draw the header bar with the dashboard title.
pub fn draw_header<D>(display: &mut D)
where
    D: DrawTarget<Color = Rgb565>,
{
    HEADER_RECT.into_styled(HEADER_FILL_STYLE).draw(display).ok();

    Text::with_text_style(TITLE, HEADER_TITLE_POS, TITLE_STYLE_WHITE, CENTERED)
        .draw(display)
        .ok();
}

/// Draw the panel divider lines.
pub fn draw_dividers<D>(display: &mut D)
where
    D: DrawTarget<Color = Rgb565>,
{
    Line::new(DIV_SPLIT_START, DIV_SPLIT_END)
        .into_styled(DIVIDER_STYLE)
        .draw(display)
        .ok();
    Line::new(DIV_CELLS_START, DIV_CELLS_END)
        .into_styled(DIVIDER_STYLE)
        .draw(display)
        .ok();
    Line::new(DIV_FOOTER_START, DIV_FOOTER_END)
        .into_styled(DIVIDER_STYLE)
        .draw(display)
        .ok();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::WHITE;
    use crate::widgets::canvas::Canvas;

    #[test]
    fn test_header_fills_bar() {
        let mut canvas = Canvas::new();
        draw_header(&mut canvas);

        assert_eq!(canvas.pixel(Point::new(0, 0)), HEADER_BG);
        assert_eq!(canvas.pixel(Point::new(319, 25)), HEADER_BG);
        assert!(canvas.count_in(HEADER_RECT, WHITE) > 0, "Title is drawn");
        assert_ne!(canvas.pixel(Point::new(0, 26)), HEADER_BG, "Body stays untouched");
    }

    #[test]
    fn test_dividers_positions() {
        let mut canvas = Canvas::new();
        draw_dividers(&mut canvas);

        assert_eq!(canvas.pixel(Point::new(PANEL_SPLIT_X as i32, 100)), GRAY);
        assert_eq!(canvas.pixel(Point::new(250, (HEADER_HEIGHT + READING_CELL_HEIGHT) as i32)), GRAY);
        assert_eq!(canvas.pixel(Point::new(5, FOOTER_TOP as i32)), GRAY);
        assert_ne!(canvas.pixel(Point::new(50, (HEADER_HEIGHT + READING_CELL_HEIGHT) as i32)), GRAY, "Cell divider is right column only");
    }
}
