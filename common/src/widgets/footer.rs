//! Footer with the stream buttons and the hint line.

use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
    text::Text,
};

use super::primitives::draw_button;
use crate::colors::BLACK;
use crate::config::{FOOTER_HEIGHT, FOOTER_TOP, SCREEN_WIDTH};
use crate::layout::{HINT_POS, START_BUTTON, STOP_BUTTON};
use crate::styles::{LABEL_STYLE_WHITE, LEFT_MIDDLE};
use crate::view::DashboardView;

/// Footer area below its divider line.
const FOOTER_AREA: Rectangle = Rectangle::new(
    Point::new(0, FOOTER_TOP as i32 + 1),
    Size::new(SCREEN_WIDTH, FOOTER_HEIGHT - 1),
);

const CLEAR_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(BLACK);

pub fn draw_footer<D>(
    display: &mut D,
    view: &DashboardView,
) where
    D: DrawTarget<Color = Rgb565>,
{
    FOOTER_AREA.into_styled(CLEAR_STYLE).draw(display).ok();

    draw_button(display, START_BUTTON, "START");
    draw_button(display, STOP_BUTTON, "STOP");

    Text::with_text_style(view.hint(), HINT_POS, LABEL_STYLE_WHITE, LEFT_MIDDLE)
        .draw(display)
        .ok();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{BUTTON_BG, WHITE};
    use crate::view::DisplaySurface;
    use crate::widgets::canvas::Canvas;

    fn hint_band() -> Rectangle { Rectangle::new(HINT_POS - Point::new(0, 6), Size::new(150, 12)) }

    #[test]
    fn test_buttons_drawn() {
        let mut canvas = Canvas::new();
        draw_footer(&mut canvas, &DashboardView::new());

        assert_eq!(canvas.pixel(START_BUTTON.top_left + Point::new(2, 2)), BUTTON_BG);
        assert_eq!(canvas.pixel(STOP_BUTTON.top_left + Point::new(2, 2)), BUTTON_BG);
        assert_eq!(canvas.count_in(hint_band(), WHITE), 0, "No hint before a button press");
    }

    #[test]
    fn test_hint_line_drawn() {
        let mut view = DashboardView::new();
        view.set_hint("Camera disconnected");

        let mut canvas = Canvas::new();
        draw_footer(&mut canvas, &view);
        assert!(canvas.count_in(hint_band(), WHITE) > 0);
    }
}
