//! Low-level drawing primitives shared across widgets.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, PrimitiveStyleBuilder, Rectangle};
use embedded_graphics::text::Text;

use crate::colors::{BUTTON_BG, GRAY, WHITE, tone_color, tone_text_color};
use crate::layout::PILL_HEIGHT;
use crate::simulation::Trend;
use crate::styles::{CENTERED, LABEL_CHAR_WIDTH, LABEL_FONT, LABEL_STYLE_WHITE};
use crate::view::Tone;

/// Horizontal padding inside a pill, both sides together.
const PILL_PADDING: u32 = 8;

const BUTTON_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyleBuilder::new()
    .fill_color(BUTTON_BG)
    .stroke_color(GRAY)
    .stroke_width(1)
    .build();

/// Width of a pill showing `text`.
#[inline]
pub fn pill_width(text: &str) -> u32 { text.chars().count() as u32 * LABEL_CHAR_WIDTH + PILL_PADDING }

/// Draw a status pill with its top-left corner at `top_left`.
///
/// Returns the pill rectangle so callers can place things next to it. An
/// unwritten field (empty text, no tone) draws nothing.
pub fn draw_pill<D>(
    display: &mut D,
    top_left: Point,
    text: &str,
    tone: Option<Tone>,
) -> Rectangle
where
    D: DrawTarget<Color = Rgb565>,
{
    let rect = Rectangle::new(top_left, Size::new(pill_width(text), PILL_HEIGHT));
    if text.is_empty() && tone.is_none() {
        return rect;
    }

    let (fill, text_color) = match tone {
        Some(tone) => (tone_color(tone), tone_text_color(tone)),
        None => (GRAY, WHITE),
    };

    rect.into_styled(PrimitiveStyle::with_fill(fill)).draw(display).ok();
    Text::with_text_style(text, rect.center(), MonoTextStyle::new(LABEL_FONT, text_color), CENTERED)
        .draw(display)
        .ok();
    rect
}

/// Draw a trend arrow centred on (x, y): up, down, or a flat dash.
pub fn draw_trend_arrow<D>(
    display: &mut D,
    x: i32,
    y: i32,
    trend: Trend,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let arrow_style = PrimitiveStyle::with_stroke(color, 1);
    match trend {
        Trend::Up => {
            Line::new(Point::new(x, y + 4), Point::new(x, y - 4))
                .into_styled(arrow_style)
                .draw(display)
                .ok();
            Line::new(Point::new(x - 3, y - 1), Point::new(x, y - 4))
                .into_styled(arrow_style)
                .draw(display)
                .ok();
            Line::new(Point::new(x + 3, y - 1), Point::new(x, y - 4))
                .into_styled(arrow_style)
                .draw(display)
                .ok();
        }
        Trend::Down => {
            Line::new(Point::new(x, y - 4), Point::new(x, y + 4))
                .into_styled(arrow_style)
                .draw(display)
                .ok();
            Line::new(Point::new(x - 3, y + 1), Point::new(x, y + 4))
                .into_styled(arrow_style)
                .draw(display)
                .ok();
            Line::new(Point::new(x + 3, y + 1), Point::new(x, y + 4))
                .into_styled(arrow_style)
                .draw(display)
                .ok();
        }
        Trend::Flat => {
            Line::new(Point::new(x - 4, y), Point::new(x + 4, y))
                .into_styled(arrow_style)
                .draw(display)
                .ok();
        }
    }
}

/// Draw a labelled push button.
pub fn draw_button<D>(
    display: &mut D,
    rect: Rectangle,
    label: &str,
) where
    D: DrawTarget<Color = Rgb565>,
{
    rect.into_styled(BUTTON_STYLE).draw(display).ok();
    Text::with_text_style(label, rect.center(), LABEL_STYLE_WHITE, CENTERED)
        .draw(display)
        .ok();
}
