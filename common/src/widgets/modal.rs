//! The "Camera disconnected" modal dialog.
//!
//! Drawn last, over everything: a full-screen backdrop, a bordered dialog
//! with a title, the hint text and an OK button.

use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{PrimitiveStyle, PrimitiveStyleBuilder},
    text::Text,
};

use super::primitives::draw_button;
use crate::colors::{BACKDROP, DIALOG_BG, PILL_BAD};
use crate::config::CENTER_X;
use crate::layout::{MODAL_BACKDROP, MODAL_DIALOG, MODAL_OK_BUTTON};
use crate::styles::{CENTERED, LABEL_STYLE_WHITE, TITLE_STYLE_WHITE};
use crate::view::DashboardView;

/// Dialog title.
pub const MODAL_TITLE: &str = "STREAM";

const BACKDROP_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(BACKDROP);

const DIALOG_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyleBuilder::new()
    .fill_color(DIALOG_BG)
    .stroke_color(PILL_BAD)
    .stroke_width(2)
    .build();

const TITLE_POS: Point = Point::new(CENTER_X, MODAL_DIALOG.top_left.y + 18);
const TEXT_POS: Point = Point::new(CENTER_X, MODAL_DIALOG.top_left.y + 48);

pub fn draw_modal<D>(
    display: &mut D,
    view: &DashboardView,
) where
    D: DrawTarget<Color = Rgb565>,
{
    MODAL_BACKDROP.into_styled(BACKDROP_FILL).draw(display).ok();
    MODAL_DIALOG.into_styled(DIALOG_STYLE).draw(display).ok();

    Text::with_text_style(MODAL_TITLE, TITLE_POS, TITLE_STYLE_WHITE, CENTERED)
        .draw(display)
        .ok();
    Text::with_text_style(view.hint(), TEXT_POS, LABEL_STYLE_WHITE, CENTERED)
        .draw(display)
        .ok();

    draw_button(display, MODAL_OK_BUTTON, "OK");
}
