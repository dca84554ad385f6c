//! Pre-computed static text styles.
//!
//! `MonoTextStyle` and `TextStyle` are `const` so widgets reference them
//! directly instead of building a style per draw call. Value text uses the
//! ISO-8859-1 variant of the 10x20 font because readings carry a `°` sign.
//!
//! Pill text color depends on the tone, so [`LABEL_FONT`] is exposed for
//! `MonoTextStyle::new(LABEL_FONT, color)`.

use embedded_graphics::{
    mono_font::{MonoFont, MonoTextStyle, ascii::FONT_6X10, iso_8859_1::FONT_10X20},
    pixelcolor::Rgb565,
    text::{Alignment, Baseline, TextStyle, TextStyleBuilder},
};
use profont::PROFONT_14_POINT;

use crate::colors::{CAPTION, WHITE};

// =============================================================================
// Text Alignment Styles
// =============================================================================

/// Centered horizontally and vertically. Used for pills, buttons and the header.
pub const CENTERED: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Middle)
    .build();

/// Left-aligned, vertically centered on the anchor point.
pub const LEFT_MIDDLE: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Left)
    .baseline(Baseline::Middle)
    .build();

/// Left-aligned, anchored at the top edge.
pub const LEFT_TOP: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Left)
    .baseline(Baseline::Top)
    .build();

// =============================================================================
// Font References (for dynamic color styles)
// =============================================================================

/// Small label font (6x10 pixels).
pub const LABEL_FONT: &MonoFont = &FONT_6X10;

/// Width of one label glyph, used to size pills.
pub const LABEL_CHAR_WIDTH: u32 = 6;

// =============================================================================
// Pre-computed Text Styles
// =============================================================================

/// Small white text.
pub const LABEL_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, WHITE);

/// Small gray text for captions above pills and values.
pub const CAPTION_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, CAPTION);

/// Header title (`ProFont` 14pt).
pub const TITLE_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_14_POINT, WHITE);

/// Large white text for readings.
pub const VALUE_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_10X20, WHITE);
