//! Color constants for the sensor dashboard.
//!
//! Standard colors come from the `RgbColor` trait constants; the pill and
//! panel shades are custom RGB565 values (5 bits red, 6 bits green, 5 bits
//! blue).

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

use crate::view::Tone;

// =============================================================================
// Standard Colors (from RgbColor trait)
// =============================================================================

/// Pure black. Screen background and text on light pills.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white. Text on dark backgrounds.
pub const WHITE: Rgb565 = Rgb565::WHITE;

// =============================================================================
// Custom Colors (application-specific)
// =============================================================================

/// Green "ok" pill.
pub const PILL_OK: Rgb565 = Rgb565::new(4, 44, 10);

/// Amber "warn" pill.
pub const PILL_WARN: Rgb565 = Rgb565::new(31, 40, 0);

/// Red "bad" pill.
pub const PILL_BAD: Rgb565 = Rgb565::new(28, 8, 6);

/// Header bar background.
pub const HEADER_BG: Rgb565 = Rgb565::new(2, 12, 12);

/// Dark gray for divider lines.
pub const GRAY: Rgb565 = Rgb565::new(8, 16, 8);

/// Light gray for captions.
pub const CAPTION: Rgb565 = Rgb565::new(20, 42, 20);

/// Stream button face.
pub const BUTTON_BG: Rgb565 = Rgb565::new(6, 14, 10);

/// Dimmed backdrop behind the modal.
pub const BACKDROP: Rgb565 = Rgb565::new(3, 6, 3);

/// Modal dialog body.
pub const DIALOG_BG: Rgb565 = Rgb565::new(5, 10, 8);

/// Fill color of a pill with the given tone.
#[inline]
pub const fn tone_color(tone: Tone) -> Rgb565 {
    match tone {
        Tone::Ok => PILL_OK,
        Tone::Warn => PILL_WARN,
        Tone::Bad => PILL_BAD,
    }
}

/// Text color readable on a pill of the given tone.
#[inline]
pub const fn tone_text_color(tone: Tone) -> Rgb565 {
    match tone {
        Tone::Warn => BLACK,
        Tone::Ok | Tone::Bad => WHITE,
    }
}
