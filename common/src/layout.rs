//! Widget geometry and click hit-testing.
//!
//! ```text
//! ┌──────────────────────────────────────┐
//! │            SENSOR MONITOR            │  header
//! ├───────────────────┬──────────────────┤
//! │ SYSTEM            │ TEMPERATURE      │
//! │ [CALIBRATING]     │  11.3 °C  [flat] │
//! │ CAMERA CAL        │                  │
//! │ [CONNECTION LOST] ├──────────────────┤
//! │ ...               │ HUMIDITY         │
//! │                   │  72 %     [up]   │
//! ├───────────────────┴──────────────────┤
//! │ [START] [STOP]     Camera disconn... │  footer
//! └──────────────────────────────────────┘
//! ```
//!
//! The modal dialog sits centred over everything with a full-screen backdrop.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{ContainsPoint, Rectangle};

use crate::config::{
    FOOTER_TOP,
    HEADER_HEIGHT,
    PANEL_SPLIT_X,
    READING_CELL_HEIGHT,
    SCREEN_HEIGHT,
    SCREEN_WIDTH,
    STATUS_ROW_HEIGHT,
};
use crate::overlay::Control;
use crate::view::Field;

// =============================================================================
// Status Column
// =============================================================================

/// Pills in the left column, top to bottom.
pub const STATUS_FIELDS: [Field; 6] = [
    Field::SystemStatus,
    Field::CameraStatus,
    Field::AlertStatus,
    Field::VisualConfirmed,
    Field::AreaFlag,
    Field::LineFlag,
];

/// Left margin of captions and pills.
pub const STATUS_MARGIN_X: i32 = 6;

/// Height of a pill.
pub const PILL_HEIGHT: u32 = 14;

/// Top edge of status row `row`.
#[inline]
pub const fn status_row_top(row: usize) -> i32 { (HEADER_HEIGHT + row as u32 * STATUS_ROW_HEIGHT) as i32 }

// =============================================================================
// Readings Column
// =============================================================================

/// Reading cells, top to bottom: (value field, trend field).
pub const READING_FIELDS: [(Field, Field); 2] = [
    (Field::Temperature, Field::TemperatureTrend),
    (Field::Humidity, Field::HumidityTrend),
];

/// Left edge of the readings column.
pub const READING_X: i32 = PANEL_SPLIT_X as i32;

/// Width of the readings column.
pub const READING_WIDTH: u32 = SCREEN_WIDTH - PANEL_SPLIT_X;

/// Top edge of reading cell `index`.
#[inline]
pub const fn reading_cell_top(index: usize) -> i32 { (HEADER_HEIGHT + index as u32 * READING_CELL_HEIGHT) as i32 }

// =============================================================================
// Footer
// =============================================================================

/// "START" stream button.
pub const START_BUTTON: Rectangle = Rectangle::new(Point::new(8, FOOTER_TOP as i32 + 8), Size::new(68, 28));

/// "STOP" stream button.
pub const STOP_BUTTON: Rectangle = Rectangle::new(Point::new(84, FOOTER_TOP as i32 + 8), Size::new(68, 28));

/// Left edge of the hint line (vertically centred in the footer).
pub const HINT_POS: Point = Point::new(READING_X + 8, FOOTER_TOP as i32 + 22);

// =============================================================================
// Modal
// =============================================================================

/// Whole-screen area dimmed behind the dialog.
pub const MODAL_BACKDROP: Rectangle = Rectangle::new(Point::zero(), Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));

/// Dialog box.
pub const MODAL_DIALOG: Rectangle = Rectangle::new(Point::new(60, 65), Size::new(200, 110));

/// "OK" button inside the dialog.
pub const MODAL_OK_BUTTON: Rectangle = Rectangle::new(Point::new(130, 141), Size::new(60, 24));

// =============================================================================
// Hit Testing
// =============================================================================

/// Map a click at `point` to a control.
///
/// While the modal is shown it captures every click: the OK button confirms,
/// anything outside the dialog hits the backdrop, and the dialog body itself
/// does nothing. Otherwise only the two stream buttons react.
pub fn hit_test(
    point: Point,
    overlay_visible: bool,
) -> Option<Control> {
    if overlay_visible {
        if MODAL_OK_BUTTON.contains(point) {
            Some(Control::Confirm)
        } else if MODAL_DIALOG.contains(point) {
            None
        } else {
            Some(Control::Backdrop)
        }
    } else if START_BUTTON.contains(point) {
        Some(Control::Start)
    } else if STOP_BUTTON.contains(point) {
        Some(Control::Stop)
    } else {
        None
    }
}
