//! Application configuration constants.
//!
//! Layout values are derived at compile time from the screen size so widgets
//! never recompute them per frame. Timing that needs `std::time::Duration`
//! lives in the simulator crate; here it is plain milliseconds.

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels.
pub const SCREEN_WIDTH: u32 = 320;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 240;

// =============================================================================
// Timing Configuration
// =============================================================================

/// Delay between simulation ticks, measured from the end of the previous tick.
pub const TICK_INTERVAL_MS: u64 = 2_000;

// =============================================================================
// Pre-computed Layout Constants
// =============================================================================

/// Header bar height in pixels.
pub const HEADER_HEIGHT: u32 = 26;

/// Height of the footer holding the stream buttons and hint line.
pub const FOOTER_HEIGHT: u32 = 44;

/// Top edge of the footer.
pub const FOOTER_TOP: u32 = SCREEN_HEIGHT - FOOTER_HEIGHT;

/// X where the status column ends and the readings column starts.
pub const PANEL_SPLIT_X: u32 = SCREEN_WIDTH / 2;

/// Number of status pills in the left column.
pub const STATUS_ROWS: u32 = 6;

/// Height of one status row (caption line + pill line).
pub const STATUS_ROW_HEIGHT: u32 = (FOOTER_TOP - HEADER_HEIGHT) / STATUS_ROWS;

/// Height of one reading cell (temperature on top, humidity below).
pub const READING_CELL_HEIGHT: u32 = (FOOTER_TOP - HEADER_HEIGHT) / 2;

/// Screen center X coordinate.
pub const CENTER_X: i32 = (SCREEN_WIDTH / 2) as i32;

const _: () = assert!(HEADER_HEIGHT < FOOTER_TOP);
const _: () = assert!(STATUS_ROW_HEIGHT >= 24);
const _: () = assert!(READING_CELL_HEIGHT >= 60);
