//! Render state tracking for display updates.
//!
//! Readings only change every tick, so front ends redraw on demand instead of
//! every frame:
//!
//! | Element | Update Frequency | Strategy |
//! |---------|------------------|----------|
//! | Static chrome (header, dividers) | First frame / after modal close | Draw-once tracking |
//! | Fields and pills | When the view is dirty | Redraw all fields |
//! | Modal | While visible, when dirty | Drawn last, over everything |
//!
//! # Modal Cleanup
//!
//! The modal backdrop covers the whole screen. When it closes the display must
//! be cleared and the chrome redrawn, otherwise backdrop pixels remain.

/// Tracks what needs drawing on the next frame.
pub struct RenderState {
    /// Whether header and dividers are on screen.
    chrome_drawn: bool,

    /// Overlay visibility seen on the previous frame.
    prev_overlay_visible: bool,

    /// Whether the overlay closed this frame (need full clear).
    overlay_just_closed: bool,

    /// Whether this is the first frame.
    first_frame: bool,
}

impl RenderState {
    /// Create a new render state for first frame.
    pub const fn new() -> Self {
        Self {
            chrome_drawn: false,
            prev_overlay_visible: false,
            overlay_just_closed: false,
            first_frame: true,
        }
    }

    /// Record this frame's overlay visibility.
    pub const fn update_overlay(
        &mut self,
        visible: bool,
    ) {
        if self.prev_overlay_visible && !visible {
            self.overlay_just_closed = true;
            self.chrome_drawn = false;
        }
        self.prev_overlay_visible = visible;
    }

    /// Whether the display must be cleared before drawing this frame.
    #[inline]
    pub const fn needs_clear(&self) -> bool { self.first_frame || self.overlay_just_closed }

    /// Whether header and dividers need drawing.
    #[inline]
    pub const fn need_chrome(&self) -> bool { !self.chrome_drawn || self.first_frame }

    #[inline]
    pub const fn mark_chrome_drawn(&mut self) { self.chrome_drawn = true; }

    #[inline]
    pub const fn overlay_just_closed(&self) -> bool { self.overlay_just_closed }

    #[inline]
    pub const fn is_first_frame(&self) -> bool { self.first_frame }

    /// Call at end of frame to reset per-frame state.
    pub const fn end_frame(&mut self) {
        self.first_frame = false;
        self.overlay_just_closed = false;
    }
}

impl Default for RenderState {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Unit Tests
// =============================================================================
