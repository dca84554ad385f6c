//! Modal dialog state and the controls that toggle it.
//!
//! Both dashboard buttons open the same "Camera disconnected" dialog; the
//! backdrop and the confirm button close it. There is no other state than
//! visibility, so every control is idempotent.

/// Message shown in the hint line whenever a stream button is pressed.
pub const CAMERA_DISCONNECTED: &str = "Camera disconnected";

/// User inputs understood by the dashboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    /// "Start stream" button.
    Start,
    /// "Stop stream" button.
    Stop,
    /// Click on the dimmed area around the dialog.
    Backdrop,
    /// Dialog "OK" button.
    Confirm,
}

impl Control {
    /// Whether this control opens the overlay (as opposed to closing it).
    #[inline]
    pub const fn opens_overlay(self) -> bool { matches!(self, Self::Start | Self::Stop) }

    /// Short name, used in logs.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Stop => "stop",
            Self::Backdrop => "backdrop",
            Self::Confirm => "confirm",
        }
    }
}

/// Visibility of the single modal dialog.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Overlay {
    visible: bool,
}

impl Overlay {
    /// Create a hidden overlay.
    pub const fn new() -> Self { Self { visible: false } }

    #[inline]
    pub const fn is_visible(&self) -> bool { self.visible }

    /// Show the dialog.
    #[inline]
    pub const fn open(&mut self) { self.visible = true; }

    /// Hide the dialog.
    #[inline]
    pub const fn close(&mut self) { self.visible = false; }

    /// Apply a control and return the resulting visibility.
    pub const fn apply(
        &mut self,
        control: Control,
    ) -> bool {
        if control.opens_overlay() {
            self.open();
        } else {
            self.close();
        }
        self.visible
    }
}
