//! Named display fields and the surface the simulator writes them to.
//!
//! The simulator never draws anything itself. It pushes text (and, for pills,
//! a [`Tone`]) into a [`DisplaySurface`] keyed by [`Field`]. [`DashboardView`]
//! is the in-memory surface the widgets render from; front ends may wrap it to
//! log or mirror writes.
//!
//! Field identifiers are stable strings (`sysStatus`, `tempVal`, ...) so logs
//! and any external mirror can address the same slots.

use heapless::String;

// =============================================================================
// Field Identifiers
// =============================================================================

/// Number of named output fields (excluding the hint line and modal).
pub const FIELD_COUNT: usize = 10;

/// Maximum bytes stored per field.
pub const FIELD_TEXT_LEN: usize = 24;

/// Maximum bytes stored for the hint line.
pub const HINT_TEXT_LEN: usize = 32;

/// Identifier of the hint line.
pub const HINT_ID: &str = "streamHint";

/// Identifier of the modal dialog.
pub const MODAL_ID: &str = "modal";

/// Output fields of the dashboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    SystemStatus,
    CameraStatus,
    AlertStatus,
    VisualConfirmed,
    AreaFlag,
    LineFlag,
    Humidity,
    Temperature,
    HumidityTrend,
    TemperatureTrend,
}

impl Field {
    /// All fields in storage order.
    pub const ALL: [Self; FIELD_COUNT] = [
        Self::SystemStatus,
        Self::CameraStatus,
        Self::AlertStatus,
        Self::VisualConfirmed,
        Self::AreaFlag,
        Self::LineFlag,
        Self::Humidity,
        Self::Temperature,
        Self::HumidityTrend,
        Self::TemperatureTrend,
    ];

    /// Stable external identifier.
    pub const fn id(self) -> &'static str {
        match self {
            Self::SystemStatus => "sysStatus",
            Self::CameraStatus => "camStatus",
            Self::AlertStatus => "alertStatus",
            Self::VisualConfirmed => "visualConfirmed",
            Self::AreaFlag => "areaFlag",
            Self::LineFlag => "lineFlag",
            Self::Humidity => "humVal",
            Self::Temperature => "tempVal",
            Self::HumidityTrend => "humTrend",
            Self::TemperatureTrend => "tempTrend",
        }
    }

    /// Human-readable caption drawn next to the field.
    pub const fn caption(self) -> &'static str {
        match self {
            Self::SystemStatus => "SYSTEM",
            Self::CameraStatus => "CAMERA CAL",
            Self::AlertStatus => "ALERT",
            Self::VisualConfirmed => "VISUAL CONFIRMED",
            Self::AreaFlag => "AREA INTRUSION",
            Self::LineFlag => "LINE CROSSING",
            Self::Humidity => "HUMIDITY",
            Self::Temperature => "TEMPERATURE",
            Self::HumidityTrend | Self::TemperatureTrend => "TREND",
        }
    }

    /// Index into per-field storage.
    #[inline]
    pub const fn index(self) -> usize { self as usize }
}

// =============================================================================
// Pill Tone
// =============================================================================

/// Styling class of a pill label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Ok,
    Warn,
    Bad,
}

impl Tone {
    /// CSS-style class name, used in logs.
    pub const fn class(self) -> &'static str {
        match self {
            Self::Ok => "pill-ok",
            Self::Warn => "pill-warn",
            Self::Bad => "pill-bad",
        }
    }
}

// =============================================================================
// Display Surface
// =============================================================================

/// Sink for everything the simulator shows.
pub trait DisplaySurface {
    /// Set a pill's text and tone.
    fn set_pill(
        &mut self,
        field: Field,
        text: &str,
        tone: Tone,
    );

    /// Set a plain text field.
    fn set_text(
        &mut self,
        field: Field,
        text: &str,
    );

    /// Replace the hint line.
    fn set_hint(
        &mut self,
        text: &str,
    );

    /// Show or hide the modal dialog.
    fn set_overlay_visible(
        &mut self,
        visible: bool,
    );
}

// =============================================================================
// Dashboard View
// =============================================================================

/// Current content of one field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldState {
    pub text: String<FIELD_TEXT_LEN>,
    /// `None` for plain text fields.
    pub tone: Option<Tone>,
}

/// In-memory display surface consumed by the widgets.
///
/// Tracks a dirty flag so front ends only redraw after something changed.
#[derive(Clone, Debug)]
pub struct DashboardView {
    fields: [FieldState; FIELD_COUNT],
    hint: String<HINT_TEXT_LEN>,
    overlay_visible: bool,
    dirty: bool,
}

impl DashboardView {
    /// Create an empty view. It starts dirty so the first frame is drawn.
    pub fn new() -> Self {
        Self {
            fields: Default::default(),
            hint: String::new(),
            overlay_visible: false,
            dirty: true,
        }
    }

    #[inline]
    pub fn field(
        &self,
        field: Field,
    ) -> &FieldState {
        &self.fields[field.index()]
    }

    /// Text of a field (empty until first written).
    #[inline]
    pub fn text(
        &self,
        field: Field,
    ) -> &str {
        self.field(field).text.as_str()
    }

    #[inline]
    pub fn tone(
        &self,
        field: Field,
    ) -> Option<Tone> {
        self.field(field).tone
    }

    #[inline]
    pub fn hint(&self) -> &str { self.hint.as_str() }

    #[inline]
    pub const fn overlay_visible(&self) -> bool { self.overlay_visible }

    /// Return whether anything changed since the last call, and clear the flag.
    pub const fn take_dirty(&mut self) -> bool {
        let dirty = self.dirty;
        self.dirty = false;
        dirty
    }

    fn write_field(
        &mut self,
        field: Field,
        text: &str,
        tone: Option<Tone>,
    ) {
        let mut next: String<FIELD_TEXT_LEN> = String::new();
        push_truncated(&mut next, text);

        let slot = &mut self.fields[field.index()];
        if slot.text != next || slot.tone != tone {
            slot.text = next;
            slot.tone = tone;
            self.dirty = true;
        }
    }
}

impl Default for DashboardView {
    fn default() -> Self { Self::new() }
}

impl DisplaySurface for DashboardView {
    fn set_pill(
        &mut self,
        field: Field,
        text: &str,
        tone: Tone,
    ) {
        self.write_field(field, text, Some(tone));
    }

    fn set_text(
        &mut self,
        field: Field,
        text: &str,
    ) {
        self.write_field(field, text, None);
    }

    fn set_hint(
        &mut self,
        text: &str,
    ) {
        if self.hint.as_str() != text {
            self.hint.clear();
            push_truncated(&mut self.hint, text);
            self.dirty = true;
        }
    }

    fn set_overlay_visible(
        &mut self,
        visible: bool,
    ) {
        if self.overlay_visible != visible {
            self.overlay_visible = visible;
            self.dirty = true;
        }
    }
}

/// Append as many whole characters of `text` as fit.
pub fn push_truncated<const N: usize>(
    s: &mut String<N>,
    text: &str,
) {
    for c in text.chars() {
        if s.push(c).is_err() {
            break;
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_ids_are_unique() {
        for (i, a) in Field::ALL.iter().enumerate() {
            for b in &Field::ALL[i + 1..] {
                assert_ne!(a.id(), b.id());
            }
        }
    }

    #[test]
    fn test_field_index_matches_order() {
        for (i, field) in Field::ALL.iter().enumerate() {
            assert_eq!(field.index(), i);
        }
    }

    #[test]
    fn test_field_ids() {
        assert_eq!(Field::SystemStatus.id(), "sysStatus");
        assert_eq!(Field::Temperature.id(), "tempVal");
        assert_eq!(Field::HumidityTrend.id(), "humTrend");
    }

    #[test]
    fn test_tone_classes() {
        assert_eq!(Tone::Ok.class(), "pill-ok");
        assert_eq!(Tone::Warn.class(), "pill-warn");
        assert_eq!(Tone::Bad.class(), "pill-bad");
    }

    #[test]
    fn test_view_starts_empty_and_dirty() {
        let mut view = DashboardView::new();
        assert_eq!(view.text(Field::Temperature), "");
        assert_eq!(view.tone(Field::SystemStatus), None);
        assert!(!view.overlay_visible());
        assert!(view.take_dirty(), "First frame must be drawn");
        assert!(!view.take_dirty());
    }

    #[test]
    fn test_set_pill_and_text() {
        let mut view = DashboardView::new();
        view.set_pill(Field::CameraStatus, "CONNECTION LOST", Tone::Bad);
        view.set_text(Field::Temperature, "11.3 °C");

        assert_eq!(view.text(Field::CameraStatus), "CONNECTION LOST");
        assert_eq!(view.tone(Field::CameraStatus), Some(Tone::Bad));
        assert_eq!(view.text(Field::Temperature), "11.3 °C");
        assert_eq!(view.tone(Field::Temperature), None);
    }

    #[test]
    fn test_unchanged_write_is_not_dirty() {
        let mut view = DashboardView::new();
        view.set_pill(Field::AlertStatus, "OFF", Tone::Ok);
        view.take_dirty();

        view.set_pill(Field::AlertStatus, "OFF", Tone::Ok);
        assert!(!view.take_dirty(), "Same text and tone should not mark dirty");

        view.set_pill(Field::AlertStatus, "OFF", Tone::Warn);
        assert!(view.take_dirty(), "Tone change should mark dirty");
    }

    #[test]
    fn test_overlay_and_hint_dirty_tracking() {
        let mut view = DashboardView::new();
        view.take_dirty();

        view.set_overlay_visible(false);
        assert!(!view.take_dirty());

        view.set_hint("Camera disconnected");
        view.set_overlay_visible(true);
        assert!(view.take_dirty());
        assert_eq!(view.hint(), "Camera disconnected");
        assert!(view.overlay_visible());
    }

    #[test]
    fn test_push_truncated_keeps_whole_chars() {
        let mut s: String<5> = String::new();
        push_truncated(&mut s, "12.5 °C");
        // "12.5 " fills the buffer; the two-byte '°' does not fit
        assert_eq!(s.as_str(), "12.5 ");
    }
}
