//! Display surface decorator that logs every write.

use sensor_dashboard_common::view::{DisplaySurface, Field, HINT_ID, MODAL_ID, Tone};

/// Forwards to an inner surface, logging each write against its external id.
#[derive(Debug, Default)]
pub struct LoggingSurface<S> {
    inner: S,
    writes: u64,
}

impl<S: DisplaySurface> LoggingSurface<S> {
    pub const fn new(inner: S) -> Self { Self { inner, writes: 0 } }

    #[inline]
    pub const fn inner(&self) -> &S { &self.inner }

    #[inline]
    pub const fn inner_mut(&mut self) -> &mut S { &mut self.inner }

    /// Number of writes forwarded so far.
    #[cfg(test)]
    pub const fn writes(&self) -> u64 { self.writes }
}

impl<S: DisplaySurface> DisplaySurface for LoggingSurface<S> {
    fn set_pill(
        &mut self,
        field: Field,
        text: &str,
        tone: Tone,
    ) {
        self.writes += 1;
        log::debug!("[{}] #{} = {:?} [{}]", self.writes, field.id(), text, tone.class());
        self.inner.set_pill(field, text, tone);
    }

    fn set_text(
        &mut self,
        field: Field,
        text: &str,
    ) {
        self.writes += 1;
        log::debug!("[{}] #{} = {:?}", self.writes, field.id(), text);
        self.inner.set_text(field, text);
    }

    fn set_hint(
        &mut self,
        text: &str,
    ) {
        self.writes += 1;
        log::debug!("[{}] #{HINT_ID} = {text:?}", self.writes);
        self.inner.set_hint(text);
    }

    fn set_overlay_visible(
        &mut self,
        visible: bool,
    ) {
        self.writes += 1;
        log::debug!("[{}] #{MODAL_ID} {}", self.writes, if visible { "shown" } else { "hidden" });
        self.inner.set_overlay_visible(visible);
    }
}
