//! Clipboard sink contract and the transient "copied" indicator.

use crate::error::ClipboardError;

/// How long the copied indicator stays on after a successful write.
pub const COPIED_WINDOW_MS: f64 = 2000.0;

/// External clipboard write capability.
pub trait ClipboardSink {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CopyIndicator {
    until_ms: Option<f64>,
}

impl CopyIndicator {
    pub fn activate(&mut self, now_ms: f64) {
        self.until_ms = Some(now_ms + COPIED_WINDOW_MS);
    }

    pub fn is_active(&self, now_ms: f64) -> bool {
        matches!(self.until_ms, Some(until) if now_ms < until)
    }
}
