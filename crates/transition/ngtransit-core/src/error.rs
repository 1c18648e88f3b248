//! Error types for the simulator core.

use thiserror::Error;

/// Errors raised by editors and configuration loading.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum SimulatorError {
    /// Style key outside of opacity/x/y/scale/rotate.
    #[error("unknown style field: {key}")]
    UnknownField { key: String },

    #[error("unknown preset: {name}")]
    UnknownPreset { name: String },

    #[error("config parse error: {reason}")]
    Config { reason: String },
}

/// Failure reported by a clipboard sink. Never escapes the session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("clipboard write failed: {reason}")]
pub struct ClipboardError {
    pub reason: String,
}

impl ClipboardError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = core::result::Result<T, SimulatorError>;
