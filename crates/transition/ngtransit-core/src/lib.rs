//! ngtransit core (engine-agnostic)
//!
//! Models an interactive Angular animation simulator: a transition player that
//! rehearses a `from` → `to` CSS transition frame by frame, and a generator that
//! turns the same configuration into an `@angular/animations` trigger.
//! Hosts (the wasm adapter, tests) provide scheduling through [`FrameHost`] and
//! clipboard access through [`ClipboardSink`].

pub mod clipboard;
pub mod codegen;
pub mod config;
pub mod error;
pub mod player;
pub mod preset;
pub mod session;
pub mod style;
pub mod timing;
pub mod transition;

// Re-exports for consumers (adapters)
pub use clipboard::{ClipboardSink, CopyIndicator, COPIED_WINDOW_MS};
pub use codegen::{generate, usage_snippet, StyleDiff, IMPORT_LINE, NO_CHANGE};
pub use config::{Config, FieldRange, Limits};
pub use error::{ClipboardError, SimulatorError};
pub use player::{
    FrameHandle, FrameHost, PhaseKind, Player, RenderStyle, TimerHandle, PREPARE_FRAME_COUNT,
    SETTLE_MARGIN_MS,
};
pub use preset::{find_preset, presets, Preset};
pub use session::{Endpoint, Session, SessionSnapshot};
pub use style::{format_number, transform_string, StyleField, StyleSnapshot};
pub use timing::{Easing, EasingOption, Timing, EASINGS};
pub use transition::{TransitionConfig, TriggerMode};
