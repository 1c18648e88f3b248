//! Built-in preset catalog.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SimulatorError};
use crate::style::StyleSnapshot;
use crate::timing::{Easing, Timing};

/// Immutable catalog entry. Applying it overwrites from/to/timing at once.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    pub name: String,
    pub from: StyleSnapshot,
    pub to: StyleSnapshot,
    pub duration_ms: u32,
    pub delay_ms: u32,
    pub easing: Easing,
}

impl Preset {
    pub fn timing(&self) -> Timing {
        Timing {
            duration_ms: self.duration_ms,
            delay_ms: self.delay_ms,
            easing: self.easing.clone(),
        }
    }
}

const fn snap(opacity: f64, x: f64, y: f64, scale: f64, rotate: f64) -> StyleSnapshot {
    StyleSnapshot {
        opacity,
        x,
        y,
        scale,
        rotate,
    }
}

const VISIBLE: StyleSnapshot = snap(1.0, 0.0, 0.0, 1.0, 0.0);
const HIDDEN: StyleSnapshot = snap(0.0, 0.0, 0.0, 1.0, 0.0);

fn preset(
    name: &str,
    from: StyleSnapshot,
    to: StyleSnapshot,
    duration_ms: u32,
    easing: &str,
) -> Preset {
    Preset {
        name: name.to_string(),
        from,
        to,
        duration_ms,
        delay_ms: 0,
        easing: Easing::from(easing),
    }
}

static PRESETS: Lazy<Vec<Preset>> = Lazy::new(|| {
    vec![
        preset("Fade In", HIDDEN, VISIBLE, 300, "ease-in"),
        preset("Fade Out", VISIBLE, HIDDEN, 300, "ease-out"),
        preset("Slide Left", snap(0.0, -100.0, 0.0, 1.0, 0.0), VISIBLE, 400, "ease-out"),
        preset("Slide Right", snap(0.0, 100.0, 0.0, 1.0, 0.0), VISIBLE, 400, "ease-out"),
        preset("Slide Up", snap(0.0, 0.0, 40.0, 1.0, 0.0), VISIBLE, 400, "ease-out"),
        preset("Slide Down", snap(0.0, 0.0, -40.0, 1.0, 0.0), VISIBLE, 400, "ease-out"),
        preset(
            "Scale In",
            snap(0.0, 0.0, 0.0, 0.5, 0.0),
            VISIBLE,
            350,
            "cubic-bezier(.4,0,.2,1)",
        ),
        preset("Scale Out", VISIBLE, snap(0.0, 0.0, 0.0, 1.2, 0.0), 250, "ease-in"),
        preset(
            "Rotate In",
            snap(0.0, 0.0, 0.0, 0.8, -15.0),
            VISIBLE,
            500,
            "cubic-bezier(.08,.82,.17,1)",
        ),
        preset(
            "Bounce In",
            snap(0.0, 0.0, 0.0, 0.3, 0.0),
            VISIBLE,
            600,
            "cubic-bezier(.08,.82,.17,1)",
        ),
    ]
});

/// All presets in display order.
pub fn presets() -> &'static [Preset] {
    &PRESETS
}

/// Look up a preset by its exact display name.
pub fn find_preset(name: &str) -> Result<&'static Preset> {
    PRESETS
        .iter()
        .find(|p| p.name == name)
        .ok_or_else(|| SimulatorError::UnknownPreset {
            name: name.to_string(),
        })
}
