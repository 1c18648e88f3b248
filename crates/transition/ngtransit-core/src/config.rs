//! Session configuration: initial state and editor limits.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SimulatorError};
use crate::style::{StyleField, StyleSnapshot};
use crate::timing::Timing;
use crate::transition::TransitionConfig;

/// Top-level configuration. Every field falls back to its default when missing.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// State a fresh session starts in.
    pub initial: TransitionConfig,
    /// Ranges enforced by the field editors.
    pub limits: Limits,
}

impl Config {
    /// Parse and validate a JSON configuration.
    pub fn from_json(s: &str) -> Result<Self> {
        let cfg: Config = serde_json::from_str(s).map_err(|e| SimulatorError::Config {
            reason: e.to_string(),
        })?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject limits a clamp could not honor.
    pub fn validate(&self) -> Result<()> {
        self.limits.validate()
    }
}

/// Closed numeric interval.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FieldRange {
    pub min: f64,
    pub max: f64,
}

impl FieldRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Finite bounds with `min <= max`.
    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min <= self.max
    }

    /// Clamp `v` into the range; non-finite input maps to the lower bound.
    /// Inverted bounds are swapped rather than trusted.
    pub fn clamp(&self, v: f64) -> f64 {
        let lo = self.min.min(self.max);
        let hi = self.max.max(self.min);
        if !v.is_finite() || v < lo {
            lo
        } else if v > hi {
            hi
        } else {
            v
        }
    }
}

/// Editor domains, matching the slider bounds of the UI.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    pub opacity: FieldRange,
    pub x: FieldRange,
    pub y: FieldRange,
    pub scale: FieldRange,
    pub rotate: FieldRange,
    pub duration_ms: FieldRange,
    pub delay_ms: FieldRange,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            opacity: FieldRange::new(0.0, 1.0),
            x: FieldRange::new(-200.0, 200.0),
            y: FieldRange::new(-200.0, 200.0),
            scale: FieldRange::new(0.0, 2.0),
            rotate: FieldRange::new(-360.0, 360.0),
            duration_ms: FieldRange::new(50.0, 2000.0),
            delay_ms: FieldRange::new(0.0, 1000.0),
        }
    }
}

impl Limits {
    fn ranges(&self) -> [(&'static str, FieldRange); 7] {
        [
            ("opacity", self.opacity),
            ("x", self.x),
            ("y", self.y),
            ("scale", self.scale),
            ("rotate", self.rotate),
            ("duration_ms", self.duration_ms),
            ("delay_ms", self.delay_ms),
        ]
    }

    pub fn validate(&self) -> Result<()> {
        for (name, range) in self.ranges() {
            if !range.is_valid() {
                return Err(SimulatorError::Config {
                    reason: format!(
                        "limits.{name}: invalid range [{}, {}]",
                        range.min, range.max
                    ),
                });
            }
        }
        Ok(())
    }

    pub fn for_field(&self, field: StyleField) -> FieldRange {
        match field {
            StyleField::Opacity => self.opacity,
            StyleField::X => self.x,
            StyleField::Y => self.y,
            StyleField::Scale => self.scale,
            StyleField::Rotate => self.rotate,
        }
    }

    pub fn clamp_field(&self, field: StyleField, v: f64) -> f64 {
        let out = self.for_field(field).clamp(v);
        if out != v {
            warn!("{field} value {v} clamped to {out}");
        }
        out
    }

    /// Clamp every field of `s`.
    pub fn clamp_snapshot(&self, s: &StyleSnapshot) -> StyleSnapshot {
        StyleField::ALL
            .into_iter()
            .fold(*s, |acc, f| acc.with(f, self.clamp_field(f, s.get(f))))
    }

    /// Clamp duration and delay, keeping the easing.
    pub fn clamp_timing(&self, t: &Timing) -> Timing {
        Timing {
            duration_ms: self.clamp_duration(f64::from(t.duration_ms)),
            delay_ms: self.clamp_delay(f64::from(t.delay_ms)),
            easing: t.easing.clone(),
        }
    }

    pub fn clamp_duration(&self, ms: f64) -> u32 {
        clamp_ms("duration", self.duration_ms, ms)
    }

    pub fn clamp_delay(&self, ms: f64) -> u32 {
        clamp_ms("delay", self.delay_ms, ms)
    }
}

fn clamp_ms(what: &str, range: FieldRange, ms: f64) -> u32 {
    let out = range.clamp(ms).max(0.0).round();
    if out != ms {
        warn!("{what} {ms}ms clamped to {out}ms");
    }
    out as u32
}
