//! Style snapshots and the CSS transform string shared by the preview and the generator.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SimulatorError;

/// Point-in-time value of every animatable property.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StyleSnapshot {
    pub opacity: f64,
    /// Horizontal translation in px.
    pub x: f64,
    /// Vertical translation in px.
    pub y: f64,
    pub scale: f64,
    /// Rotation in degrees.
    pub rotate: f64,
}

impl StyleSnapshot {
    /// Fully visible, untransformed.
    pub const IDENTITY: StyleSnapshot = StyleSnapshot {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
        rotate: 0.0,
    };

    pub fn get(&self, field: StyleField) -> f64 {
        match field {
            StyleField::Opacity => self.opacity,
            StyleField::X => self.x,
            StyleField::Y => self.y,
            StyleField::Scale => self.scale,
            StyleField::Rotate => self.rotate,
        }
    }

    /// Return a copy with one field replaced.
    pub fn with(mut self, field: StyleField, value: f64) -> Self {
        match field {
            StyleField::Opacity => self.opacity = value,
            StyleField::X => self.x = value,
            StyleField::Y => self.y = value,
            StyleField::Scale => self.scale = value,
            StyleField::Rotate => self.rotate = value,
        }
        self
    }

    #[inline]
    pub fn has_translate(&self) -> bool {
        self.x != 0.0 || self.y != 0.0
    }

    #[inline]
    pub fn has_scale(&self) -> bool {
        self.scale != 1.0
    }

    #[inline]
    pub fn has_rotate(&self) -> bool {
        self.rotate != 0.0
    }
}

impl Default for StyleSnapshot {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Editable keys of a [`StyleSnapshot`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleField {
    Opacity,
    X,
    Y,
    Scale,
    Rotate,
}

impl StyleField {
    pub const ALL: [StyleField; 5] = [
        StyleField::Opacity,
        StyleField::X,
        StyleField::Y,
        StyleField::Scale,
        StyleField::Rotate,
    ];

    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Opacity => "opacity",
            Self::X => "x",
            Self::Y => "y",
            Self::Scale => "scale",
            Self::Rotate => "rotate",
        }
    }
}

impl FromStr for StyleField {
    type Err = SimulatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StyleField::ALL
            .into_iter()
            .find(|f| f.name() == s)
            .ok_or_else(|| SimulatorError::UnknownField {
                key: s.to_string(),
            })
    }
}

impl fmt::Display for StyleField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Print a number the way JavaScript's `Number#toString` does for slider values:
/// integers without a fraction and negative zero as `0`.
pub fn format_number(v: f64) -> String {
    if v == 0.0 {
        // also catches -0.0
        return "0".to_string();
    }
    format!("{v}")
}

pub(crate) fn translate_part(s: &StyleSnapshot) -> String {
    format!(
        "translate({}px, {}px)",
        format_number(s.x),
        format_number(s.y)
    )
}

pub(crate) fn scale_part(s: &StyleSnapshot) -> String {
    format!("scale({})", format_number(s.scale))
}

pub(crate) fn rotate_part(s: &StyleSnapshot) -> String {
    format!("rotate({}deg)", format_number(s.rotate))
}

/// Inline CSS transform for a snapshot.
///
/// Parts are emitted in the fixed order translate, scale, rotate and only when they
/// differ from their identity value. Returns `none` when nothing is transformed.
pub fn transform_string(s: &StyleSnapshot) -> String {
    let mut parts: Vec<String> = Vec::with_capacity(3);
    if s.has_translate() {
        parts.push(translate_part(s));
    }
    if s.has_scale() {
        parts.push(scale_part(s));
    }
    if s.has_rotate() {
        parts.push(rotate_part(s));
    }
    if parts.is_empty() {
        "none".to_string()
    } else {
        parts.join(" ")
    }
}
