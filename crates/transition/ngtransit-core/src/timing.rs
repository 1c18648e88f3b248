//! Timing parameters and the easing catalog.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque easing token: a CSS keyword or a `cubic-bezier(...)` literal.
/// Not validated numerically; it is copied verbatim into CSS and generated code.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Easing(String);

impl Easing {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the token is one of the entries in [`EASINGS`].
    pub fn is_cataloged(&self) -> bool {
        EASINGS.iter().any(|e| e.value == self.0)
    }
}

impl From<&str> for Easing {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Easing {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Entry of the easing picker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct EasingOption {
    pub label: &'static str,
    pub value: &'static str,
}

const fn opt(value: &'static str) -> EasingOption {
    EasingOption {
        label: value,
        value,
    }
}

/// Easing curves offered by the picker, in display order.
pub const EASINGS: [EasingOption; 8] = [
    opt("ease"),
    opt("ease-in"),
    opt("ease-out"),
    opt("ease-in-out"),
    opt("linear"),
    opt("cubic-bezier(.4,0,.2,1)"),
    opt("cubic-bezier(.6,.04,.98,.34)"),
    opt("cubic-bezier(.08,.82,.17,1)"),
];

/// Duration, delay and easing of one transition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Timing {
    pub duration_ms: u32,
    pub delay_ms: u32,
    pub easing: Easing,
}

impl Timing {
    pub fn new(duration_ms: u32, delay_ms: u32, easing: impl Into<Easing>) -> Self {
        Self {
            duration_ms,
            delay_ms,
            easing: easing.into(),
        }
    }

    /// Nominal run length: duration plus delay.
    #[inline]
    pub fn total_ms(&self) -> u32 {
        self.duration_ms.saturating_add(self.delay_ms)
    }

    /// Angular `animate()` timing literal: `<duration>ms[ <delay>ms] <easing>`.
    /// The delay clause is omitted iff the delay is zero.
    pub fn literal(&self) -> String {
        if self.delay_ms > 0 {
            format!("{}ms {}ms {}", self.duration_ms, self.delay_ms, self.easing)
        } else {
            format!("{}ms {}", self.duration_ms, self.easing)
        }
    }

    /// CSS `transition` shorthand applied to the preview while animating.
    pub fn css_transition(&self) -> String {
        format!(
            "all {}ms {} {}ms",
            self.duration_ms, self.easing, self.delay_ms
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_omits_zero_delay() {
        assert_eq!(Timing::new(400, 0, "ease-out").literal(), "400ms ease-out");
        assert_eq!(
            Timing::new(400, 150, "linear").literal(),
            "400ms 150ms linear"
        );
    }

    #[test]
    fn css_transition_always_states_delay() {
        assert_eq!(
            Timing::new(300, 0, "ease-in").css_transition(),
            "all 300ms ease-in 0ms"
        );
    }

    #[test]
    fn catalog_lookup() {
        assert!(Easing::from("ease-in-out").is_cataloged());
        assert!(!Easing::from("steps(4)").is_cataloged());
    }
}
