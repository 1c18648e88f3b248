//! The full configuration edited by the user and read by the generator and player.

use serde::{Deserialize, Serialize};

use crate::style::StyleSnapshot;
use crate::timing::Timing;

/// Shape of the emitted trigger.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TriggerMode {
    /// `:enter` / `:leave` transitions.
    #[default]
    EnterLeave,
    /// Named `hidden` / `visible` states with transitions between them.
    StateToggle,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionConfig {
    pub trigger_name: String,
    #[serde(default)]
    pub mode: TriggerMode,
    pub from: StyleSnapshot,
    pub to: StyleSnapshot,
    pub timing: Timing,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            trigger_name: "myAnimation".to_string(),
            mode: TriggerMode::EnterLeave,
            from: StyleSnapshot {
                opacity: 0.0,
                x: -60.0,
                y: 0.0,
                scale: 1.0,
                rotate: 0.0,
            },
            to: StyleSnapshot::IDENTITY,
            timing: Timing::new(400, 0, "ease-out"),
        }
    }
}
