//! Angular trigger code generation.
//!
//! `generate` is a pure function of the [`TransitionConfig`]: it emits only the
//! properties that differ between `from` and `to`, and equal inputs always produce
//! byte-identical text.

use crate::style::{format_number, rotate_part, scale_part, translate_part, StyleSnapshot};
use crate::transition::{TransitionConfig, TriggerMode};

/// Import statement the generated trigger depends on.
pub const IMPORT_LINE: &str =
    "import { trigger, state, style, animate, transition } from '@angular/animations';";

/// Body emitted in place of an empty style block.
pub const NO_CHANGE: &str = "      /* no change */";

const DECL_INDENT: &str = "      ";

/// Declarations for one side of the diff, already indented.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyleDiff {
    pub from: Vec<String>,
    pub to: Vec<String>,
}

impl StyleDiff {
    /// Compute the declarations that change between `from` and `to`.
    ///
    /// Transform components are grouped into a single `transform` declaration in
    /// the order translate, scale, rotate.
    pub fn between(from: &StyleSnapshot, to: &StyleSnapshot) -> Self {
        let mut diff = StyleDiff::default();
        if from.opacity != to.opacity {
            diff.from.push(format!(
                "{DECL_INDENT}opacity: {}",
                format_number(from.opacity)
            ));
            diff.to
                .push(format!("{DECL_INDENT}opacity: {}", format_number(to.opacity)));
        }

        let mut from_t: Vec<String> = Vec::new();
        let mut to_t: Vec<String> = Vec::new();
        if from.x != to.x || from.y != to.y {
            from_t.push(translate_part(from));
            to_t.push(translate_part(to));
        }
        if from.scale != to.scale {
            from_t.push(scale_part(from));
            to_t.push(scale_part(to));
        }
        if from.rotate != to.rotate {
            from_t.push(rotate_part(from));
            to_t.push(rotate_part(to));
        }
        if !from_t.is_empty() {
            diff.from
                .push(format!("{DECL_INDENT}transform: {}", from_t.join(" ")));
            diff.to
                .push(format!("{DECL_INDENT}transform: {}", to_t.join(" ")));
        }
        diff
    }

    pub fn is_empty(&self) -> bool {
        self.from.is_empty()
    }

    pub fn from_block(&self) -> String {
        block(&self.from)
    }

    pub fn to_block(&self) -> String {
        block(&self.to)
    }
}

fn block(decls: &[String]) -> String {
    if decls.is_empty() {
        NO_CHANGE.to_string()
    } else {
        decls.join(",\n")
    }
}

/// Generate the trigger definition for `cfg`.
pub fn generate(cfg: &TransitionConfig) -> String {
    let diff = StyleDiff::between(&cfg.from, &cfg.to);
    let fs = diff.from_block();
    let ts = diff.to_block();
    let timing = cfg.timing.literal();
    let name = &cfg.trigger_name;

    match cfg.mode {
        TriggerMode::EnterLeave => format!(
            "trigger('{name}', [\n  transition(':enter', [\n    style({{\n{fs}\n    }}),\n    animate('{timing}', style({{\n{ts}\n    }}))\n  ]),\n  transition(':leave', [\n    animate('{timing}', style({{\n{fs}\n    }}))\n  ])\n])"
        ),
        TriggerMode::StateToggle => format!(
            "trigger('{name}', [\n  state('hidden', style({{\n{fs}\n  }})),\n  state('visible', style({{\n{ts}\n  }})),\n  transition('hidden => visible', [\n    animate('{timing}')\n  ]),\n  transition('visible => hidden', [\n    animate('{timing}')\n  ])\n])"
        ),
    }
}

/// Component and template snippet showing where the trigger goes.
pub fn usage_snippet(trigger_name: &str, mode: TriggerMode) -> String {
    let binding = match mode {
        TriggerMode::EnterLeave => "",
        TriggerMode::StateToggle => "=\"state\"",
    };
    format!(
        "@Component({{\n  animations: [ /* paste trigger here */ ]\n}})\n\n// In template:\n<div [@{trigger_name}]{binding}> ... </div>"
    )
}
