//! Session: the owned state record of one simulator.
//!
//! Holds the configuration, the active-preset marker, the player and the copy
//! indicator. Editors are plain record merges; playback calls are forwarded to
//! the [`Player`] together with the current configuration.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::clipboard::{ClipboardSink, CopyIndicator};
use crate::codegen::{generate, usage_snippet};
use crate::config::{Config, Limits};
use crate::error::Result;
use crate::player::{FrameHandle, FrameHost, PhaseKind, Player, RenderStyle, TimerHandle};
use crate::preset::{find_preset, Preset};
use crate::style::{transform_string, StyleField, StyleSnapshot};
use crate::timing::Easing;
use crate::transition::{TransitionConfig, TriggerMode};

/// Which of the two snapshots an edit targets.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Endpoint {
    From,
    To,
}

#[derive(Debug)]
pub struct Session {
    cfg: TransitionConfig,
    limits: Limits,
    active_preset: Option<String>,
    player: Player,
    copied: CopyIndicator,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl Session {
    /// Start from `config.initial`, clamped into `config.limits`.
    pub fn new(config: Config) -> Self {
        let Config { mut initial, limits } = config;
        initial.from = limits.clamp_snapshot(&initial.from);
        initial.to = limits.clamp_snapshot(&initial.to);
        initial.timing = limits.clamp_timing(&initial.timing);
        Self {
            cfg: initial,
            limits,
            active_preset: None,
            player: Player::new(),
            copied: CopyIndicator::default(),
        }
    }

    pub fn config(&self) -> &TransitionConfig {
        &self.cfg
    }

    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Name of the preset applied last, until any field is edited.
    pub fn active_preset(&self) -> Option<&str> {
        self.active_preset.as_deref()
    }

    // ----- editors -----

    pub fn apply_preset(&mut self, preset: &Preset) {
        self.cfg.from = preset.from;
        self.cfg.to = preset.to;
        self.cfg.timing = preset.timing();
        self.active_preset = Some(preset.name.clone());
        debug!("applied preset '{}'", preset.name);
    }

    pub fn apply_preset_named(&mut self, name: &str) -> Result<()> {
        let preset = find_preset(name)?;
        self.apply_preset(preset);
        Ok(())
    }

    /// Set one field of the `from` snapshot by key. Unknown keys are rejected.
    pub fn set_from_field(&mut self, key: &str, value: f64) -> Result<()> {
        let field: StyleField = key.parse()?;
        self.set_field(Endpoint::From, field, value);
        Ok(())
    }

    /// Set one field of the `to` snapshot by key. Unknown keys are rejected.
    pub fn set_to_field(&mut self, key: &str, value: f64) -> Result<()> {
        let field: StyleField = key.parse()?;
        self.set_field(Endpoint::To, field, value);
        Ok(())
    }

    pub fn set_field(&mut self, endpoint: Endpoint, field: StyleField, value: f64) {
        let value = self.limits.clamp_field(field, value);
        let snapshot = self.snapshot_mut(endpoint);
        *snapshot = snapshot.with(field, value);
        self.active_preset = None;
    }

    pub fn set_duration(&mut self, ms: f64) {
        self.cfg.timing.duration_ms = self.limits.clamp_duration(ms);
        self.active_preset = None;
    }

    pub fn set_delay(&mut self, ms: f64) {
        self.cfg.timing.delay_ms = self.limits.clamp_delay(ms);
        self.active_preset = None;
    }

    pub fn set_easing(&mut self, easing: impl Into<Easing>) {
        let easing = easing.into();
        if !easing.is_cataloged() {
            debug!("using custom easing '{easing}'");
        }
        self.cfg.timing.easing = easing;
        self.active_preset = None;
    }

    pub fn set_mode(&mut self, mode: TriggerMode) {
        self.cfg.mode = mode;
    }

    pub fn set_trigger_name(&mut self, name: impl Into<String>) {
        self.cfg.trigger_name = name.into();
    }

    fn snapshot_mut(&mut self, endpoint: Endpoint) -> &mut StyleSnapshot {
        match endpoint {
            Endpoint::From => &mut self.cfg.from,
            Endpoint::To => &mut self.cfg.to,
        }
    }

    // ----- derived views -----

    pub fn code(&self) -> String {
        generate(&self.cfg)
    }

    pub fn usage(&self) -> String {
        usage_snippet(&self.cfg.trigger_name, self.cfg.mode)
    }

    /// Transform of the dashed outline marking the start position.
    pub fn ghost_transform(&self) -> String {
        transform_string(&self.cfg.from)
    }

    pub fn render_style(&self) -> RenderStyle {
        self.player.render_style(&self.cfg)
    }

    pub fn phase(&self) -> PhaseKind {
        self.player.phase()
    }

    pub fn is_playing(&self) -> bool {
        self.player.is_playing()
    }

    pub fn progress(&self) -> f64 {
        self.player.progress()
    }

    // ----- playback -----

    pub fn play(&mut self, host: &mut dyn FrameHost) -> bool {
        self.player.play(&self.cfg, host)
    }

    pub fn on_frame(&mut self, handle: FrameHandle, host: &mut dyn FrameHost) {
        self.player.on_frame(handle, host);
    }

    pub fn on_timer(&mut self, handle: TimerHandle, host: &mut dyn FrameHost) {
        self.player.on_timer(handle, host);
    }

    /// Restart the running phase if duration or delay were edited mid-run.
    pub fn sync_player(&mut self, host: &mut dyn FrameHost) -> bool {
        self.player.retime(&self.cfg, host)
    }

    pub fn teardown(&mut self, host: &mut dyn FrameHost) {
        self.player.teardown(host);
    }

    // ----- clipboard -----

    /// Write the generated code to `sink`. Failures are logged and swallowed;
    /// the return value tells whether the copied indicator was switched on.
    pub fn copy_code(&mut self, sink: &mut dyn ClipboardSink, now_ms: f64) -> bool {
        match sink.write_text(&self.code()) {
            Ok(()) => {
                self.copied.activate(now_ms);
                true
            }
            Err(err) => {
                debug!("{err}");
                false
            }
        }
    }

    /// Turn the copied indicator on for hosts that perform the write themselves.
    pub fn mark_copied(&mut self, now_ms: f64) {
        self.copied.activate(now_ms);
    }

    pub fn is_copied(&self, now_ms: f64) -> bool {
        self.copied.is_active(now_ms)
    }

    /// Serializable view of everything a host needs to render one frame.
    pub fn snapshot(&self, now_ms: f64) -> SessionSnapshot {
        SessionSnapshot {
            config: self.cfg.clone(),
            active_preset: self.active_preset.clone(),
            phase: self.phase(),
            progress: self.progress(),
            style: self.render_style(),
            ghost_transform: self.ghost_transform(),
            total_ms: self.cfg.timing.total_ms(),
            code: self.code(),
            usage: self.usage(),
            copied: self.is_copied(now_ms),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub config: TransitionConfig,
    pub active_preset: Option<String>,
    pub phase: PhaseKind,
    pub progress: f64,
    pub style: RenderStyle,
    pub ghost_transform: String,
    /// Length of the progress bar: duration plus delay.
    pub total_ms: u32,
    pub code: String,
    pub usage: String,
    pub copied: bool,
}
