//! Transition player: Idle → Preparing → Animating → Idle.
//!
//! The player never draws and never sleeps. It asks a [`FrameHost`] for frame
//! callbacks and one-shot timers and is driven back through [`Player::on_frame`]
//! and [`Player::on_timer`]. Every handle it holds belongs to the current phase;
//! leaving the phase cancels them, and callbacks carrying a handle the current
//! phase does not own are dropped.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::style::transform_string;
use crate::transition::TransitionConfig;

/// Extra wait after the nominal end of a run before returning to Idle.
pub const SETTLE_MARGIN_MS: u32 = 150;

/// Frame boundaries awaited after painting the `from` style. One is not enough
/// for common rendering pipelines, which coalesce both paints into one frame.
pub const PREPARE_FRAME_COUNT: u8 = 2;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct FrameHandle(pub u32);

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct TimerHandle(pub u32);

/// Scheduling and rendering capabilities provided by the host (browser, test clock).
pub trait FrameHost {
    /// Wall-clock time in milliseconds.
    fn now_ms(&self) -> f64;
    /// Schedule a callback for the next frame; the host answers with `on_frame(handle)`.
    fn request_frame(&mut self) -> FrameHandle;
    fn cancel_frame(&mut self, handle: FrameHandle);
    /// Schedule a one-shot callback; the host answers with `on_timer(handle)`.
    fn set_timeout(&mut self, delay_ms: u32) -> TimerHandle;
    fn clear_timeout(&mut self, handle: TimerHandle);
    /// Apply `style` to the element and force a synchronous layout.
    fn flush_layout(&mut self, style: &RenderStyle);
}

/// Style descriptor applied by the rendering layer each frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RenderStyle {
    pub opacity: f64,
    pub transform: String,
    pub transition: String,
}

/// Public view of the player state.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhaseKind {
    Idle,
    Preparing,
    Animating,
}

impl PhaseKind {
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Preparing => "preparing",
            Self::Animating => "animating",
        }
    }
}

/// Duration and delay captured when a run starts.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct RunTiming {
    duration_ms: u32,
    delay_ms: u32,
}

impl RunTiming {
    fn of(cfg: &TransitionConfig) -> Self {
        Self {
            duration_ms: cfg.timing.duration_ms,
            delay_ms: cfg.timing.delay_ms,
        }
    }

    fn total_ms(&self) -> u32 {
        self.duration_ms.saturating_add(self.delay_ms)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Phase {
    Idle,
    Preparing {
        run: RunTiming,
        frames_seen: u8,
        pending: FrameHandle,
    },
    Animating {
        run: RunTiming,
        started_at_ms: f64,
        progress: f64,
        /// `None` once progress reached 100.
        pending: Option<FrameHandle>,
        settle: TimerHandle,
    },
}

#[derive(Debug)]
pub struct Player {
    phase: Phase,
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    pub fn new() -> Self {
        Self { phase: Phase::Idle }
    }

    pub fn phase(&self) -> PhaseKind {
        match self.phase {
            Phase::Idle => PhaseKind::Idle,
            Phase::Preparing { .. } => PhaseKind::Preparing,
            Phase::Animating { .. } => PhaseKind::Animating,
        }
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        !matches!(self.phase, Phase::Idle)
    }

    /// Progress of the current run in `[0, 100]`; 0 outside of Animating.
    pub fn progress(&self) -> f64 {
        match self.phase {
            Phase::Animating { progress, .. } => progress,
            _ => 0.0,
        }
    }

    /// Style the element should be rendered with in the current phase.
    pub fn render_style(&self, cfg: &TransitionConfig) -> RenderStyle {
        match self.phase {
            Phase::Preparing { .. } => from_style(cfg),
            Phase::Animating { .. } => RenderStyle {
                opacity: cfg.to.opacity,
                transform: transform_string(&cfg.to),
                transition: cfg.timing.css_transition(),
            },
            Phase::Idle => RenderStyle {
                opacity: cfg.to.opacity,
                transform: transform_string(&cfg.to),
                transition: "none".to_string(),
            },
        }
    }

    /// Start a run. Returns `false` (and changes nothing) unless the player is Idle.
    pub fn play(&mut self, cfg: &TransitionConfig, host: &mut dyn FrameHost) -> bool {
        if self.is_playing() {
            debug!("play ignored while {}", self.phase().name());
            return false;
        }
        self.enter_preparing(RunTiming::of(cfg), cfg, host);
        true
    }

    /// Frame callback from the host.
    pub fn on_frame(&mut self, handle: FrameHandle, host: &mut dyn FrameHost) {
        match self.phase {
            Phase::Preparing {
                run,
                frames_seen,
                pending,
            } if pending == handle => {
                let frames_seen = frames_seen + 1;
                if frames_seen < PREPARE_FRAME_COUNT {
                    let pending = host.request_frame();
                    self.phase = Phase::Preparing {
                        run,
                        frames_seen,
                        pending,
                    };
                } else {
                    // the fired frame is the last thing Preparing owned
                    self.phase = Phase::Idle;
                    self.enter_animating(run, host);
                }
            }
            Phase::Animating {
                run,
                started_at_ms,
                progress,
                pending: Some(pending),
                settle,
            } if pending == handle => {
                let sampled = sample_progress(run, started_at_ms, host.now_ms());
                let progress = progress.max(sampled);
                let pending = if progress < 100.0 {
                    Some(host.request_frame())
                } else {
                    None
                };
                self.phase = Phase::Animating {
                    run,
                    started_at_ms,
                    progress,
                    pending,
                    settle,
                };
            }
            _ => trace!("dropping stale frame callback {:?}", handle),
        }
    }

    /// Timer callback from the host.
    pub fn on_timer(&mut self, handle: TimerHandle, host: &mut dyn FrameHost) {
        match self.phase {
            Phase::Animating {
                pending, settle, ..
            } if settle == handle => {
                if let Some(frame) = pending {
                    host.cancel_frame(frame);
                }
                debug!("run settled; back to idle");
                self.phase = Phase::Idle;
            }
            _ => trace!("dropping stale timer callback {:?}", handle),
        }
    }

    /// Re-run the active phase when duration or delay changed since it started.
    /// Returns whether the phase was restarted.
    pub fn retime(&mut self, cfg: &TransitionConfig, host: &mut dyn FrameHost) -> bool {
        let next = RunTiming::of(cfg);
        match self.phase {
            Phase::Idle => false,
            Phase::Preparing { run, .. } if run != next => {
                self.release(host);
                self.enter_preparing(next, cfg, host);
                true
            }
            Phase::Animating { run, .. } if run != next => {
                self.release(host);
                self.enter_animating(next, host);
                true
            }
            Phase::Preparing { .. } | Phase::Animating { .. } => false,
        }
    }

    /// Cancel all outstanding work and return to Idle. Call when the driving
    /// component goes away.
    pub fn teardown(&mut self, host: &mut dyn FrameHost) {
        if self.is_playing() {
            debug!("teardown during {}", self.phase().name());
        }
        self.release(host);
    }

    fn enter_preparing(
        &mut self,
        run: RunTiming,
        cfg: &TransitionConfig,
        host: &mut dyn FrameHost,
    ) {
        host.flush_layout(&from_style(cfg));
        let pending = host.request_frame();
        debug!("preparing run of {}ms", run.total_ms());
        self.phase = Phase::Preparing {
            run,
            frames_seen: 0,
            pending,
        };
    }

    fn enter_animating(&mut self, run: RunTiming, host: &mut dyn FrameHost) {
        let started_at_ms = host.now_ms();
        let pending = host.request_frame();
        let settle = host.set_timeout(run.total_ms().saturating_add(SETTLE_MARGIN_MS));
        debug!("animating for {}ms", run.total_ms());
        self.phase = Phase::Animating {
            run,
            started_at_ms,
            progress: 0.0,
            pending: Some(pending),
            settle,
        };
    }

    /// Cancel everything the current phase owns and go Idle.
    fn release(&mut self, host: &mut dyn FrameHost) {
        match self.phase {
            Phase::Idle => {}
            Phase::Preparing { pending, .. } => host.cancel_frame(pending),
            Phase::Animating {
                pending, settle, ..
            } => {
                if let Some(frame) = pending {
                    host.cancel_frame(frame);
                }
                host.clear_timeout(settle);
            }
        }
        self.phase = Phase::Idle;
    }
}

fn from_style(cfg: &TransitionConfig) -> RenderStyle {
    RenderStyle {
        opacity: cfg.from.opacity,
        transform: transform_string(&cfg.from),
        transition: "none".to_string(),
    }
}

fn sample_progress(run: RunTiming, started_at_ms: f64, now_ms: f64) -> f64 {
    let total = run.total_ms();
    if total == 0 {
        return 100.0;
    }
    let elapsed = (now_ms - started_at_ms).max(0.0);
    (100.0 * elapsed / f64::from(total)).min(100.0)
}
