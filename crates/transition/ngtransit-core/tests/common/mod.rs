#![allow(dead_code)]
//! Virtual-clock host shared by the player and session tests.

use ngtransit_core::{FrameHandle, FrameHost, Player, RenderStyle, Session, TimerHandle};

/// Anything the host can deliver callbacks to.
pub trait Driven {
    fn frame(&mut self, handle: FrameHandle, host: &mut dyn FrameHost);
    fn timer(&mut self, handle: TimerHandle, host: &mut dyn FrameHost);
}

impl Driven for Player {
    fn frame(&mut self, handle: FrameHandle, host: &mut dyn FrameHost) {
        self.on_frame(handle, host);
    }
    fn timer(&mut self, handle: TimerHandle, host: &mut dyn FrameHost) {
        self.on_timer(handle, host);
    }
}

impl Driven for Session {
    fn frame(&mut self, handle: FrameHandle, host: &mut dyn FrameHost) {
        self.on_frame(handle, host);
    }
    fn timer(&mut self, handle: TimerHandle, host: &mut dyn FrameHost) {
        self.on_timer(handle, host);
    }
}

/// Deterministic stand-in for requestAnimationFrame/setTimeout.
#[derive(Debug, Default)]
pub struct ManualHost {
    pub now: f64,
    next_id: u32,
    pub frames: Vec<FrameHandle>,
    pub timers: Vec<(TimerHandle, f64)>,
    pub cancelled_frames: Vec<FrameHandle>,
    pub cleared_timers: Vec<TimerHandle>,
    pub flushed: Vec<RenderStyle>,
    pub frames_requested: usize,
}

impl ManualHost {
    pub fn at(now: f64) -> Self {
        Self {
            now,
            next_id: 1,
            ..Default::default()
        }
    }

    fn alloc(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Advance the clock by `dt_ms`, then run this frame's callbacks followed by
    /// any timers that came due.
    pub fn tick<D: Driven>(&mut self, target: &mut D, dt_ms: f64) {
        self.now += dt_ms;
        let frames = std::mem::take(&mut self.frames);
        for f in frames {
            if !self.cancelled_frames.contains(&f) {
                target.frame(f, self);
            }
        }
        let now = self.now;
        let mut due: Vec<(TimerHandle, f64)> = Vec::new();
        self.timers.retain(|(h, at)| {
            if *at <= now {
                due.push((*h, *at));
                false
            } else {
                true
            }
        });
        due.sort_by(|a, b| a.1.total_cmp(&b.1));
        for (h, _) in due {
            target.timer(h, self);
        }
    }

    pub fn timer_due(&self, handle: TimerHandle) -> Option<f64> {
        self.timers
            .iter()
            .find(|(h, _)| *h == handle)
            .map(|(_, at)| *at)
    }
}

impl FrameHost for ManualHost {
    fn now_ms(&self) -> f64 {
        self.now
    }

    fn request_frame(&mut self) -> FrameHandle {
        let h = FrameHandle(self.alloc());
        self.frames.push(h);
        self.frames_requested += 1;
        h
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.frames.retain(|f| *f != handle);
        self.cancelled_frames.push(handle);
    }

    fn set_timeout(&mut self, delay_ms: u32) -> TimerHandle {
        let h = TimerHandle(self.alloc());
        self.timers.push((h, self.now + f64::from(delay_ms)));
        h
    }

    fn clear_timeout(&mut self, handle: TimerHandle) {
        self.timers.retain(|(h, _)| *h != handle);
        self.cleared_timers.push(handle);
    }

    fn flush_layout(&mut self, style: &RenderStyle) {
        self.flushed.push(style.clone());
    }
}
