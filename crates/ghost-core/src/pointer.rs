use crate::constants::{MOVING_QUIET_MS, TARGET_LIFT_DOTS};
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerPhase {
    Idle,
    Tracking,
}

/// Smoothed pointer with a debounced "moving" flag.
///
/// Input callbacks only ever call [`PointerTracker::on_input`] and
/// [`PointerTracker::set_controls_padding`]; the frame step owns the rest.
/// Timestamps are plain milliseconds supplied by the caller so the tracker
/// runs the same under `performance.now()` and in host tests.
#[derive(Clone, Debug)]
pub struct PointerTracker {
    pub pos: Vec2,
    pub target: Vec2,
    moving: bool,
    quiet_deadline_ms: Option<f64>,
    controls_padding: f32,
    smoothing: f32,
    quiet_ms: f64,
}

impl PointerTracker {
    pub fn new(pos: Vec2, target: Vec2, smoothing: f32) -> Self {
        Self {
            pos,
            target,
            moving: false,
            quiet_deadline_ms: None,
            controls_padding: 0.0,
            smoothing: smoothing.clamp(0.0, 1.0),
            quiet_ms: MOVING_QUIET_MS,
        }
    }

    pub fn with_quiet_ms(mut self, quiet_ms: f64) -> Self {
        self.quiet_ms = quiet_ms.max(0.0);
        self
    }

    #[inline]
    pub fn is_moving(&self) -> bool {
        self.moving
    }

    pub fn phase(&self) -> PointerPhase {
        if self.moving {
            PointerPhase::Tracking
        } else {
            PointerPhase::Idle
        }
    }

    pub fn quiet_deadline_ms(&self) -> Option<f64> {
        self.quiet_deadline_ms
    }

    pub fn controls_padding(&self) -> f32 {
        self.controls_padding
    }

    /// Height of an overlay covering the pointer. Negative values veto the
    /// Tracking phase while the overlay is hovered.
    pub fn set_controls_padding(&mut self, px: f32) {
        self.controls_padding = px;
    }

    /// Register a pointer/touch/click at CSS position `client`.
    ///
    /// The target is lifted by `TARGET_LIFT_DOTS * dot_px`, floored at
    /// `dot_px` and shifted by the controls padding. `dot_px = 0` keeps the
    /// raw coordinates, including ones above the viewport.
    pub fn on_input(&mut self, client: Vec2, now_ms: f64, dot_px: f32) {
        self.moving = self.controls_padding >= 0.0;
        self.quiet_deadline_ms = Some(now_ms + self.quiet_ms);

        let y = if dot_px > 0.0 {
            (client.y - TARGET_LIFT_DOTS * dot_px).max(dot_px)
        } else {
            client.y
        };
        self.target = Vec2::new(client.x, y - self.controls_padding);
    }

    /// Expire the quiet timer.
    pub fn tick(&mut self, now_ms: f64) {
        if let Some(deadline) = self.quiet_deadline_ms {
            if now_ms >= deadline {
                self.moving = false;
                self.quiet_deadline_ms = None;
            }
        }
    }

    /// Move the current position a fixed fraction of the way to the target.
    #[inline]
    pub fn smooth(&mut self) {
        self.pos += (self.target - self.pos) * self.smoothing;
    }
}
