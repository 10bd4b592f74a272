//! Per-effect simulation contexts.
//!
//! Each context owns all mutable state for one background so several can
//! coexist on a page (or in a test) without sharing anything.

use crate::constants::{GHOST_POINTER_SMOOTHING, NEURO_POINTER_SMOOTHING};
use crate::params::EffectParams;
use crate::pointer::PointerTracker;
use crate::trail::Trail;
use crate::viewport::Viewport;
use crate::CoreError;
use glam::Vec2;

/// Values the ghost frame pushes after advancing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GhostUniforms {
    pub time_ms: f32,
    pub pointer: Vec2,
    pub target_pointer: Vec2,
    pub smile: f32,
}

#[derive(Clone, Debug)]
pub struct GhostSim {
    params: EffectParams,
    pointer: PointerTracker,
    trail: Trail,
    viewport: Viewport,
}

impl GhostSim {
    pub fn new(mut params: EffectParams, viewport: Viewport) -> Result<Self, CoreError> {
        params.validate()?;
        params.clamp_gravity();
        let (w, h) = (viewport.width, viewport.height);
        let pointer = PointerTracker::new(
            Vec2::new(0.3 * w, 0.3 * h),
            Vec2::new(0.25 * w, 0.45 * h),
            GHOST_POINTER_SMOOTHING,
        );
        let trail = Trail::new(params.tail.dots_number, pointer.pos, params.size, h)?;
        log::debug!("[ghost] sim ready: {} dots, viewport {}x{}", trail.len(), w, h);
        Ok(Self {
            params,
            pointer,
            trail,
            viewport,
        })
    }

    pub fn params(&self) -> &EffectParams {
        &self.params
    }

    pub fn pointer(&self) -> &PointerTracker {
        &self.pointer
    }

    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn on_input(&mut self, client: Vec2, now_ms: f64) {
        let dot_px = self.params.dot_px(self.viewport.height);
        self.pointer.on_input(client, now_ms, dot_px);
    }

    pub fn set_controls_padding(&mut self, px: f32) {
        self.pointer.set_controls_padding(px);
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.trail.resize(self.params.size, viewport.height);
    }

    pub fn set_size(&mut self, size: f32) -> Result<(), CoreError> {
        if !size.is_finite() || size <= 0.0 {
            return Err(CoreError::InvalidSize(size));
        }
        self.params.size = size;
        self.params.clamp_gravity();
        self.trail.resize(size, self.viewport.height);
        Ok(())
    }

    pub fn set_main_color(&mut self, rgb: [f32; 3]) {
        self.params.main_color = rgb;
    }

    pub fn set_border_color(&mut self, rgb: [f32; 3]) {
        self.params.border_color = rgb;
    }

    pub fn set_flat_color(&mut self, flat: bool) {
        self.params.is_flat_color = flat;
    }

    /// One frame: expire the quiet timer, migrate smile/gravity, smooth the
    /// pointer, then drag the trail along behind it.
    pub fn advance(&mut self, now_ms: f64) -> GhostUniforms {
        self.pointer.tick(now_ms);
        self.params.step_expression(self.pointer.is_moving(), now_ms);
        self.pointer.smooth();
        self.trail.step(self.pointer.pos, &self.params.tail);
        GhostUniforms {
            time_ms: now_ms as f32,
            pointer: self.viewport.normalize(self.pointer.pos),
            target_pointer: self.viewport.normalize(self.pointer.target),
            smile: self.params.smile,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NeuroUniforms {
    pub time_ms: f32,
    pub pointer_position: Vec2,
    pub scroll_progress: f32,
}

/// Pointer-following background: no trail, just a fast-smoothed pointer and
/// page scroll progress.
#[derive(Clone, Debug)]
pub struct NeuroSim {
    pointer: PointerTracker,
    viewport: Viewport,
}

impl NeuroSim {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            pointer: PointerTracker::new(Vec2::ZERO, Vec2::ZERO, NEURO_POINTER_SMOOTHING),
            viewport,
        }
    }

    pub fn pointer(&self) -> &PointerTracker {
        &self.pointer
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn on_input(&mut self, client: Vec2, now_ms: f64) {
        self.pointer.on_input(client, now_ms, 0.0);
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn advance(&mut self, now_ms: f64, scroll_y: f32) -> NeuroUniforms {
        self.pointer.tick(now_ms);
        self.pointer.smooth();
        NeuroUniforms {
            time_ms: now_ms as f32,
            pointer_position: self.viewport.normalize(self.pointer.pos),
            scroll_progress: scroll_y / (2.0 * self.viewport.height),
        }
    }
}
