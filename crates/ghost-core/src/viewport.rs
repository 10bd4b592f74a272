//! Viewport geometry shared by the resize handler and the uniform pushes.
//!
//! All pointer and trail coordinates live in CSS pixels. The GPU canvas uses
//! a backing store scaled by the device pixel ratio, capped to bound fill
//! rate on dense displays.

use crate::constants::MAX_DEVICE_PIXEL_RATIO;
use crate::CoreError;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub device_pixel_ratio: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32, device_pixel_ratio: f32) -> Result<Self, CoreError> {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        if !valid(width) || !valid(height) {
            return Err(CoreError::InvalidViewport { width, height });
        }
        Ok(Self {
            width,
            height,
            device_pixel_ratio,
        })
    }

    /// Device pixel ratio clamped to `MAX_DEVICE_PIXEL_RATIO`; falls back to 1
    /// when the host reports something unusable.
    pub fn pixel_ratio(&self) -> f32 {
        if self.device_pixel_ratio.is_finite() && self.device_pixel_ratio > 0.0 {
            self.device_pixel_ratio.min(MAX_DEVICE_PIXEL_RATIO)
        } else {
            1.0
        }
    }

    /// Canvas backing-store size in device pixels.
    pub fn backing_size(&self) -> (u32, u32) {
        let r = self.pixel_ratio();
        let w = (self.width * r) as u32;
        let h = (self.height * r) as u32;
        (w.max(1), h.max(1))
    }

    /// Offscreen texture size, one texel per CSS pixel.
    pub fn texture_size(&self) -> (u32, u32) {
        ((self.width as u32).max(1), (self.height as u32).max(1))
    }

    /// Width over height of the backing store, pushed as `u_ratio`.
    pub fn aspect(&self) -> f32 {
        let (w, h) = self.backing_size();
        w as f32 / h as f32
    }

    /// Map a CSS-pixel position to \[0, 1\] uv space with the y axis flipped.
    #[inline]
    pub fn normalize(&self, p: Vec2) -> Vec2 {
        Vec2::new(p.x / self.width, 1.0 - p.y / self.height)
    }
}
