//! Offscreen texture compositing.
//!
//! The compositor clears its surface to opaque black and draws every trail
//! point as a white radial gradient, in chain order, with plain source-over
//! blending. The whole surface is redrawn and uploaded each frame.

use crate::trail::{DotGradient, Trail};
use std::convert::Infallible;

pub trait TextureSurface {
    type Error;

    fn size(&self) -> (u32, u32);
    fn resize(&mut self, width: u32, height: u32) -> Result<(), Self::Error>;
    fn clear(&mut self) -> Result<(), Self::Error>;
    fn fill_radial(&mut self, dot: &DotGradient) -> Result<(), Self::Error>;
}

/// Redraw `surface` from scratch with the current trail.
pub fn composite<S>(surface: &mut S, trail: &Trail) -> Result<(), S::Error>
where
    S: TextureSurface + ?Sized,
{
    surface.clear()?;
    for dot in trail.gradients() {
        surface.fill_radial(&dot)?;
    }
    Ok(())
}

/// Alpha of `dot` at distance `d` from its center: solid inside the inner
/// radius, linear ramp to zero at the outer radius, nothing beyond.
#[inline]
pub fn gradient_alpha(dot: &DotGradient, d: f32) -> f32 {
    if dot.outer_radius <= 0.0 || d > dot.outer_radius {
        return 0.0;
    }
    if d <= dot.inner_radius {
        return dot.opacity;
    }
    let span = dot.outer_radius - dot.inner_radius;
    dot.opacity * ((dot.outer_radius - d) / span).clamp(0.0, 1.0)
}

/// CPU RGBA8 surface. Same output layout the GPU texture receives, so it
/// doubles as a headless stand-in for the canvas compositor.
#[derive(Clone, Debug)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; width as usize * height as usize * 4],
        }
    }

    pub fn pixels(&self) -> &[u8] {
        &self.data
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y * self.width + x) * 4) as usize;
        Some([self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3]])
    }

    fn blend_white(&mut self, x: u32, y: u32, alpha: f32) {
        let i = ((y * self.width + x) * 4) as usize;
        let dst_a = self.data[i + 3] as f32 / 255.0;
        let out_a = alpha + dst_a * (1.0 - alpha);
        if out_a <= 0.0 {
            return;
        }
        for c in 0..3 {
            let dst = self.data[i + c] as f32;
            let v = (255.0 * alpha + dst * dst_a * (1.0 - alpha)) / out_a;
            self.data[i + c] = v.round().clamp(0.0, 255.0) as u8;
        }
        self.data[i + 3] = (out_a * 255.0).round().clamp(0.0, 255.0) as u8;
    }
}

impl TextureSurface for PixelBuffer {
    type Error = Infallible;

    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<(), Infallible> {
        self.width = width;
        self.height = height;
        self.data = vec![0; width as usize * height as usize * 4];
        Ok(())
    }

    fn clear(&mut self) -> Result<(), Infallible> {
        for px in self.data.chunks_exact_mut(4) {
            px.copy_from_slice(&[0, 0, 0, 255]);
        }
        Ok(())
    }

    fn fill_radial(&mut self, dot: &DotGradient) -> Result<(), Infallible> {
        if dot.outer_radius <= 0.0 || self.width == 0 || self.height == 0 {
            return Ok(());
        }
        let r = dot.outer_radius;
        let x0 = (dot.center.x - r).floor().max(0.0) as u32;
        let y0 = (dot.center.y - r).floor().max(0.0) as u32;
        let x1 = ((dot.center.x + r).ceil().max(0.0) as u32).min(self.width);
        let y1 = ((dot.center.y + r).ceil().max(0.0) as u32).min(self.height);
        for y in y0..y1 {
            for x in x0..x1 {
                let dx = x as f32 + 0.5 - dot.center.x;
                let dy = y as f32 + 0.5 - dot.center.y;
                let a = gradient_alpha(dot, (dx * dx + dy * dy).sqrt());
                if a > 0.0 {
                    self.blend_white(x, y, a);
                }
            }
        }
        Ok(())
    }
}
