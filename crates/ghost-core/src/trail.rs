//! Chain of spring-damped points following the pointer.

use crate::constants::{
    BORDER_SPAN, OPACITY_BASE, OPACITY_EXPONENT, OPACITY_SPAN, RADIUS_FALLOFF, RADIUS_PEAK_SPAN,
};
use crate::params::TailParams;
use crate::CoreError;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailPoint {
    pub pos: Vec2,
    pub vel: Vec2,
    pub opacity: f32,
    /// Fraction of the radius drawn at full opacity.
    pub bordered: f32,
    pub radius: f32,
}

/// One radial gradient to rasterize for a trail point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DotGradient {
    pub center: Vec2,
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub opacity: f32,
}

/// Parabolic radius profile: widest a third of the way down the chain.
#[inline]
pub fn dot_radius(index: usize, count: usize, size: f32, viewport_height: f32) -> f32 {
    let t = RADIUS_PEAK_SPAN * index as f32 / count as f32 - 1.0;
    size * viewport_height * (1.0 - RADIUS_FALLOFF * t * t)
}

#[inline]
pub fn dot_opacity(index: usize, count: usize) -> f32 {
    OPACITY_BASE + OPACITY_SPAN * (1.0 - index as f32 / count as f32).powi(OPACITY_EXPONENT)
}

#[inline]
pub fn dot_bordered(index: usize, count: usize) -> f32 {
    BORDER_SPAN * (1.0 - index as f32 / count as f32)
}

#[derive(Clone, Debug)]
pub struct Trail {
    points: Vec<TrailPoint>,
}

impl Trail {
    pub fn new(
        count: usize,
        origin: Vec2,
        size: f32,
        viewport_height: f32,
    ) -> Result<Self, CoreError> {
        if count == 0 {
            return Err(CoreError::EmptyTrail);
        }
        let points = (0..count)
            .map(|i| TrailPoint {
                pos: origin,
                vel: Vec2::ZERO,
                opacity: dot_opacity(i, count),
                bordered: dot_bordered(i, count),
                radius: dot_radius(i, count, size, viewport_height),
            })
            .collect();
        Ok(Self { points })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[TrailPoint] {
        &self.points
    }

    /// Recompute radii after a viewport or size change.
    pub fn resize(&mut self, size: f32, viewport_height: f32) {
        let n = self.points.len();
        for (i, p) in self.points.iter_mut().enumerate() {
            p.radius = dot_radius(i, n, size, viewport_height);
        }
    }

    /// Advance the chain by one frame. Point 0 is pinned to `head`; each
    /// following point chases its already-updated leader.
    pub fn step(&mut self, head: Vec2, tail: &TailParams) {
        let mut leader = head;
        for (i, p) in self.points.iter_mut().enumerate() {
            if i == 0 {
                p.pos = head;
            } else {
                p.vel += (leader - p.pos) * tail.spring;
                p.vel *= tail.friction;
                p.vel.y += tail.gravity;
                p.pos += p.vel;
            }
            leader = p.pos;
        }
    }

    /// Gradients in draw order (point 0 first, later points layer on top).
    pub fn gradients(&self) -> impl Iterator<Item = DotGradient> + '_ {
        self.points.iter().map(|p| DotGradient {
            center: p.pos,
            inner_radius: p.radius * p.bordered,
            outer_radius: p.radius,
            opacity: p.opacity,
        })
    }
}
