use crate::constants::*;
use crate::CoreError;

/// Spring-damper settings for the trail. `gravity` is live state: it is
/// migrated every frame by [`EffectParams::step_expression`].
#[derive(Clone, Debug, PartialEq)]
pub struct TailParams {
    pub dots_number: usize,
    pub spring: f32,
    pub friction: f32,
    pub max_gravity: f32,
    pub gravity: f32,
}

impl Default for TailParams {
    fn default() -> Self {
        Self {
            dots_number: DOTS_NUMBER,
            spring: TAIL_SPRING,
            friction: TAIL_FRICTION,
            max_gravity: TAIL_MAX_GRAVITY,
            gravity: TAIL_GRAVITY,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct EffectParams {
    pub size: f32,
    pub tail: TailParams,
    pub smile: f32,
    pub main_color: [f32; 3],
    pub border_color: [f32; 3],
    pub is_flat_color: bool,
}

impl Default for EffectParams {
    fn default() -> Self {
        Self {
            size: DOT_SIZE,
            tail: TailParams::default(),
            smile: SMILE_MAX,
            main_color: MAIN_COLOR,
            border_color: BORDER_COLOR,
            is_flat_color: false,
        }
    }
}

impl EffectParams {
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.tail.dots_number == 0 {
            return Err(CoreError::EmptyTrail);
        }
        if !self.size.is_finite() || self.size <= 0.0 {
            return Err(CoreError::InvalidSize(self.size));
        }
        Ok(())
    }

    /// Base dot size in CSS pixels for the given viewport height.
    #[inline]
    pub fn dot_px(&self, viewport_height: f32) -> f32 {
        self.size * viewport_height
    }

    #[inline]
    pub fn gravity_ceiling(&self) -> f32 {
        self.tail.max_gravity * self.size
    }

    pub fn clamp_gravity(&mut self) {
        self.tail.gravity = self.tail.gravity.clamp(0.0, self.gravity_ceiling());
    }

    /// One frame of smile/gravity migration.
    ///
    /// While tracking, the mouth closes and the tail straightens. While idle the
    /// smile comes back and gravity climbs until it reaches the idle band, where
    /// it sways with `time_ms`.
    pub fn step_expression(&mut self, moving: bool, time_ms: f64) {
        let size = self.size;
        if moving {
            self.smile = (self.smile - SMILE_FALL_PER_FRAME).max(SMILE_MIN);
            self.tail.gravity = (self.tail.gravity - GRAVITY_FALL_PER_FRAME * size).max(0.0);
        } else {
            self.smile = (self.smile + SMILE_RISE_PER_FRAME).min(SMILE_MAX);
            if self.tail.gravity > GRAVITY_IDLE_FLOOR * size {
                let sway = (GRAVITY_IDLE_RATE * time_ms).sin() as f32;
                self.tail.gravity = (GRAVITY_IDLE_FLOOR + GRAVITY_IDLE_SWING * (1.0 + sway)) * size;
            } else {
                self.tail.gravity += GRAVITY_RISE_PER_FRAME * size;
            }
        }
        self.clamp_gravity();
    }
}
