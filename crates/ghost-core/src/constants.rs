// Shared tuning constants for the ghost and neuro backgrounds.

// Trail shape
pub const DOTS_NUMBER: usize = 25; // trail points behind the pointer
pub const DOT_SIZE: f32 = 0.1; // dot radius as a fraction of viewport height
pub const RADIUS_FALLOFF: f32 = 0.2; // depth of the parabolic radius taper
pub const RADIUS_PEAK_SPAN: f32 = 3.0; // radius peaks at index N / RADIUS_PEAK_SPAN

// Per-point opacity / border profile
pub const OPACITY_BASE: f32 = 0.04;
pub const OPACITY_SPAN: f32 = 0.3;
pub const OPACITY_EXPONENT: i32 = 4;
pub const BORDER_SPAN: f32 = 0.6;

// Spring-damper tail
pub const TAIL_SPRING: f32 = 1.4;
pub const TAIL_FRICTION: f32 = 0.3;
pub const TAIL_MAX_GRAVITY: f32 = 50.0; // ceiling, in units of `size`
pub const TAIL_GRAVITY: f32 = 25.0; // initial value, clamped to the ceiling

// Expression (smile / gravity) migration per frame
pub const SMILE_MAX: f32 = 1.0;
pub const SMILE_MIN: f32 = -0.1;
pub const SMILE_RISE_PER_FRAME: f32 = 0.01;
pub const SMILE_FALL_PER_FRAME: f32 = 0.05;
pub const GRAVITY_FALL_PER_FRAME: f32 = 10.0; // times `size`
pub const GRAVITY_RISE_PER_FRAME: f32 = 1.0; // times `size`
pub const GRAVITY_IDLE_FLOOR: f32 = 30.0; // times `size`
pub const GRAVITY_IDLE_SWING: f32 = 9.0; // times `size`, doubled at the crest
pub const GRAVITY_IDLE_RATE: f64 = 0.002; // radians per millisecond

// Pointer
pub const GHOST_POINTER_SMOOTHING: f32 = 0.1;
pub const NEURO_POINTER_SMOOTHING: f32 = 0.5;
pub const MOVING_QUIET_MS: f64 = 300.0; // Tracking -> Idle after this long without input
pub const TARGET_LIFT_DOTS: f32 = 0.6; // target sits this many dot sizes above the pointer

// Surface
pub const MAX_DEVICE_PIXEL_RATIO: f32 = 2.0;

// Default palette
pub const MAIN_COLOR: [f32; 3] = [0.98, 0.96, 0.96];
pub const BORDER_COLOR: [f32; 3] = [0.2, 0.5, 0.7];

// Full-screen quad, triangle strip, two floats per vertex
pub const QUAD_VERTICES: [f32; 8] = [-1.0, -1.0, 1.0, -1.0, -1.0, 1.0, 1.0, 1.0];
pub const QUAD_VERTEX_COUNT: i32 = 4;
