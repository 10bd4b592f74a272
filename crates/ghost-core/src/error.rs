use thiserror::Error;

/// Configuration errors raised while building a simulation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    #[error("trail needs at least one point")]
    EmptyTrail,
    #[error("dot size must be finite and positive, got {0}")]
    InvalidSize(f32),
    #[error("viewport must be finite and positive, got {width}x{height}")]
    InvalidViewport { width: f32, height: f32 },
}
