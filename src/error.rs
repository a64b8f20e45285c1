//! Configuration errors
//!
//! The simulation itself has no recoverable failures once constructed; all
//! errors surface while loading or validating a [`SimConfig`](crate::SimConfig).

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cubes per axis must be between 1 and {max}, got {0}", max = crate::consts::MAX_CUBES_PER_AXIS)]
    InvalidGridSize(u32),
    #[error("cube spacing must be positive and finite, got {0}")]
    NonPositiveSpacing(f32),
    #[error("max destruction rate must be positive and finite, got {0}")]
    NonPositiveRate(f32),
    #[error("{name} must be non-negative and finite, got {value}")]
    NegativeDuration { name: &'static str, value: f32 },
    #[error("portal threshold must be positive and finite, got {0}")]
    NonPositiveThreshold(f32),
    #[error("horizon height must be finite, got {0}")]
    NonFiniteHorizon(f32),
    #[error("portal reposition extent must be finite and within ±{max}, got {0}", max = crate::consts::MAX_REPOSITION_EXTENT)]
    NonFiniteExtent(f32),
    #[error("portal {name} must be positive and finite, got {value}")]
    NonPositivePortalSize { name: &'static str, value: f32 },
    #[error("rotation speed must be finite, got {0}")]
    NonFiniteRotationSpeed(f32),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
