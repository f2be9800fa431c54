//! Error types for Tilt Card

use thiserror::Error;

/// Main error type for Tilt Card configuration
///
/// The per-frame path (gesture, motion, style) never fails; these errors only
/// come out of explicit validation and preset loading.
#[derive(Error, Debug)]
pub enum TiltError {
    /// Card width or height is zero, negative or not a number
    #[error("Invalid {name}: {value} (must be a positive, finite number)")]
    InvalidDimension { name: &'static str, value: f32 },

    /// Maximum tilt angle is negative or not finite
    #[error("Invalid max angle: {0} (must be >= 0)")]
    InvalidMaxAngle(f32),

    /// Parallax offset is negative or not finite
    #[error("Invalid parallax offset: {0} (must be >= 0)")]
    InvalidParallax(f32),

    /// Drag sensitivity is zero, negative or not finite
    #[error("Invalid sensitivity: {0} (must be > 0)")]
    InvalidSensitivity(f32),

    /// Spring parameters cannot produce a stable simulation
    #[error("Invalid spring: {0}")]
    InvalidSpring(String),

    /// Sheen opacity range is inverted or leaves [0, 1]
    #[error("Invalid sheen opacity range: {min}..{max}")]
    InvalidOpacityRange { min: f32, max: f32 },

    /// Sheen sweep, scale or counter-rotation is out of range
    #[error("Invalid sheen: {0}")]
    InvalidSheen(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Preset could not be parsed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using TiltError
pub type TiltResult<T> = Result<T, TiltError>;
