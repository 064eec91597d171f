//! Error types for blur and deconvolution operations.

use thiserror::Error;

/// Errors that can occur during blur or deconvolution operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("radius {radius} is not a positive finite value")]
    InvalidRadius { radius: f64 },

    #[error("radius {radius} exceeds the supported maximum of {max}")]
    RadiusTooLarge { radius: f64, max: f64 },

    #[error("input contains no samples")]
    EmptyInput,

    #[error("size mismatch: expected {expected} samples, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    #[error("sampling ring at radius {radius} contains no points")]
    EmptyRing { radius: f64 },
}
