//! Error types for repitch-core.

use thiserror::Error;

/// Error type for repitch-core operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Pitch factor is zero, negative or not finite.
    #[error("Invalid pitch factor: {0}. Must be a positive, finite number")]
    InvalidParameter(f64),

    /// Sample data violates a buffer invariant.
    #[error("Invalid audio data: {0}")]
    InvalidData(String),
}

/// Result type for repitch-core operations.
pub type Result<T> = std::result::Result<T, Error>;
