//! Error types for repitch-wav

use std::io;
use thiserror::Error;

/// Container error type
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error during file operations
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Header is short, has the wrong tags, or describes an unsupported layout
    #[error("Not a valid WAV file: {0}")]
    Format(String),

    /// Declared data chunk is larger than the bytes actually present
    #[error("Truncated audio data: header declares {declared} bytes, file has {available}")]
    Truncated { declared: usize, available: usize },

    /// Samples rejected by the core buffer types
    #[error(transparent)]
    Core(#[from] repitch_core::Error),
}

/// Result type for container operations
pub type Result<T> = std::result::Result<T, Error>;

// tempfile reports a failed rename with the temp file attached; keep the io error
impl From<tempfile::PersistError> for Error {
    fn from(e: tempfile::PersistError) -> Self {
        Error::Io(e.error)
    }
}
