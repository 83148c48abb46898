//! Centralized error type for the repitch umbrella crate.
//!
//! Wraps the subsystem errors so `?` propagates across crate boundaries.
//! File I/O failures arrive through [`Error::Wav`], which owns all file access.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] repitch_core::Error),

    #[error(transparent)]
    Wav(#[from] repitch_wav::Error),
}

impl Error {
    /// Process exit status for this error. Every failure is fatal and maps to 1.
    pub fn exit_code(&self) -> u8 {
        1
    }
}

pub type Result<T> = std::result::Result<T, Error>;
