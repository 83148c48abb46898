//! # repitch-wav
//!
//! Container adapter for repitch: the canonical 44-byte PCM WAV layout.
//!
//! - **Header**: field-by-field little-endian codec at fixed offsets
//! - **Codec**: bytes to [`SampleBuffer`](repitch_core::SampleBuffer) and back,
//!   rewriting only the size fields on the way out
//! - **File**: reading, and atomic writing through a temporary file
//!
//! Only 16-bit PCM is accepted. Chunks other than `fmt ` and `data` in the
//! canonical positions are not understood.

pub mod codec;
pub mod error;
pub mod file;
pub mod header;

pub use codec::{decode, encode, WavData};
pub use error::{Error, Result};
pub use file::{read_wav, write_wav_atomic};
pub use header::{AudioFormat, WavHeader, HEADER_SIZE};
