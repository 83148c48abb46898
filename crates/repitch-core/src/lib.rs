//! # repitch-core
//!
//! The sample-level half of repitch:
//! - **Buffers**: interleaved [`SampleBuffer`] and per-channel [`ChannelTrack`]
//! - **DSP**: channel split/merge, linear interpolation and the
//!   duration-preserving resampler
//! - **Analysis**: peak/RMS statistics and FFT dominant frequency
//!
//! Nothing here touches bytes or files; see `repitch-wav` for the container.
//!
//! ```
//! use repitch_core::{resample_buffer, PitchFactor, SampleBuffer};
//!
//! let stereo = SampleBuffer::new(vec![10, 100, 20, 200, 30, 300, 40, 400], 2)?;
//! let shifted = resample_buffer(stereo, PitchFactor::new(2.0)?);
//! assert_eq!(shifted.as_slice(), &[10, 100, 15, 150, 20, 200, 25, 250]);
//! # Ok::<(), repitch_core::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `parallel` (default): resample channels on the rayon pool

pub mod analysis;
pub mod buffer;
pub mod dsp;
pub mod error;
mod factor;

pub use analysis::{dominant_frequency, SignalStats, SPECTRUM_WINDOW};
pub use buffer::{ChannelTrack, SampleBuffer};
pub use dsp::{interpolate, merge, resample, resample_buffer, source_position, split};
pub use error::{Error, Result};
pub use factor::PitchFactor;
