//! # repitch - Time-domain Pitch Shifter
//!
//! Scales the perceived pitch of 16-bit PCM WAV audio by linear-interpolation
//! resampling, keeping channel count and duration unchanged.
//!
//! ## Architecture
//!
//! repitch is an umbrella crate that coordinates:
//! - **repitch-core** - Sample buffers, channel split/merge, interpolating resampler,
//!   level and spectrum statistics
//! - **repitch-wav** - 44-byte WAV header codec, decode/encode, atomic file output
//!
//! ## Quick Start
//!
//! ```no_run
//! use repitch::prelude::*;
//!
//! let options = PitchShiftOptions::new(PitchFactor::new(1.5)?).collect_stats(true);
//! let report = pitch_shift_file("input.wav", "output.wav", &options)?;
//! println!("{} samples per channel", report.samples_per_channel);
//! # Ok::<(), repitch::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `parallel` (default) - Resample channels on the rayon pool

/// Re-export of repitch-core for direct access
pub use repitch_core as core;

/// Re-export of repitch-wav for direct access
pub use repitch_wav as wav;

mod error;
mod options;
mod pipeline;

pub use error::{Error, Result};
pub use options::PitchShiftOptions;
pub use pipeline::{pitch_shift_bytes, pitch_shift_file, PitchShiftReport};

pub use repitch_core::{
    dominant_frequency, interpolate, merge, resample, resample_buffer, source_position, split,
    ChannelTrack, PitchFactor, SampleBuffer, SignalStats,
};
pub use repitch_wav::{AudioFormat, WavData, WavHeader};

/// Commonly used types.
pub mod prelude {
    pub use crate::{
        pitch_shift_bytes, pitch_shift_file, AudioFormat, Error, PitchFactor, PitchShiftOptions,
        PitchShiftReport, Result, SampleBuffer, SignalStats,
    };
}
