//! Resampling DSP.

mod channels;
mod interpolate;
mod resample;

pub use channels::{merge, split};
pub use interpolate::interpolate;
pub use resample::{resample, resample_buffer, source_position};
