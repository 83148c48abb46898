//! Sample containers.
//!
//! A [`SampleBuffer`] holds interleaved 16-bit samples in round-robin channel
//! order: `[c0f0, c1f0, ..., c0f1, c1f1, ...]`. A [`ChannelTrack`] holds the
//! samples of a single channel.

use crate::error::{Error, Result};

/// Interleaved multi-channel 16-bit PCM.
///
/// Invariant: `channels >= 1` and `samples.len()` is a multiple of `channels`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleBuffer {
    samples: Vec<i16>,
    channels: usize,
}

impl SampleBuffer {
    pub fn new(samples: Vec<i16>, channels: usize) -> Result<Self> {
        if channels == 0 {
            return Err(Error::InvalidData("Channel count must be at least 1".into()));
        }
        if samples.len() % channels != 0 {
            return Err(Error::InvalidData(format!(
                "{} samples do not divide into {} channels",
                samples.len(),
                channels
            )));
        }
        Ok(Self { samples, channels })
    }

    /// Build from interleaved samples, dropping a trailing partial frame.
    pub fn from_interleaved_lossy(mut samples: Vec<i16>, channels: usize) -> Result<Self> {
        if channels > 0 {
            let whole = samples.len() - samples.len() % channels;
            samples.truncate(whole);
        }
        Self::new(samples, channels)
    }

    /// Caller guarantees the invariant.
    pub(crate) fn from_parts(samples: Vec<i16>, channels: usize) -> Self {
        debug_assert!(channels > 0 && samples.len() % channels == 0);
        Self { samples, channels }
    }

    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Samples per channel.
    pub fn frames(&self) -> usize {
        self.samples.len() / self.channels
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn as_slice(&self) -> &[i16] {
        &self.samples
    }

    pub fn into_samples(self) -> Vec<i16> {
        self.samples
    }
}

/// Samples of one channel, extracted at stride `channels`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChannelTrack(Vec<i16>);

impl ChannelTrack {
    pub fn with_len(len: usize) -> Self {
        Self(vec![0; len])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[i16] {
        &self.0
    }

    pub fn as_mut_slice(&mut self) -> &mut [i16] {
        &mut self.0
    }

    pub fn into_inner(self) -> Vec<i16> {
        self.0
    }
}

impl From<Vec<i16>> for ChannelTrack {
    fn from(samples: Vec<i16>) -> Self {
        Self(samples)
    }
}

impl AsRef<[i16]> for ChannelTrack {
    fn as_ref(&self) -> &[i16] {
        &self.0
    }
}
