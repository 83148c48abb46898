//! Duration-preserving linear-interpolation resampler.
//!
//! Output index `i` reads source position `i / factor`. The output always has
//! as many samples as the input: with `factor < 1` the read head runs off the
//! end of the track and the tail is silence, with `factor > 1` the end of the
//! source is never reached.

use crate::buffer::{ChannelTrack, SampleBuffer};
use crate::dsp::channels::{merge, split};
use crate::dsp::interpolate::interpolate;
use crate::factor::PitchFactor;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Fractional source position read by output index `index`.
#[inline]
pub fn source_position(index: usize, factor: PitchFactor) -> f64 {
    index as f64 / factor.value()
}

/// Resample one channel. The returned track has the same length as `track`.
pub fn resample(track: ChannelTrack, factor: PitchFactor) -> ChannelTrack {
    if factor.is_unity() {
        return track;
    }

    let source = track.as_slice();
    let mut output = ChannelTrack::with_len(source.len());
    for (i, out) in output.as_mut_slice().iter_mut().enumerate() {
        let position = source_position(i, factor);
        let whole = position.floor();
        // Saturating cast: positions beyond isize::MAX read as silence anyway.
        *out = interpolate(source, whole as isize, position - whole);
    }
    output
}

/// Resample every channel of an interleaved buffer independently.
pub fn resample_buffer(buffer: SampleBuffer, factor: PitchFactor) -> SampleBuffer {
    let channels = buffer.channels();
    let tracks = split(&buffer);
    drop(buffer);

    tracing::trace!(channels, factor = factor.value(), "resampling channels");

    #[cfg(feature = "parallel")]
    let resampled: Vec<ChannelTrack> = tracks
        .into_par_iter()
        .map(|track| resample(track, factor))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let resampled: Vec<ChannelTrack> = tracks
        .into_iter()
        .map(|track| resample(track, factor))
        .collect();

    merge(resampled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn factor(value: f64) -> PitchFactor {
        PitchFactor::new(value).unwrap()
    }

    #[test]
    fn test_unity_is_identity() {
        let track = ChannelTrack::from(vec![5, -7, 1200, i16::MIN, i16::MAX]);
        assert_eq!(resample(track.clone(), PitchFactor::UNITY), track);
    }

    #[test]
    fn test_factor_two_interpolates_halfway() {
        let track = ChannelTrack::from(vec![10, 20, 30, 40]);
        let out = resample(track, factor(2.0));
        assert_eq!(out.as_slice(), &[10, 15, 20, 25]);
    }

    #[test]
    fn test_factor_half_reads_past_end_as_silence() {
        // positions 0, 2, 4, 6
        let track = ChannelTrack::from(vec![10, 20, 30, 40]);
        let out = resample(track, factor(0.5));
        assert_eq!(out.as_slice(), &[10, 30, 0, 0]);
    }

    #[test]
    fn test_tiny_factor_is_silent_after_first_sample() {
        let track = ChannelTrack::from(vec![7; 16]);
        let out = resample(track, factor(1e-300));
        assert_eq!(out.as_slice()[0], 7);
        assert!(out.as_slice()[1..].iter().all(|&s| s == 0));
    }

    #[test]
    fn test_empty_track() {
        let out = resample(ChannelTrack::default(), factor(3.0));
        assert!(out.is_empty());
    }

    #[test]
    fn test_stereo_buffer_scenario() {
        let buf = SampleBuffer::new(vec![10, 100, 20, 200, 30, 300, 40, 400], 2).unwrap();
        let out = resample_buffer(buf, factor(2.0));
        assert_eq!(out.as_slice(), &[10, 100, 15, 150, 20, 200, 25, 250]);
    }

    #[test]
    fn test_channels_are_independent() {
        let buf = SampleBuffer::new(vec![0, 1000, 0, 1000, 0, 1000], 2).unwrap();
        let out = resample_buffer(buf, factor(1.5));
        let tracks = split(&out);
        assert!(tracks[0].as_slice().iter().all(|&s| s == 0));
        assert_eq!(tracks[1].as_slice()[0], 1000);
    }

    proptest! {
        #[test]
        fn prop_length_preserved(
            samples in prop::collection::vec(any::<i16>(), 0..256),
            channels in 1usize..6,
            value in 0.01f64..16.0,
        ) {
            let buf = SampleBuffer::from_interleaved_lossy(samples, channels).unwrap();
            let (len, frames) = (buf.len(), buf.frames());
            let out = resample_buffer(buf, factor(value));
            prop_assert_eq!(out.len(), len);
            prop_assert_eq!(out.frames(), frames);
            prop_assert_eq!(out.channels(), channels);
        }

        #[test]
        fn prop_unity_identity(
            samples in prop::collection::vec(any::<i16>(), 0..256),
            channels in 1usize..6,
        ) {
            let buf = SampleBuffer::from_interleaved_lossy(samples, channels).unwrap();
            let out = resample_buffer(buf.clone(), PitchFactor::UNITY);
            prop_assert_eq!(out, buf);
        }

        #[test]
        fn prop_source_position_monotonic(value in 0.001f64..1000.0, len in 1usize..2048) {
            let f = factor(value);
            for i in 1..len {
                prop_assert!(source_position(i, f) >= source_position(i - 1, f));
            }
        }

        #[test]
        fn prop_silence_beyond_track(
            samples in prop::collection::vec(any::<i16>(), 1..128),
            value in 0.01f64..1.0,
        ) {
            let f = factor(value);
            let len = samples.len();
            let out = resample(ChannelTrack::from(samples), f);
            for (i, &s) in out.as_slice().iter().enumerate() {
                if source_position(i, f).floor() >= len as f64 {
                    prop_assert_eq!(s, 0);
                }
            }
        }
    }
}
