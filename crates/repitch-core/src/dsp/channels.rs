//! Deinterleave a buffer into per-channel tracks and back.

use crate::buffer::{ChannelTrack, SampleBuffer};

/// Split an interleaved buffer into one track per channel.
///
/// Element `c` of frame `f` lands at `tracks[c][f]`.
pub fn split(buffer: &SampleBuffer) -> Vec<ChannelTrack> {
    let channels = buffer.channels();
    let frames = buffer.frames();
    let samples = buffer.as_slice();

    (0..channels)
        .map(|ch| {
            let mut track = Vec::with_capacity(frames);
            track.extend(samples.iter().skip(ch).step_by(channels).copied());
            ChannelTrack::from(track)
        })
        .collect()
}

/// Interleave per-channel tracks into a single buffer.
///
/// # Panics
///
/// Panics if `tracks` is empty or the tracks differ in length. Callers build
/// every track from the same buffer, so either is a logic error.
pub fn merge(tracks: Vec<ChannelTrack>) -> SampleBuffer {
    assert!(!tracks.is_empty(), "cannot merge zero channel tracks");
    let channels = tracks.len();
    let frames = tracks[0].len();
    assert!(
        tracks.iter().all(|t| t.len() == frames),
        "channel tracks have different lengths"
    );

    let mut samples = vec![0i16; frames * channels];
    for (ch, track) in tracks.iter().enumerate() {
        for (frame, &sample) in track.as_slice().iter().enumerate() {
            samples[frame * channels + ch] = sample;
        }
    }

    SampleBuffer::from_parts(samples, channels)
}
