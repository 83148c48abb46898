//! Linear interpolation between neighbouring samples.

/// Interpolate between `track[index]` and `track[index + 1]`.
///
/// Positions before the start and past the end of the track read as silence,
/// so the second neighbour of the last sample is zero. The result is truncated
/// toward zero, not rounded.
///
/// `fraction` must be in `[0, 1)`; it is not checked.
#[inline]
pub fn interpolate(track: &[i16], index: isize, fraction: f64) -> i16 {
    if index < 0 {
        return 0;
    }
    let index = index as usize;
    let s1 = sample_at(track, index);
    let s2 = sample_at(track, index.saturating_add(1));

    (s1 + (s2 - s1) * fraction) as i16
}

#[inline]
fn sample_at(track: &[i16], index: usize) -> f64 {
    track.get(index).copied().map_or(0.0, f64::from)
}
