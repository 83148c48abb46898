//! Test helpers and fixtures for repitch integration tests.

#![allow(dead_code)]

use repitch::{AudioFormat, WavHeader};
use std::path::{Path, PathBuf};

/// Default test sample rate.
pub const TEST_SAMPLE_RATE: u32 = 44100;

/// Build a canonical 16-bit PCM WAV file in memory.
pub fn wav_bytes(channels: u16, sample_rate: u32, samples: &[i16]) -> Vec<u8> {
    let header = WavHeader::canonical(
        AudioFormat::pcm16(channels, sample_rate),
        (samples.len() * 2) as u32,
    );
    let mut bytes = header.as_bytes().to_vec();
    for s in samples {
        bytes.extend_from_slice(&s.to_le_bytes());
    }
    bytes
}

/// Interleaved samples following the WAV header.
pub fn payload_samples(bytes: &[u8]) -> Vec<i16> {
    bytes[repitch::wav::HEADER_SIZE..]
        .chunks_exact(2)
        .map(|b| i16::from_le_bytes([b[0], b[1]]))
        .collect()
}

/// Generate a full-scale-ish sine wave, truncated to i16.
pub fn generate_sine(frequency: f64, sample_rate: u32, num_samples: usize) -> Vec<i16> {
    (0..num_samples)
        .map(|i| {
            let t = i as f64 / sample_rate as f64;
            ((2.0 * std::f64::consts::PI * frequency * t).sin() * 16000.0) as i16
        })
        .collect()
}

/// Interleave identical copies of `mono` across `channels`.
pub fn interleave_copies(mono: &[i16], channels: usize) -> Vec<i16> {
    mono.iter()
        .flat_map(|&s| std::iter::repeat(s).take(channels))
        .collect()
}

/// Write `bytes` into `dir/name` and return the path.
pub fn write_fixture(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, bytes).expect("Failed to write fixture");
    path
}
