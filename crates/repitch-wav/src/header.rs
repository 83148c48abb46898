//! Canonical 44-byte RIFF/WAVE header.
//!
//! Fields are read and written at fixed offsets in little-endian order. The
//! original bytes are kept so that everything repitch does not rewrite is
//! passed through untouched.

use crate::error::{Error, Result};

/// Size of the canonical PCM header.
pub const HEADER_SIZE: usize = 44;

/// Byte offsets of the header fields.
pub mod offset {
    pub const RIFF_TAG: usize = 0;
    pub const RIFF_SIZE: usize = 4;
    pub const WAVE_TAG: usize = 8;
    pub const FMT_TAG: usize = 12;
    pub const FMT_SIZE: usize = 16;
    pub const FORMAT_CODE: usize = 20;
    pub const CHANNELS: usize = 22;
    pub const SAMPLE_RATE: usize = 24;
    pub const BYTE_RATE: usize = 28;
    pub const BLOCK_ALIGN: usize = 32;
    pub const BITS_PER_SAMPLE: usize = 34;
    pub const DATA_TAG: usize = 36;
    pub const DATA_SIZE: usize = 40;
}

const RIFF: &[u8; 4] = b"RIFF";
const WAVE: &[u8; 4] = b"WAVE";

/// PCM format code for integer samples.
pub const FORMAT_PCM: u16 = 1;

/// Bytes of the RIFF chunk that precede the data payload, minus the 8-byte
/// RIFF preamble.
const RIFF_OVERHEAD: u32 = (HEADER_SIZE - 8) as u32;

/// Format fields the core reads. Sample rate is carried, never changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioFormat {
    pub channels: u16,
    pub sample_rate: u32,
    pub bits_per_sample: u16,
}

impl AudioFormat {
    /// 16-bit PCM with the given layout.
    pub fn pcm16(channels: u16, sample_rate: u32) -> Self {
        Self {
            channels,
            sample_rate,
            bits_per_sample: 16,
        }
    }

    pub fn bytes_per_sample(&self) -> usize {
        usize::from(self.bits_per_sample / 8)
    }

    pub fn block_align(&self) -> u16 {
        self.channels.saturating_mul(self.bits_per_sample / 8)
    }

    pub fn byte_rate(&self) -> u32 {
        self.sample_rate.saturating_mul(u32::from(self.block_align()))
    }
}

/// A 44-byte header, kept as raw bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WavHeader {
    bytes: [u8; HEADER_SIZE],
}

impl WavHeader {
    /// Parse the header at the start of `bytes`.
    ///
    /// Only the `RIFF` and `WAVE` tags are checked here; layout checks belong
    /// to the decoder.
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        let raw: [u8; HEADER_SIZE] = bytes
            .get(..HEADER_SIZE)
            .and_then(|h| h.try_into().ok())
            .ok_or_else(|| {
                Error::Format(format!(
                    "header needs {} bytes, got {}",
                    HEADER_SIZE,
                    bytes.len()
                ))
            })?;

        let header = Self { bytes: raw };
        if header.tag(offset::RIFF_TAG) != RIFF || header.tag(offset::WAVE_TAG) != WAVE {
            return Err(Error::Format("missing RIFF/WAVE tags".into()));
        }
        Ok(header)
    }

    /// Build a fresh canonical PCM header for `data_size` bytes of samples.
    pub fn canonical(format: AudioFormat, data_size: u32) -> Self {
        let mut bytes = [0u8; HEADER_SIZE];
        bytes[offset::RIFF_TAG..offset::RIFF_TAG + 4].copy_from_slice(RIFF);
        bytes[offset::WAVE_TAG..offset::WAVE_TAG + 4].copy_from_slice(WAVE);
        bytes[offset::FMT_TAG..offset::FMT_TAG + 4].copy_from_slice(b"fmt ");
        bytes[offset::DATA_TAG..offset::DATA_TAG + 4].copy_from_slice(b"data");

        let mut header = Self { bytes };
        header.put_u32(offset::FMT_SIZE, 16);
        header.put_u16(offset::FORMAT_CODE, FORMAT_PCM);
        header.put_u16(offset::CHANNELS, format.channels);
        header.put_u32(offset::SAMPLE_RATE, format.sample_rate);
        header.put_u32(offset::BYTE_RATE, format.byte_rate());
        header.put_u16(offset::BLOCK_ALIGN, format.block_align());
        header.put_u16(offset::BITS_PER_SAMPLE, format.bits_per_sample);
        header.set_data_size(data_size);
        header
    }

    pub fn format(&self) -> AudioFormat {
        AudioFormat {
            channels: self.channels(),
            sample_rate: self.sample_rate(),
            bits_per_sample: self.bits_per_sample(),
        }
    }

    pub fn riff_size(&self) -> u32 {
        self.u32_at(offset::RIFF_SIZE)
    }

    pub fn format_code(&self) -> u16 {
        self.u16_at(offset::FORMAT_CODE)
    }

    pub fn channels(&self) -> u16 {
        self.u16_at(offset::CHANNELS)
    }

    pub fn sample_rate(&self) -> u32 {
        self.u32_at(offset::SAMPLE_RATE)
    }

    pub fn byte_rate(&self) -> u32 {
        self.u32_at(offset::BYTE_RATE)
    }

    pub fn block_align(&self) -> u16 {
        self.u16_at(offset::BLOCK_ALIGN)
    }

    pub fn bits_per_sample(&self) -> u16 {
        self.u16_at(offset::BITS_PER_SAMPLE)
    }

    pub fn data_size(&self) -> u32 {
        self.u32_at(offset::DATA_SIZE)
    }

    /// Set the data chunk size and the RIFF size that depends on it.
    pub fn set_data_size(&mut self, data_size: u32) {
        self.put_u32(offset::DATA_SIZE, data_size);
        self.put_u32(offset::RIFF_SIZE, data_size.saturating_add(RIFF_OVERHEAD));
    }

    pub fn as_bytes(&self) -> &[u8; HEADER_SIZE] {
        &self.bytes
    }

    fn tag(&self, at: usize) -> &[u8] {
        &self.bytes[at..at + 4]
    }

    fn u16_at(&self, at: usize) -> u16 {
        u16::from_le_bytes([self.bytes[at], self.bytes[at + 1]])
    }

    fn u32_at(&self, at: usize) -> u32 {
        u32::from_le_bytes([
            self.bytes[at],
            self.bytes[at + 1],
            self.bytes[at + 2],
            self.bytes[at + 3],
        ])
    }

    fn put_u16(&mut self, at: usize, value: u16) {
        self.bytes[at..at + 2].copy_from_slice(&value.to_le_bytes());
    }

    fn put_u32(&mut self, at: usize, value: u32) {
        self.bytes[at..at + 4].copy_from_slice(&value.to_le_bytes());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_round_trips_fields() {
        let header = WavHeader::canonical(AudioFormat::pcm16(2, 48000), 400);
        let parsed = WavHeader::parse(header.as_bytes()).unwrap();

        assert_eq!(parsed.format(), AudioFormat::pcm16(2, 48000));
        assert_eq!(parsed.format_code(), FORMAT_PCM);
        assert_eq!(parsed.byte_rate(), 48000 * 4);
        assert_eq!(parsed.block_align(), 4);
        assert_eq!(parsed.data_size(), 400);
        assert_eq!(parsed.riff_size(), 436);
    }

    #[test]
    fn test_fields_are_little_endian() {
        let header = WavHeader::canonical(AudioFormat::pcm16(1, 44100), 0x0102_0304);
        let bytes = header.as_bytes();
        assert_eq!(&bytes[offset::DATA_SIZE..offset::DATA_SIZE + 4], &[4, 3, 2, 1]);
        assert_eq!(&bytes[offset::SAMPLE_RATE..offset::SAMPLE_RATE + 4], &44100u32.to_le_bytes());
        assert_eq!(&bytes[offset::DATA_TAG..offset::DATA_TAG + 4], b"data");
    }

    #[test]
    fn test_short_header_rejected() {
        let header = WavHeader::canonical(AudioFormat::pcm16(1, 8000), 0);
        let err = WavHeader::parse(&header.as_bytes()[..43]).unwrap_err();
        assert!(matches!(err, Error::Format(_)));
    }

    #[test]
    fn test_wrong_tags_rejected() {
        let mut bytes = *WavHeader::canonical(AudioFormat::pcm16(1, 8000), 0).as_bytes();
        bytes[8..12].copy_from_slice(b"AVI ");
        assert!(matches!(WavHeader::parse(&bytes), Err(Error::Format(_))));

        let mut bytes = *WavHeader::canonical(AudioFormat::pcm16(1, 8000), 0).as_bytes();
        bytes[0..4].copy_from_slice(b"RIFX");
        assert!(matches!(WavHeader::parse(&bytes), Err(Error::Format(_))));
    }

    #[test]
    fn test_set_data_size_touches_only_size_fields() {
        let original = WavHeader::canonical(AudioFormat::pcm16(2, 22050), 100);
        let mut updated = original.clone();
        updated.set_data_size(200);

        let changed: Vec<usize> = (0..HEADER_SIZE)
            .filter(|&i| original.as_bytes()[i] != updated.as_bytes()[i])
            .collect();
        assert!(changed
            .iter()
            .all(|&i| (offset::RIFF_SIZE..offset::RIFF_SIZE + 4).contains(&i)
                || (offset::DATA_SIZE..offset::DATA_SIZE + 4).contains(&i)));
        assert_eq!(updated.riff_size(), 236);
    }
}
