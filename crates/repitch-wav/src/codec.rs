//! Byte-level decode/encode between a WAV container and a [`SampleBuffer`].

use crate::error::{Error, Result};
use crate::header::{offset, AudioFormat, WavHeader, FORMAT_PCM, HEADER_SIZE};
use repitch_core::SampleBuffer;

const BYTES_PER_SAMPLE: usize = 2;

/// A decoded file: the samples plus the header they came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WavData {
    pub header: WavHeader,
    pub buffer: SampleBuffer,
}

impl WavData {
    pub fn format(&self) -> AudioFormat {
        self.header.format()
    }
}

/// Decode a canonical 16-bit PCM WAV file held in memory.
///
/// The sample count comes from the declared data size, rounded down to whole
/// frames. Bytes after the data chunk are ignored.
pub fn decode(bytes: &[u8]) -> Result<WavData> {
    let header = WavHeader::parse(bytes)?;
    let format = header.format();

    if format.channels == 0 {
        return Err(Error::Format("channel count is 0".into()));
    }
    if format.bits_per_sample != 16 {
        return Err(Error::Format(format!(
            "{}-bit samples are not supported, expected 16-bit PCM",
            format.bits_per_sample
        )));
    }
    if header.format_code() != FORMAT_PCM {
        tracing::warn!(
            format_code = header.format_code(),
            "format code is not PCM, reading samples as 16-bit PCM anyway"
        );
    }
    if &bytes[offset::DATA_TAG..offset::DATA_TAG + 4] != b"data" {
        tracing::warn!("no data tag at offset {}, header is not canonical", offset::DATA_TAG);
    }

    let declared = header.data_size() as usize;
    let payload = &bytes[HEADER_SIZE..];
    if declared > payload.len() {
        return Err(Error::Truncated {
            declared,
            available: payload.len(),
        });
    }
    if payload.len() > declared {
        tracing::debug!(
            trailing = payload.len() - declared,
            "ignoring bytes after the data chunk"
        );
    }

    let samples = samples_from_le_bytes(&payload[..declared]);
    let channels = usize::from(format.channels);
    if samples.len() % channels != 0 {
        tracing::warn!(
            dropped = samples.len() % channels,
            "dropping samples of a trailing partial frame"
        );
    }
    let buffer = SampleBuffer::from_interleaved_lossy(samples, channels)?;

    tracing::debug!(
        channels = format.channels,
        sample_rate = format.sample_rate,
        frames = buffer.frames(),
        "decoded WAV"
    );

    Ok(WavData { header, buffer })
}

/// Encode `buffer` behind a copy of `header`.
///
/// Only the data size and RIFF size are rewritten; every other header byte is
/// passed through.
pub fn encode(buffer: &SampleBuffer, header: &WavHeader) -> Result<Vec<u8>> {
    let data_size = buffer
        .len()
        .checked_mul(BYTES_PER_SAMPLE)
        .and_then(|n| u32::try_from(n).ok())
        .ok_or_else(|| {
            Error::Format(format!(
                "{} samples do not fit in a WAV data chunk",
                buffer.len()
            ))
        })?;

    let mut header = header.clone();
    header.set_data_size(data_size);

    let mut bytes = Vec::with_capacity(HEADER_SIZE + data_size as usize);
    bytes.extend_from_slice(header.as_bytes());
    for sample in buffer.as_slice() {
        bytes.extend_from_slice(&sample.to_le_bytes());
    }
    Ok(bytes)
}

/// Little-endian 16-bit samples; an odd trailing byte is ignored.
fn samples_from_le_bytes(bytes: &[u8]) -> Vec<i16> {
    bytes
        .chunks_exact(BYTES_PER_SAMPLE)
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
        .collect()
}
