//! End-to-end pitch shift: container bytes in, container bytes out.

use crate::options::PitchShiftOptions;
use crate::Result;
use repitch_core::{resample_buffer, PitchFactor, SignalStats};
use repitch_wav::{AudioFormat, WavData};
use std::path::{Path, PathBuf};

/// Summary of one pitch shift run.
#[derive(Debug, Clone, PartialEq)]
pub struct PitchShiftReport {
    /// Samples per channel, identical for input and output.
    pub samples_per_channel: usize,
    pub factor: PitchFactor,
    /// Format of both files; the output header carries it unchanged.
    pub format: AudioFormat,
    /// Set by [`pitch_shift_file`].
    pub output_path: Option<PathBuf>,
    /// Present when the options ask for statistics.
    pub input_stats: Option<SignalStats>,
    pub output_stats: Option<SignalStats>,
}

impl PitchShiftReport {
    pub fn duration_seconds(&self) -> f64 {
        if self.format.sample_rate == 0 {
            return 0.0;
        }
        self.samples_per_channel as f64 / f64::from(self.format.sample_rate)
    }
}

/// Pitch shift a WAV file held in memory.
pub fn pitch_shift_bytes(
    bytes: &[u8],
    options: &PitchShiftOptions,
) -> Result<(Vec<u8>, PitchShiftReport)> {
    let wav = repitch_wav::decode(bytes)?;
    pitch_shift_wav(wav, options)
}

/// Read `input`, pitch shift it, and write the result to `output`.
///
/// The output is written atomically: on any failure no file appears at
/// `output`, and an existing file there is left as it was.
pub fn pitch_shift_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    options: &PitchShiftOptions,
) -> Result<PitchShiftReport> {
    let output = output.as_ref();
    let wav = repitch_wav::read_wav(input)?;
    let (bytes, mut report) = pitch_shift_wav(wav, options)?;

    repitch_wav::write_wav_atomic(output, &bytes)?;
    report.output_path = Some(output.to_path_buf());
    Ok(report)
}

fn pitch_shift_wav(
    wav: WavData,
    options: &PitchShiftOptions,
) -> Result<(Vec<u8>, PitchShiftReport)> {
    let WavData { header, buffer } = wav;
    let format = header.format();
    let samples_per_channel = buffer.frames();
    let input_stats = options
        .collect_stats
        .then(|| SignalStats::measure(&buffer, format.sample_rate));

    tracing::debug!(
        samples_per_channel,
        channels = format.channels,
        factor = options.factor.value(),
        "pitch shifting"
    );

    let shifted = resample_buffer(buffer, options.factor);
    let output_stats = options
        .collect_stats
        .then(|| SignalStats::measure(&shifted, format.sample_rate));
    let bytes = repitch_wav::encode(&shifted, &header)?;

    let report = PitchShiftReport {
        samples_per_channel,
        factor: options.factor,
        format,
        output_path: None,
        input_stats,
        output_stats,
    };
    Ok((bytes, report))
}
