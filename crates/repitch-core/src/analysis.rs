//! Level and spectrum statistics for a sample buffer.

use crate::buffer::SampleBuffer;
use rustfft::{num_complex::Complex, FftPlanner};

/// Samples of the first channel analysed by [`dominant_frequency`].
pub const SPECTRUM_WINDOW: usize = 1024;

/// Peak, RMS, length and dominant frequency of a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SignalStats {
    /// Samples per channel.
    pub frames: usize,
    pub sample_rate: u32,
    /// Largest absolute sample value over all channels (`u16` so that
    /// `i16::MIN` fits).
    pub peak: u16,
    /// Root mean square over all channels, in raw sample units.
    pub rms: f64,
    /// Hz, see [`dominant_frequency`].
    pub dominant_frequency: f64,
}

impl SignalStats {
    pub fn measure(buffer: &SampleBuffer, sample_rate: u32) -> Self {
        let samples = buffer.as_slice();
        if samples.is_empty() {
            return Self {
                sample_rate,
                ..Self::default()
            };
        }

        let peak = samples
            .iter()
            .map(|s| s.unsigned_abs())
            .max()
            .unwrap_or(0);
        let sum_sq: f64 = samples.iter().map(|&s| f64::from(s) * f64::from(s)).sum();

        Self {
            frames: buffer.frames(),
            sample_rate,
            peak,
            rms: (sum_sq / samples.len() as f64).sqrt(),
            dominant_frequency: dominant_frequency(buffer, sample_rate),
        }
    }

    /// Duration in seconds. Zero when the rate is zero.
    pub fn duration_seconds(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.frames as f64 / f64::from(self.sample_rate)
    }

    /// Peak relative to full scale, in dBFS. `-inf` for silence.
    pub fn peak_dbfs(&self) -> f64 {
        20.0 * (f64::from(self.peak) / 32768.0).log10()
    }
}

/// Strongest frequency of the first channel, in Hz.
///
/// Takes an FFT over the first [`SPECTRUM_WINDOW`] samples of channel 0 and
/// returns the centre of the loudest bin between DC and Nyquist (both
/// excluded). The result is quantised to `sample_rate / n` for a window of
/// `n` samples; ties go to the lower bin.
///
/// Returns 0 for silence, for a zero rate, and for windows shorter than four
/// samples.
pub fn dominant_frequency(buffer: &SampleBuffer, sample_rate: u32) -> f64 {
    let mut spectrum: Vec<Complex<f64>> = buffer
        .as_slice()
        .iter()
        .step_by(buffer.channels())
        .take(SPECTRUM_WINDOW)
        .map(|&s| Complex::new(f64::from(s), 0.0))
        .collect();
    let n = spectrum.len();
    if sample_rate == 0 || n < 4 {
        return 0.0;
    }

    let fft = FftPlanner::<f64>::new().plan_fft_forward(n);
    fft.process(&mut spectrum);

    let (offset, power) = spectrum[1..n / 2]
        .iter()
        .map(|c| c.norm_sqr())
        .enumerate()
        .fold((0, 0.0), |best, (i, p)| if p > best.1 { (i, p) } else { best });
    if power == 0.0 {
        return 0.0;
    }

    (offset + 1) as f64 * f64::from(sample_rate) / n as f64
}
