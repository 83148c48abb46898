//! Pitch shift options.

use repitch_core::PitchFactor;

/// Pitch shift options.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PitchShiftOptions {
    /// Pitch factor.
    pub factor: PitchFactor,
    /// Measure peak/RMS of input and output.
    pub collect_stats: bool,
}

impl PitchShiftOptions {
    pub fn new(factor: PitchFactor) -> Self {
        Self {
            factor,
            ..Default::default()
        }
    }

    pub fn factor(mut self, factor: PitchFactor) -> Self {
        self.factor = factor;
        self
    }

    pub fn collect_stats(mut self, enabled: bool) -> Self {
        self.collect_stats = enabled;
        self
    }
}
