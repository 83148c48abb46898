//! Pitch factor.

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Multiplier applied to the read rate of a sample stream.
///
/// Output index `i` reads source position `i / factor`. Always positive and finite.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct PitchFactor(f64);

impl PitchFactor {
    /// Identity factor: output is a copy of the input.
    pub const UNITY: Self = Self(1.0);

    pub fn new(value: f64) -> Result<Self> {
        if value.is_finite() && value > 0.0 {
            Ok(Self(value))
        } else {
            Err(Error::InvalidParameter(value))
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_unity(&self) -> bool {
        self.0 == 1.0
    }
}

impl Default for PitchFactor {
    fn default() -> Self {
        Self::UNITY
    }
}

impl TryFrom<f64> for PitchFactor {
    type Error = Error;

    fn try_from(value: f64) -> Result<Self> {
        Self::new(value)
    }
}

impl FromStr for PitchFactor {
    type Err = Error;

    /// Unparseable text is reported as an invalid (NaN) factor.
    fn from_str(s: &str) -> Result<Self> {
        let value = s.trim().parse::<f64>().unwrap_or(f64::NAN);
        Self::new(value)
    }
}

impl fmt::Display for PitchFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "{:.*}", p, self.0),
            None => write!(f, "{}", self.0),
        }
    }
}
