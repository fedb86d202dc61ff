//! Sampling rates and the rarefaction schedule.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{RarefactionError, Result};

/// Rate used when none is given on the command line.
pub const DEFAULT_RATE: f64 = 0.05;

/// Largest number of data points a schedule may hold. Every point keeps its
/// own taxon maps, so smaller steps are refused rather than allocated.
pub const MAX_SAMPLING_POINTS: usize = 100_000;

/// A sampling probability in the range `(0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct SamplingRate(f64);

impl SamplingRate {
    /// Validate a raw rate. NaN and values outside `(0, 1]` are rejected.
    pub fn new(value: f64) -> Result<Self> {
        if value > 0.0 && value <= 1.0 {
            Ok(Self(value))
        } else {
            Err(RarefactionError::InvalidRate { value })
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Returns true when a uniform draw in `[0, 1)` falls inside this rate.
    pub fn includes(self, draw: f64) -> bool {
        draw <= self.0
    }

    /// Data points generated from this step size: `rate, 2*rate, ...` for
    /// `floor(1 / rate)` points.
    ///
    /// A step of 0.3 yields 0.3, 0.6 and 0.9; 1.0 is only included when the
    /// step divides it. Fails with `TooManySamplingPoints` when the step
    /// would need more than [`MAX_SAMPLING_POINTS`] points.
    pub fn schedule(self) -> Result<Vec<SamplingRate>> {
        let points = (1.0 / self.0).floor();
        if points > MAX_SAMPLING_POINTS as f64 {
            return Err(RarefactionError::TooManySamplingPoints {
                rate: self.0,
                points,
                limit: MAX_SAMPLING_POINTS,
            });
        }
        Ok((1..=points as usize)
            .map(|step| SamplingRate((step as f64 * self.0).min(1.0)))
            .collect())
    }
}

impl Default for SamplingRate {
    fn default() -> Self {
        Self(DEFAULT_RATE)
    }
}

impl FromStr for SamplingRate {
    type Err = RarefactionError;

    fn from_str(s: &str) -> Result<Self> {
        let value = s
            .trim()
            .parse::<f64>()
            .map_err(|source| RarefactionError::RateParse {
                value: s.to_string(),
                source,
            })?;
        Self::new(value)
    }
}

impl fmt::Display for SamplingRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
