//! One-sided screen threshold
//!
//! Both screen stages compare residuals against `z * dispersion`. The
//! classic constants for the 0.99/0.999/0.9999 single-tail quantiles are
//! available directly; arbitrary confidence levels go through the normal
//! inverse CDF.

use composite_core::{Error, Result, SINGLE_TAIL_Z_9999};
use statrs::distribution::{ContinuousCDF, Normal};

/// Single-tail z multiplier for the outlier screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenThreshold(f64);

impl ScreenThreshold {
    /// Wrap an explicit z value. Must be positive.
    pub fn new(z: f64) -> Result<Self> {
        if !z.is_finite() || z <= 0.0 {
            return Err(Error::InvalidParameter(format!(
                "screen threshold must be positive, got {z}"
            )));
        }
        Ok(Self(z))
    }

    /// Derive the z value for a one-sided confidence level in (0.5, 1).
    pub fn from_confidence(confidence: f64) -> Result<Self> {
        if !(0.5..1.0).contains(&confidence) {
            return Err(Error::InvalidParameter(format!(
                "confidence {confidence} must be in [0.5, 1)"
            )));
        }
        let standard_normal =
            Normal::new(0.0, 1.0).map_err(|e| Error::Computation(e.to_string()))?;
        Self::new(standard_normal.inverse_cdf(confidence))
    }

    /// The z multiplier.
    #[inline]
    pub fn z(&self) -> f64 {
        self.0
    }
}

impl Default for ScreenThreshold {
    /// The 0.9999 single-tail constant used in production.
    fn default() -> Self {
        Self(SINGLE_TAIL_Z_9999)
    }
}
