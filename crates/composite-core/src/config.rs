//! Run-wide compositing configuration
//!
//! The reduction method and screen thresholds are fixed per run, never per
//! pixel. The configuration is read-only once a run starts.

use crate::consts::{FILL_VALUE, MIN_SAMPLE, SINGLE_TAIL_Z_9999};
use serde::{Deserialize, Serialize};

/// Reduction strategy for one compositing run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Method {
    /// Per-band linear fit against date, evaluated at the window center.
    /// `weighted` selects HOT-inverse weighted least squares; otherwise a
    /// bisquare robust fit is used. The only method family that runs the
    /// outlier screen first.
    Fitted { weighted: bool },
    /// Weighted mean with haze-optimized (blue/red) inverse weights.
    HotAverage,
    /// HOT weighting with an additional steep penalty for observations
    /// darker than the window NIR median.
    ShadowHotAverage,
    /// Unweighted per-band mean.
    Average,
    /// Per-band independent median.
    Median,
    /// The multi-band observation at the NIR-rank median position.
    QuantileMedian,
    /// In-window observation count written to every band.
    ValidCount,
}

impl Method {
    /// Whether this method runs the two-stage outlier screen first.
    #[inline]
    pub fn needs_screen(&self) -> bool {
        matches!(self, Method::Fitted { .. })
    }

    /// Short human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Method::Fitted { weighted: true } => "fitted-weighted",
            Method::Fitted { weighted: false } => "fitted-robust",
            Method::HotAverage => "hot-average",
            Method::ShadowHotAverage => "shadow-hot-average",
            Method::Average => "average",
            Method::Median => "median",
            Method::QuantileMedian => "quantile-median",
            Method::ValidCount => "valid-count",
        }
    }
}

impl Default for Method {
    /// The shadow-penalized weighted average, the production default.
    fn default() -> Self {
        Method::ShadowHotAverage
    }
}

/// Configuration for a compositing run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompositeConfig {
    /// Selected reduction strategy.
    pub method: Method,
    /// One-sided z threshold used by both screen stages.
    pub screen_threshold: f64,
    /// Minimum observations for a fit or a surviving screen stage.
    pub min_sample: usize,
    /// Value written to all bands when no usable data exists.
    pub fill: f32,
}

impl Default for CompositeConfig {
    fn default() -> Self {
        Self {
            method: Method::default(),
            screen_threshold: SINGLE_TAIL_Z_9999,
            min_sample: MIN_SAMPLE,
            fill: FILL_VALUE,
        }
    }
}

impl CompositeConfig {
    /// Default configuration with the given method.
    pub fn new(method: Method) -> Self {
        Self {
            method,
            ..Self::default()
        }
    }

    /// Override the screen threshold.
    pub fn with_screen_threshold(mut self, threshold: f64) -> Self {
        self.screen_threshold = threshold;
        self
    }

    /// Override the minimum sample count.
    pub fn with_min_sample(mut self, min_sample: usize) -> Self {
        self.min_sample = min_sample;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_fitted_methods_screen() {
        assert!(Method::Fitted { weighted: true }.needs_screen());
        assert!(Method::Fitted { weighted: false }.needs_screen());
        for method in [
            Method::HotAverage,
            Method::ShadowHotAverage,
            Method::Average,
            Method::Median,
            Method::QuantileMedian,
            Method::ValidCount,
        ] {
            assert!(!method.needs_screen(), "{} should not screen", method.name());
        }
    }

    #[test]
    fn test_default_config() {
        let config = CompositeConfig::default();
        assert_eq!(config.method, Method::ShadowHotAverage);
        assert_eq!(config.min_sample, 5);
        assert_eq!(config.fill, -9999.0);
        assert_eq!(config.screen_threshold, 3.71);
    }

    #[test]
    fn test_builder_overrides() {
        let config = CompositeConfig::new(Method::Fitted { weighted: true })
            .with_screen_threshold(3.09)
            .with_min_sample(7);
        assert_eq!(config.screen_threshold, 3.09);
        assert_eq!(config.min_sample, 7);
    }
}
