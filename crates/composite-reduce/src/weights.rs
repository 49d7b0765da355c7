//! Observation weighting shared by the weighted-average reducers
//!
//! The HOT (haze-optimized transformation) proxy `blue − 0.5·red` sits
//! near zero for clear observations, so its inverse is a confidence
//! weight. Denominators are clamped away from zero; the original divides
//! unguarded.

use composite_core::{Band, Series, MIN_WEIGHT_DENOM, NUM_BANDS};

/// HOT proxy for one observation.
#[inline]
pub fn hot_index(blue: f32, red: f32) -> f64 {
    blue as f64 - 0.5 * red as f64
}

/// Clamp a weighting denominator's magnitude away from zero.
#[inline]
pub(crate) fn clamp_magnitude(value: f64) -> f64 {
    value.abs().max(MIN_WEIGHT_DENOM)
}

/// Inverse-HOT weights, `1 / |blue − 0.5·red|`, used by the weighted
/// center-date fit.
pub fn inverse_hot_weights(series: &Series) -> Vec<f64> {
    series
        .band(Band::Blue)
        .iter()
        .zip(series.band(Band::Red))
        .map(|(&blue, &red)| 1.0 / clamp_magnitude(hot_index(blue, red)))
        .collect()
}

/// Inverse-squared-HOT weights, `1 / (blue − 0.5·red)²`, used by the HOT
/// weighted average.
pub fn inverse_hot_squared_weights(series: &Series) -> Vec<f64> {
    series
        .band(Band::Blue)
        .iter()
        .zip(series.band(Band::Red))
        .map(|(&blue, &red)| {
            let denom = clamp_magnitude(hot_index(blue, red));
            1.0 / (denom * denom)
        })
        .collect()
}

/// Per-band weighted mean. Invariant to uniform weight scaling.
pub fn weighted_mean(series: &Series, weights: &[f64]) -> [f32; NUM_BANDS] {
    debug_assert_eq!(series.len(), weights.len());
    let total: f64 = weights.iter().sum();
    let mut out = [0.0f32; NUM_BANDS];
    for band in Band::ALL {
        let sum: f64 = series
            .band(band)
            .iter()
            .zip(weights)
            .map(|(&v, &w)| v as f64 * w)
            .sum();
        out[band.index()] = (sum / total) as f32;
    }
    out
}
