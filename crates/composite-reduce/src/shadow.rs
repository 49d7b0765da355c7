//! Shadow-penalized weighted average reducer

use crate::traits::{ReduceContext, Reducer};
use crate::weights::weighted_mean;
use composite_core::{Band, DiagnosticRecord, Result, Series, MIN_WEIGHT_DENOM, NUM_BANDS};
use composite_stats::median;

/// Exponent of the darkness penalty below the window NIR median.
const SHADOW_PENALTY_POWER: i32 = 5;

/// HOT-style cloud weighting (`1/blue³`) multiplied by a steep penalty for
/// observations darker than the window's NIR median — residual shadow
/// darkens NIR well below the local typical value, and a fifth-power ratio
/// all but removes such observations from the average.
///
/// Needs at least three observations for the NIR median to mean anything;
/// below that the output is fill.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShadowWeightedAverage;

impl Reducer for ShadowWeightedAverage {
    fn name(&self) -> &'static str {
        "shadow-weighted-average"
    }

    fn min_samples(&self) -> usize {
        3
    }

    fn reduce_valid(
        &self,
        series: &Series,
        _ctx: &ReduceContext,
        _diag: Option<&mut DiagnosticRecord>,
    ) -> Result<[f32; NUM_BANDS]> {
        let nir_median = median(series.band(Band::Nir))? as f64;

        let weights: Vec<f64> = series
            .band(Band::Blue)
            .iter()
            .zip(series.band(Band::Nir))
            .map(|(&blue, &nir)| {
                let denom = (blue as f64).abs().max(MIN_WEIGHT_DENOM);
                let cloud = 1.0 / (denom * denom * denom);
                // A non-positive median means the window itself is dark
                // garbage; the penalty is meaningless there.
                let shadow = if nir_median <= 0.0 || nir as f64 >= nir_median {
                    1.0
                } else {
                    (nir as f64 / nir_median)
                        .clamp(0.0, 1.0)
                        .powi(SHADOW_PENALTY_POWER)
                };
                cloud * shadow
            })
            .collect();

        Ok(weighted_mean(series, &weights))
    }
}
