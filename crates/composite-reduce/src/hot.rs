//! HOT-weighted average reducer

use crate::traits::{ReduceContext, Reducer};
use crate::weights::{inverse_hot_squared_weights, weighted_mean};
use composite_core::{DiagnosticRecord, Result, Series, NUM_BANDS};

/// Weighted mean with `1/(blue − 0.5·red)²` confidence weights: a
/// near-zero HOT proxy means little residual haze, so the observation
/// dominates the average.
#[derive(Debug, Clone, Copy, Default)]
pub struct HotWeightedAverage;

impl Reducer for HotWeightedAverage {
    fn name(&self) -> &'static str {
        "hot-weighted-average"
    }

    fn reduce_valid(
        &self,
        series: &Series,
        _ctx: &ReduceContext,
        _diag: Option<&mut DiagnosticRecord>,
    ) -> Result<[f32; NUM_BANDS]> {
        let weights = inverse_hot_squared_weights(series);
        Ok(weighted_mean(series, &weights))
    }
}
