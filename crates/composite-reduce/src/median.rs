//! Per-band median reducer

use crate::traits::{ReduceContext, Reducer};
use composite_core::{Band, DiagnosticRecord, Result, Series, NUM_BANDS};
use composite_stats::median;

/// Per-band independent median: each band is sorted on its own, so the
/// output is generally not any single real observation. Also the fallback
/// the orchestrator runs when a window is too thin to fit.
#[derive(Debug, Clone, Copy, Default)]
pub struct BandwiseMedian;

impl Reducer for BandwiseMedian {
    fn name(&self) -> &'static str {
        "median"
    }

    fn reduce_valid(
        &self,
        series: &Series,
        _ctx: &ReduceContext,
        _diag: Option<&mut DiagnosticRecord>,
    ) -> Result<[f32; NUM_BANDS]> {
        let mut out = [0.0f32; NUM_BANDS];
        for band in Band::ALL {
            out[band.index()] = median(series.band(band))?;
        }
        Ok(out)
    }
}
