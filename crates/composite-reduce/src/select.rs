//! NIR-rank median observation reducer

use crate::traits::{ReduceContext, Reducer};
use composite_core::{Band, DiagnosticRecord, Result, Series, NUM_BANDS};
use ordered_float::OrderedFloat;

/// Orders observations by their NIR value and selects the whole multi-band
/// observation at the median *position* — unlike the per-band median, the
/// output is one real observation (or the per-band mean of the central
/// pair), so cross-band consistency is preserved.
#[derive(Debug, Clone, Copy, Default)]
pub struct NirRankSelect;

impl Reducer for NirRankSelect {
    fn name(&self) -> &'static str {
        "nir-rank-select"
    }

    fn reduce_valid(
        &self,
        series: &Series,
        _ctx: &ReduceContext,
        _diag: Option<&mut DiagnosticRecord>,
    ) -> Result<[f32; NUM_BANDS]> {
        let nir = series.band(Band::Nir);
        let mut order: Vec<usize> = (0..series.len()).collect();
        order.sort_unstable_by_key(|&i| OrderedFloat(nir[i]));

        let n = order.len();
        let m = n / 2;
        let mut out = [0.0f32; NUM_BANDS];
        if n % 2 == 0 {
            let lo = series.observation(order[m - 1]);
            let hi = series.observation(order[m]);
            for b in 0..NUM_BANDS {
                out[b] = (lo.bands[b] + hi.bands[b]) / 2.0;
            }
        } else {
            out = series.observation(order[m]).bands;
        }
        Ok(out)
    }
}
