//! Method-to-reducer dispatch

use crate::average::PlainAverage;
use crate::count::ValidCount;
use crate::fitted::CenterDateFit;
use crate::hot::HotWeightedAverage;
use crate::median::BandwiseMedian;
use crate::select::NirRankSelect;
use crate::shadow::ShadowWeightedAverage;
use crate::traits::{ReduceContext, Reducer};
use composite_core::{DiagnosticRecord, Method, Result, Series, NUM_BANDS};

/// Run the reducer selected by `method` over `series`.
pub fn reduce(
    method: Method,
    series: &Series,
    ctx: &ReduceContext,
    diag: Option<&mut DiagnosticRecord>,
) -> Result<[f32; NUM_BANDS]> {
    match method {
        Method::Fitted { weighted } => CenterDateFit::new(weighted).reduce(series, ctx, diag),
        Method::HotAverage => HotWeightedAverage.reduce(series, ctx, diag),
        Method::ShadowHotAverage => ShadowWeightedAverage.reduce(series, ctx, diag),
        Method::Average => PlainAverage.reduce(series, ctx, diag),
        Method::Median => BandwiseMedian.reduce(series, ctx, diag),
        Method::QuantileMedian => NirRankSelect.reduce(series, ctx, diag),
        Method::ValidCount => ValidCount.reduce(series, ctx, diag),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use composite_core::{Observation, Window};

    const ALL_METHODS: [Method; 8] = [
        Method::Fitted { weighted: true },
        Method::Fitted { weighted: false },
        Method::HotAverage,
        Method::ShadowHotAverage,
        Method::Average,
        Method::Median,
        Method::QuantileMedian,
        Method::ValidCount,
    ];

    #[test]
    fn test_every_method_fills_on_empty_input() {
        let ctx = ReduceContext::new(Window::new(100, 200).unwrap());
        for method in ALL_METHODS {
            let out = reduce(method, &Series::new(), &ctx, None).unwrap();
            assert_eq!(out, [-9999.0; 4], "{}", method.name());
        }
    }

    #[test]
    fn test_identity_for_single_observation() {
        let ctx = ReduceContext::new(Window::new(100, 200).unwrap());
        let series: Series = [Observation::new(150, [9.0, 8.0, 7.0, 6.0])]
            .into_iter()
            .collect();
        // Shadow needs three observations and the count is not a composite;
        // every other method passes a lone observation through unchanged.
        for method in [
            Method::Fitted { weighted: true },
            Method::Fitted { weighted: false },
            Method::HotAverage,
            Method::Average,
            Method::Median,
            Method::QuantileMedian,
        ] {
            let out = reduce(method, &series, &ctx, None).unwrap();
            assert_eq!(out, [9.0, 8.0, 7.0, 6.0], "{}", method.name());
        }
    }
}
