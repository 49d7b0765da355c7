//! Plain per-band average reducer

use crate::traits::{ReduceContext, Reducer};
use composite_core::{Band, DiagnosticRecord, Result, Series, NUM_BANDS};

/// Unweighted per-band mean over the window.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainAverage;

impl Reducer for PlainAverage {
    fn name(&self) -> &'static str {
        "average"
    }

    fn reduce_valid(
        &self,
        series: &Series,
        _ctx: &ReduceContext,
        _diag: Option<&mut DiagnosticRecord>,
    ) -> Result<[f32; NUM_BANDS]> {
        let n = series.len() as f64;
        let mut out = [0.0f32; NUM_BANDS];
        for band in Band::ALL {
            let sum: f64 = series.band(band).iter().map(|&v| v as f64).sum();
            out[band.index()] = (sum / n) as f32;
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use composite_core::{Observation, Series, Window};

    fn ctx() -> ReduceContext {
        ReduceContext::new(Window::new(0, 100).unwrap())
    }

    #[test]
    fn test_mean_per_band() {
        let series: Series = [
            Observation::new(1, [10.0, 20.0, 30.0, 40.0]),
            Observation::new(2, [20.0, 40.0, 60.0, 80.0]),
        ]
        .into_iter()
        .collect();
        let out = PlainAverage.reduce(&series, &ctx(), None).unwrap();
        assert_relative_eq!(out[0], 15.0);
        assert_relative_eq!(out[3], 60.0);
    }

    #[test]
    fn test_empty_yields_fill() {
        let out = PlainAverage.reduce(&Series::new(), &ctx(), None).unwrap();
        assert_eq!(out, [-9999.0; 4]);
    }
}
