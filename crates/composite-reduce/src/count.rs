//! Valid-observation count reducer

use crate::traits::{ReduceContext, Reducer};
use composite_core::{DiagnosticRecord, Result, Series, NUM_BANDS};

/// Writes the in-window observation count into every band slot. A
/// diagnostic utility for coverage maps, not a real composite.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidCount;

impl Reducer for ValidCount {
    fn name(&self) -> &'static str {
        "valid-count"
    }

    fn reduce_valid(
        &self,
        series: &Series,
        _ctx: &ReduceContext,
        _diag: Option<&mut DiagnosticRecord>,
    ) -> Result<[f32; NUM_BANDS]> {
        Ok([series.len() as f32; NUM_BANDS])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use composite_core::{Observation, Series, Window};

    #[test]
    fn test_count_in_every_band() {
        let ctx = ReduceContext::new(Window::new(0, 100).unwrap());
        let series: Series = (0..7)
            .map(|i| Observation::new(i, [0.0; 4]))
            .collect();
        let out = ValidCount.reduce(&series, &ctx, None).unwrap();
        assert_eq!(out, [7.0; 4]);
    }

    #[test]
    fn test_empty_yields_fill() {
        let ctx = ReduceContext::new(Window::new(0, 100).unwrap());
        let out = ValidCount.reduce(&Series::new(), &ctx, None).unwrap();
        assert_eq!(out, [-9999.0; 4]);
    }
}
