//! Uniform reducer interface
//!
//! Every reduction strategy consumes a window-selected (and possibly
//! screen-filtered) series and produces one value per band. Degenerate
//! inputs are part of the contract: below the strategy's minimum sample
//! the output is the fill vector, never an error.

use composite_core::{DiagnosticRecord, Result, Series, Window, FILL_VALUE, NUM_BANDS};

/// Per-call context shared by all reducers.
#[derive(Debug, Clone, Copy)]
pub struct ReduceContext {
    /// The compositing window; fitted reducers evaluate at its center.
    pub window: Window,
    /// Fill value for degenerate inputs.
    pub fill: f32,
}

impl ReduceContext {
    /// Context with the default fill value.
    pub fn new(window: Window) -> Self {
        Self {
            window,
            fill: FILL_VALUE,
        }
    }

    /// The all-bands fill vector.
    #[inline]
    pub fn fill_bands(&self) -> [f32; NUM_BANDS] {
        [self.fill; NUM_BANDS]
    }
}

/// A reduction strategy.
pub trait Reducer {
    /// Short human-readable name.
    fn name(&self) -> &'static str;

    /// Fewest observations this strategy can reduce meaningfully.
    fn min_samples(&self) -> usize {
        1
    }

    /// Reduce a series known to meet [`Reducer::min_samples`].
    fn reduce_valid(
        &self,
        series: &Series,
        ctx: &ReduceContext,
        diag: Option<&mut DiagnosticRecord>,
    ) -> Result<[f32; NUM_BANDS]>;

    /// Reduce any series; inputs below the minimum sample yield fill.
    fn reduce(
        &self,
        series: &Series,
        ctx: &ReduceContext,
        diag: Option<&mut DiagnosticRecord>,
    ) -> Result<[f32; NUM_BANDS]> {
        if series.len() < self.min_samples().max(1) {
            return Ok(ctx.fill_bands());
        }
        self.reduce_valid(series, ctx, diag)
    }
}
