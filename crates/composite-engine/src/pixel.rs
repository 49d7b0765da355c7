//! Per-pixel compositing state machine
//!
//! One pass, three terminal branches: an empty window fills, a thin window
//! falls back to the per-band median over the full pre-window series, and
//! a healthy window runs the screen (fitted methods only) and the selected
//! reducer. Whatever happens, the caller gets a four-band vector; the only
//! errors are argument errors raised before any per-pixel work starts.

use composite_core::{
    select_into, CompositeConfig, Condition, DiagnosticRecord, PixelScratch, Result, ScratchPool,
    SeriesView, Window, NUM_BANDS,
};
use composite_reduce::{reduce, BandwiseMedian, ReduceContext, Reducer};
use composite_screen::{OutlierScreen, ScreenThreshold};

/// Compositing driver for one run. Configuration is fixed at construction
/// and read-only afterwards; the embedded scratch pool makes a single
/// instance reusable (and shareable) across an entire image.
#[derive(Debug)]
pub struct Compositor {
    config: CompositeConfig,
    screen: OutlierScreen,
    pool: ScratchPool,
}

impl Compositor {
    /// Build a compositor from a run configuration.
    pub fn new(config: CompositeConfig) -> Result<Self> {
        let screen = OutlierScreen::new(
            ScreenThreshold::new(config.screen_threshold)?,
            config.min_sample,
        );
        Ok(Self {
            config,
            screen,
            pool: ScratchPool::default(),
        })
    }

    /// The run configuration.
    pub fn config(&self) -> &CompositeConfig {
        &self.config
    }

    /// Composite one location.
    ///
    /// `series` is the full decoded history for the location; the window
    /// subset is selected here. When `diag` is given, its condition code is
    /// set exactly once and screen/fit details are filled on the branches
    /// that produce them.
    pub fn composite_pixel(
        &self,
        series: &SeriesView<'_>,
        window: Window,
        diag: Option<&mut DiagnosticRecord>,
    ) -> Result<[f32; NUM_BANDS]> {
        let mut guard = self.pool.checkout(series.len());
        self.composite_with_scratch(series, window, &mut guard, diag)
    }

    fn composite_with_scratch(
        &self,
        series: &SeriesView<'_>,
        window: Window,
        scratch: &mut PixelScratch,
        mut diag: Option<&mut DiagnosticRecord>,
    ) -> Result<[f32; NUM_BANDS]> {
        let ctx = ReduceContext {
            window,
            fill: self.config.fill,
        };

        let n_clr = select_into(series, window, &mut scratch.selected);

        if n_clr == 0 {
            if let Some(record) = diag.as_deref_mut() {
                record.condition = Condition::NoObservations;
            }
            return Ok(ctx.fill_bands());
        }

        if n_clr < self.config.min_sample {
            if let Some(record) = diag.as_deref_mut() {
                record.condition = Condition::InsufficientSamples;
            }
            // Too thin to trust a window statistic at all: the fallback
            // median runs over the full pre-window series.
            scratch.stage.assign_from(series);
            return BandwiseMedian.reduce(&scratch.stage, &ctx, diag);
        }

        if let Some(record) = diag.as_deref_mut() {
            record.condition = Condition::Normal;
        }

        if self.config.method.needs_screen() {
            self.screen.apply(
                &scratch.selected,
                &mut scratch.stage,
                &mut scratch.screened,
                &mut scratch.mask,
                diag.as_deref_mut(),
            )?;
            reduce(self.config.method, &scratch.screened, &ctx, diag)
        } else {
            reduce(self.config.method, &scratch.selected, &ctx, diag)
        }
    }
}
