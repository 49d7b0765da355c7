//! Two-stage residual cloud/shadow screen
//!
//! Residual cloud brightens the green band above the seasonal trend;
//! residual shadow darkens the near-infrared band below it. Each stage
//! robust-fits its band against date and flags one tail of the residual
//! distribution, scaled by the variogram dispersion of the pre-screen
//! window (robust to the trend itself). A stage that would leave fewer
//! than the minimum sample is reverted wholesale: an over-aggressive
//! screen must never starve the reducer.

use crate::threshold::ScreenThreshold;
use composite_core::{
    Band, DiagnosticRecord, FitCoefficients, RejectedDates, Result, ScreenStage, Series,
    MIN_SAMPLE,
};
use composite_stats::{robust_fit, series_dispersion};
use log::debug;

/// Which residual tail a stage rejects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tail {
    /// Reject observations far above the fit (bright cloud).
    Upper,
    /// Reject observations far below the fit (dark shadow).
    Lower,
}

/// One one-sided robust-regression test over a single band.
///
/// Fills `mask` (true = reject) parallel to `series` and returns the fit.
pub fn band_test(
    series: &Series,
    band: Band,
    tail: Tail,
    threshold: ScreenThreshold,
    dispersion: f32,
    mask: &mut Vec<bool>,
) -> Result<FitCoefficients> {
    let x: Vec<f64> = series.dates().iter().map(|&d| d as f64).collect();
    let y: Vec<f64> = series.band(band).iter().map(|&v| v as f64).collect();
    let fit = robust_fit(&x, &y)?;

    let margin = threshold.z() * dispersion as f64;
    mask.clear();
    for (&xi, &yi) in x.iter().zip(&y) {
        let excess = yi - fit.predict(xi);
        mask.push(match tail {
            Tail::Upper => excess > margin,
            Tail::Lower => excess < -margin,
        });
    }
    Ok(fit)
}

/// Copy mask-accepted observations of `input` into `out`, recording the
/// rejected dates. Returns the accepted count.
fn partition_into(
    input: &Series,
    mask: &[bool],
    out: &mut Series,
    rejected: &mut RejectedDates,
) -> usize {
    out.clear();
    for i in 0..input.len() {
        if mask[i] {
            rejected.push(input.dates()[i]);
        } else {
            out.push(input.observation(i));
        }
    }
    out.len()
}

/// The sequential green-then-NIR outlier screen.
#[derive(Debug, Clone, Copy)]
pub struct OutlierScreen {
    threshold: ScreenThreshold,
    min_sample: usize,
}

impl Default for OutlierScreen {
    fn default() -> Self {
        Self {
            threshold: ScreenThreshold::default(),
            min_sample: MIN_SAMPLE,
        }
    }
}

impl OutlierScreen {
    /// Screen with an explicit threshold and minimum surviving sample.
    pub fn new(threshold: ScreenThreshold, min_sample: usize) -> Self {
        Self {
            threshold,
            min_sample,
        }
    }

    fn run_stage(
        &self,
        input: &Series,
        band: Band,
        tail: Tail,
        dispersion: f32,
        out: &mut Series,
        mask: &mut Vec<bool>,
    ) -> Result<ScreenStage> {
        let fit = band_test(input, band, tail, self.threshold, dispersion, mask)?;
        let mut rejected = RejectedDates::default();
        let survivors = partition_into(input, mask, out, &mut rejected);

        let accepted = survivors >= self.min_sample;
        if !accepted {
            // The stage would starve the reducer; restore the full input.
            debug!(
                "{band} screen reverted: {survivors} of {} below minimum {}",
                input.len(),
                self.min_sample
            );
            out.assign_from(&input.as_view());
        }
        Ok(ScreenStage {
            fit,
            accepted,
            rejected,
        })
    }

    /// Run both stages over `input`.
    ///
    /// `stage` receives the green-stage survivors, `out` the final screened
    /// set the reducer consumes; both are sized to the input. Per-stage
    /// diagnostics land in `diag` when requested.
    pub fn apply(
        &self,
        input: &Series,
        stage: &mut Series,
        out: &mut Series,
        mask: &mut Vec<bool>,
        diag: Option<&mut DiagnosticRecord>,
    ) -> Result<()> {
        // Dispersions come from the pre-screen window once; the NIR stage
        // intentionally reuses them.
        let dispersion = series_dispersion(input)?;

        let green = self.run_stage(
            input,
            Band::Green,
            Tail::Upper,
            dispersion.band(Band::Green),
            stage,
            mask,
        )?;
        let nir = self.run_stage(
            stage,
            Band::Nir,
            Tail::Lower,
            dispersion.band(Band::Nir),
            out,
            mask,
        )?;

        if let Some(record) = diag {
            record.green = Some(green);
            record.nir = Some(nir);
        }
        Ok(())
    }
}
