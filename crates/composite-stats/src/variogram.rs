//! Successive-difference variogram dispersion
//!
//! The dispersion estimate behind both screen thresholds: the median of
//! absolute successive differences along the acquisition order. Unlike a
//! residual RMSE it is insensitive to a seasonal trend and to a single
//! discontinuity, which is exactly what a cloud spike looks like.

use crate::order::{median_sorted, sort_in_place};
use composite_core::{Band, Error, Result, Series, NUM_BANDS};
use num_traits::Float;

/// Median absolute successive difference of `values`.
///
/// `n == 1` yields zero dispersion.
pub fn median_variogram<T: Float>(values: &[T]) -> Result<T> {
    if values.is_empty() {
        return Err(Error::empty_input());
    }
    if values.len() == 1 {
        return Ok(T::zero());
    }
    let mut diffs: Vec<T> = values.windows(2).map(|w| (w[1] - w[0]).abs()).collect();
    sort_in_place(&mut diffs);
    median_sorted(&diffs)
}

/// Variogram dispersions for a whole series: one per band, plus the date
/// spacing statistics the same pass produces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesDispersion {
    /// Per-band median absolute successive difference, in band order.
    pub bands: [f32; NUM_BANDS],
    /// Median gap between neighboring acquisition dates.
    pub date_spacing: f32,
    /// Largest gap between neighboring acquisition dates.
    pub max_date_gap: f32,
}

impl SeriesDispersion {
    /// Dispersion of one band.
    #[inline]
    pub fn band(&self, band: Band) -> f32 {
        self.bands[band.index()]
    }
}

/// Compute [`SeriesDispersion`] over every band of `series`.
///
/// A single-observation series has zero dispersion everywhere.
pub fn series_dispersion(series: &Series) -> Result<SeriesDispersion> {
    if series.is_empty() {
        return Err(Error::empty_input());
    }
    if series.len() == 1 {
        return Ok(SeriesDispersion {
            bands: [0.0; NUM_BANDS],
            date_spacing: 0.0,
            max_date_gap: 0.0,
        });
    }

    let mut gaps: Vec<f32> = series
        .dates()
        .windows(2)
        .map(|w| (w[1] - w[0]).abs() as f32)
        .collect();
    sort_in_place(&mut gaps);
    let date_spacing = median_sorted(&gaps)?;
    let max_date_gap = *gaps.last().expect("non-empty gaps");

    let mut bands = [0.0f32; NUM_BANDS];
    for band in Band::ALL {
        bands[band.index()] = median_variogram(series.band(band))?;
    }

    Ok(SeriesDispersion {
        bands,
        date_spacing,
        max_date_gap,
    })
}
