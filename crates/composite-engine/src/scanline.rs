//! Scanline buffers and the per-row driver
//!
//! The decoder hands over one image row at a time: for every column, a
//! variable number of valid observations out of at most `max_scenes`
//! acquisitions. Storage is column-major with a fixed per-column stride so
//! each column exposes its series as contiguous slices, and per-column
//! work touches disjoint output regions — which is what makes the parallel
//! driver safe without any synchronization.

use crate::pixel::Compositor;
use composite_core::{
    DiagnosticRecord, Error, Observation, Result, SeriesView, Window, NUM_BANDS,
};
use log::debug;

/// Owned column-major storage for one decoded scanline.
#[derive(Debug, Clone)]
pub struct ScanlineBuffer {
    num_columns: usize,
    max_scenes: usize,
    counts: Vec<usize>,
    dates: Vec<i32>,
    bands: [Vec<f32>; NUM_BANDS],
}

impl ScanlineBuffer {
    /// Buffer for `num_columns` columns of at most `max_scenes`
    /// observations each.
    pub fn new(num_columns: usize, max_scenes: usize) -> Self {
        let cells = num_columns * max_scenes;
        Self {
            num_columns,
            max_scenes,
            counts: vec![0; num_columns],
            dates: vec![0; cells],
            bands: std::array::from_fn(|_| vec![0.0; cells]),
        }
    }

    /// Number of columns in the row.
    #[inline]
    pub fn num_columns(&self) -> usize {
        self.num_columns
    }

    /// Per-column observation capacity.
    #[inline]
    pub fn max_scenes(&self) -> usize {
        self.max_scenes
    }

    /// Valid observations currently stored for `col`.
    #[inline]
    pub fn count(&self, col: usize) -> usize {
        self.counts[col]
    }

    /// Append one observation to `col`.
    pub fn push(&mut self, col: usize, obs: Observation) -> Result<()> {
        if col >= self.num_columns {
            return Err(Error::InvalidInput(format!(
                "column {col} out of range ({} columns)",
                self.num_columns
            )));
        }
        let k = self.counts[col];
        if k >= self.max_scenes {
            return Err(Error::InvalidInput(format!(
                "column {col} already holds {k} of {} observations",
                self.max_scenes
            )));
        }
        let cell = col * self.max_scenes + k;
        self.dates[cell] = obs.date;
        for (b, band) in self.bands.iter_mut().enumerate() {
            band[cell] = obs.bands[b];
        }
        self.counts[col] = k + 1;
        Ok(())
    }

    /// Drop every observation, keeping the allocation.
    pub fn clear(&mut self) {
        self.counts.iter_mut().for_each(|c| *c = 0);
    }

    /// Date of observation `k` in `col`.
    #[inline]
    pub fn date(&self, col: usize, k: usize) -> i32 {
        debug_assert!(k < self.counts[col]);
        self.dates[col * self.max_scenes + k]
    }

    /// Band value of observation `k` in `col`.
    #[inline]
    pub fn value(&self, col: usize, k: usize, band: usize) -> f32 {
        debug_assert!(k < self.counts[col]);
        self.bands[band][col * self.max_scenes + k]
    }

    /// Borrow column `col` as a series view.
    pub fn column(&self, col: usize) -> SeriesView<'_> {
        let start = col * self.max_scenes;
        let end = start + self.counts[col];
        SeriesView {
            dates: &self.dates[start..end],
            bands: std::array::from_fn(|b| &self.bands[b][start..end]),
        }
    }
}

impl Compositor {
    fn check_scanline_geometry(
        &self,
        scanline: &ScanlineBuffer,
        out: &[[f32; NUM_BANDS]],
        diags: Option<&&mut [DiagnosticRecord]>,
    ) -> Result<()> {
        if out.len() != scanline.num_columns() {
            return Err(Error::size_mismatch(
                scanline.num_columns(),
                out.len(),
                "scanline output row",
            ));
        }
        if let Some(diags) = diags {
            if diags.len() != scanline.num_columns() {
                return Err(Error::size_mismatch(
                    scanline.num_columns(),
                    diags.len(),
                    "scanline diagnostics row",
                ));
            }
        }
        Ok(())
    }

    /// Composite every column of a scanline into `out`.
    ///
    /// `diags`, when given, must hold one record per column.
    pub fn composite_scanline(
        &self,
        scanline: &ScanlineBuffer,
        window: Window,
        out: &mut [[f32; NUM_BANDS]],
        mut diags: Option<&mut [DiagnosticRecord]>,
    ) -> Result<()> {
        self.check_scanline_geometry(scanline, out, diags.as_ref())?;
        for (col, slot) in out.iter_mut().enumerate() {
            let diag = diags.as_deref_mut().map(|d| &mut d[col]);
            *slot = self.composite_pixel(&scanline.column(col), window, diag)?;
        }
        debug!(
            "composited scanline of {} columns ({})",
            scanline.num_columns(),
            self.config().method.name()
        );
        Ok(())
    }

    /// Parallel variant of [`Compositor::composite_scanline`]: columns are
    /// independent, so they split across the rayon pool with each task
    /// writing only its own output slot.
    #[cfg(feature = "parallel")]
    pub fn composite_scanline_par(
        &self,
        scanline: &ScanlineBuffer,
        window: Window,
        out: &mut [[f32; NUM_BANDS]],
        diags: Option<&mut [DiagnosticRecord]>,
    ) -> Result<()> {
        use rayon::prelude::*;

        self.check_scanline_geometry(scanline, out, diags.as_ref())?;
        match diags {
            Some(diags) => out
                .par_iter_mut()
                .zip(diags.par_iter_mut())
                .enumerate()
                .try_for_each(|(col, (slot, diag))| {
                    *slot =
                        self.composite_pixel(&scanline.column(col), window, Some(diag))?;
                    Ok(())
                }),
            None => out.par_iter_mut().enumerate().try_for_each(|(col, slot)| {
                *slot = self.composite_pixel(&scanline.column(col), window, None)?;
                Ok(())
            }),
        }
    }
}
