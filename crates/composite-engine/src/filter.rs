//! 3x3 scanline median filter
//!
//! Optional spatial cleanup the driver may run before compositing: each
//! band value is replaced by the median of its nine-cell neighborhood
//! across the scanline above, at, and below, scene by scene. Edge columns
//! clamp to themselves; at the image top and bottom the caller passes the
//! center scanline twice. Never invoked implicitly by the compositing
//! path.

use crate::scanline::ScanlineBuffer;
use composite_core::{Error, Observation, Result, NUM_BANDS};
use composite_stats::{median_sorted, sort_in_place};

fn check_geometry(a: &ScanlineBuffer, b: &ScanlineBuffer, context: &str) -> Result<()> {
    if a.num_columns() != b.num_columns() || a.max_scenes() != b.max_scenes() {
        return Err(Error::InvalidInput(format!(
            "scanline geometry mismatch in {context}: {}x{} vs {}x{}",
            a.num_columns(),
            a.max_scenes(),
            b.num_columns(),
            b.max_scenes()
        )));
    }
    Ok(())
}

/// Neighbor value for scene `k`, falling back to the center cell when the
/// neighbor column has fewer valid scenes.
#[inline]
fn neighbor_value(
    row: &ScanlineBuffer,
    col: usize,
    k: usize,
    band: usize,
    center: f32,
) -> f32 {
    if k < row.count(col) {
        row.value(col, k, band)
    } else {
        center
    }
}

/// Median-filter `center` against its vertical neighbors into `out`.
///
/// `out` keeps the center scanline's dates and per-column counts; only the
/// band values change.
pub fn median_filter_scanlines(
    above: &ScanlineBuffer,
    center: &ScanlineBuffer,
    below: &ScanlineBuffer,
    out: &mut ScanlineBuffer,
) -> Result<()> {
    check_geometry(center, above, "median filter (above)")?;
    check_geometry(center, below, "median filter (below)")?;
    check_geometry(center, out, "median filter (output)")?;

    out.clear();
    let num_columns = center.num_columns();
    let mut window = [0.0f32; 9];

    for col in 0..num_columns {
        let left = col.saturating_sub(1);
        let right = (col + 1).min(num_columns - 1);
        for k in 0..center.count(col) {
            let mut bands = [0.0f32; NUM_BANDS];
            for (band, value) in bands.iter_mut().enumerate() {
                let middle = center.value(col, k, band);
                for (r, row) in [above, center, below].into_iter().enumerate() {
                    window[r * 3] = neighbor_value(row, left, k, band, middle);
                    window[r * 3 + 1] = neighbor_value(row, col, k, band, middle);
                    window[r * 3 + 2] = neighbor_value(row, right, k, band, middle);
                }
                sort_in_place(&mut window);
                *value = median_sorted(&window)?;
            }
            out.push(col, Observation::new(center.date(col, k), bands))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Rows with one scene per column and a per-row base value; column c
    /// holds base + c in every band.
    fn row(num_columns: usize, base: f32) -> ScanlineBuffer {
        let mut buffer = ScanlineBuffer::new(num_columns, 2);
        for col in 0..num_columns {
            let v = base + col as f32;
            buffer.push(col, Observation::new(100, [v; 4])).unwrap();
        }
        buffer
    }

    #[test]
    fn test_interior_median() {
        let above = row(3, 0.0);
        let center = row(3, 10.0);
        let below = row(3, 20.0);
        let mut out = ScanlineBuffer::new(3, 2);
        median_filter_scanlines(&above, &center, &below, &mut out).unwrap();
        // Column 1 neighborhood: {0,1,2, 10,11,12, 20,21,22} -> median 11.
        assert_eq!(out.value(1, 0, 0), 11.0);
        assert_eq!(out.date(1, 0), 100);
        assert_eq!(out.count(1), 1);
    }

    #[test]
    fn test_edge_columns_clamp() {
        let above = row(3, 0.0);
        let center = row(3, 10.0);
        let below = row(3, 20.0);
        let mut out = ScanlineBuffer::new(3, 2);
        median_filter_scanlines(&above, &center, &below, &mut out).unwrap();
        // Column 0 duplicates itself leftward:
        // {0,0,1, 10,10,11, 20,20,21} -> median 10.
        assert_eq!(out.value(0, 0, 0), 10.0);
        // Column 2 duplicates itself rightward:
        // {1,2,2, 11,12,12, 21,22,22} -> median 12.
        assert_eq!(out.value(2, 0, 0), 12.0);
    }

    #[test]
    fn test_top_row_passes_center_twice() {
        let center = row(3, 10.0);
        let below = row(3, 20.0);
        let mut out = ScanlineBuffer::new(3, 2);
        median_filter_scanlines(&center, &center, &below, &mut out).unwrap();
        // Column 1: {10,11,12, 10,11,12, 20,21,22} -> median 12.
        assert_eq!(out.value(1, 0, 0), 12.0);
    }

    #[test]
    fn test_geometry_mismatch_rejected() {
        let center = row(3, 10.0);
        let other = row(4, 10.0);
        let mut out = ScanlineBuffer::new(3, 2);
        assert!(median_filter_scanlines(&other, &center, &center, &mut out).is_err());
    }

    #[test]
    fn test_short_neighbor_column_falls_back_to_center() {
        let mut above = ScanlineBuffer::new(2, 2);
        above.push(0, Observation::new(100, [5.0; 4])).unwrap();
        // Column 1 of `above` holds nothing.
        let mut center = ScanlineBuffer::new(2, 2);
        center.push(0, Observation::new(100, [10.0; 4])).unwrap();
        center.push(1, Observation::new(100, [30.0; 4])).unwrap();
        let below = center.clone();

        let mut out = ScanlineBuffer::new(2, 2);
        median_filter_scanlines(&above, &center, &below, &mut out).unwrap();
        // Column 1 window: the empty above-row cells fall back to the
        // center value 30; {5,30,30, 10,30,30, 10,30,30} -> median 30.
        assert_eq!(out.value(1, 0, 0), 30.0);
    }
}
