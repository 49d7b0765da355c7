//! Order statistics
//!
//! Sorting-based primitives shared by the variogram, the reducers, and the
//! robust fit's scale estimate. Medians of even-length inputs average the
//! two central elements; the quartile keeps the original `n/4` index
//! convention used for diagnostic output.

use composite_core::{Error, Result};
use num_traits::Float;
use std::cmp::Ordering;

/// Sort a float slice ascending. NaNs are not expected in decoded
/// reflectance data; any that slip through compare as equal instead of
/// poisoning the sort.
pub fn sort_in_place<T: Float>(values: &mut [T]) {
    values.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
}

/// Median of an already-sorted slice.
pub fn median_sorted<T: Float>(sorted: &[T]) -> Result<T> {
    if sorted.is_empty() {
        return Err(Error::empty_input());
    }
    let n = sorted.len();
    let m = n / 2;
    if n % 2 == 0 {
        Ok((sorted[m - 1] + sorted[m]) / T::from(2.0).unwrap())
    } else {
        Ok(sorted[m])
    }
}

/// Median of an unsorted slice. The input is copied; `n == 1` returns the
/// single value.
pub fn median<T: Float>(values: &[T]) -> Result<T> {
    if values.len() == 1 {
        return Ok(values[0]);
    }
    let mut sorted = values.to_vec();
    sort_in_place(&mut sorted);
    median_sorted(&sorted)
}

/// The `floor(n/4)`-th sorted element.
///
/// This is the first-quartile convention of the original diagnostic output;
/// it makes no interpolation claim and is kept verbatim.
pub fn first_quartile<T: Float>(values: &[T]) -> Result<T> {
    if values.is_empty() {
        return Err(Error::empty_input());
    }
    let mut sorted = values.to_vec();
    sort_in_place(&mut sorted);
    Ok(sorted[sorted.len() / 4])
}
