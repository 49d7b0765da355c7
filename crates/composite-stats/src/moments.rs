//! Mean and population RMSE

use composite_core::{Error, Result};
use num_traits::Float;

/// Arithmetic mean and population RMSE around that mean.
///
/// `n == 1` yields the value itself with zero dispersion.
pub fn mean_rmse<T: Float>(values: &[T]) -> Result<(T, T)> {
    if values.is_empty() {
        return Err(Error::empty_input());
    }
    let n = T::from(values.len()).unwrap();
    let mean = values.iter().fold(T::zero(), |acc, &v| acc + v) / n;
    let sum_sq = values
        .iter()
        .fold(T::zero(), |acc, &v| acc + (v - mean) * (v - mean));
    Ok((mean, (sum_sq / n).sqrt()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mean_rmse_basic() {
        let (mean, rmse) = mean_rmse(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        assert_relative_eq!(mean, 5.0);
        assert_relative_eq!(rmse, 2.0);
    }

    #[test]
    fn test_mean_rmse_single() {
        let (mean, rmse) = mean_rmse(&[3.5f32]).unwrap();
        assert_relative_eq!(mean, 3.5);
        assert_relative_eq!(rmse, 0.0);
    }

    #[test]
    fn test_mean_rmse_empty_errors() {
        assert!(mean_rmse::<f64>(&[]).is_err());
    }
}
