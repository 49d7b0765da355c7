//! Linear regression against ordinal date
//!
//! Three fits share one contract: two slices of equal length, a
//! [`FitCoefficients`] out. Degenerate designs never error — a single point
//! or a zero-spread abscissa yields a flat line through the mean, and a
//! collapsed weight vector falls back to the unweighted estimate. The
//! robust fit is iteratively reweighted least squares with Tukey's
//! bisquare, the primitive both screen stages and the robust reducer lean
//! on.

use crate::order::median;
use composite_core::{Error, FitCoefficients, Result};

/// Bisquare tuning constant, 95% efficiency at the normal distribution.
const BISQUARE_TUNING: f64 = 4.685;

/// MAD-to-sigma consistency factor for normally distributed residuals.
const MAD_CONSISTENCY: f64 = 0.6745;

/// Iteration cap for the reweighting loop.
const MAX_ITERATIONS: usize = 30;

/// Relative coefficient-change tolerance declaring convergence.
const COEF_TOLERANCE: f64 = 1e-8;

fn check_lengths(x: &[f64], y: &[f64]) -> Result<()> {
    if x.is_empty() {
        return Err(Error::empty_input());
    }
    if x.len() != y.len() {
        return Err(Error::size_mismatch(x.len(), y.len(), "regression input"));
    }
    Ok(())
}

/// Ordinary least-squares intercept/slope.
pub fn ols_fit(x: &[f64], y: &[f64]) -> Result<FitCoefficients> {
    check_lengths(x, y)?;
    let n = x.len() as f64;
    let mean_x = x.iter().sum::<f64>() / n;
    let mean_y = y.iter().sum::<f64>() / n;

    let mut sxx = 0.0;
    let mut sxy = 0.0;
    for (&xi, &yi) in x.iter().zip(y) {
        let dx = xi - mean_x;
        sxx += dx * dx;
        sxy += dx * (yi - mean_y);
    }
    if sxx <= f64::EPSILON * n * mean_x.abs().max(1.0) {
        // No date spread: a flat line through the mean.
        return Ok(FitCoefficients::new(mean_y, 0.0));
    }
    let slope = sxy / sxx;
    Ok(FitCoefficients::new(mean_y - slope * mean_x, slope))
}

/// Weighted least squares from the closed-form weighted normal equations.
///
/// Non-positive or non-finite total weight falls back to the unweighted
/// fit rather than erroring.
pub fn weighted_fit(x: &[f64], y: &[f64], weights: &[f64]) -> Result<FitCoefficients> {
    check_lengths(x, y)?;
    if weights.len() != x.len() {
        return Err(Error::size_mismatch(x.len(), weights.len(), "weight vector"));
    }

    let total: f64 = weights.iter().sum();
    if !total.is_finite() || total <= 0.0 {
        return ols_fit(x, y);
    }

    let mean_x = x.iter().zip(weights).map(|(&xi, &wi)| wi * xi).sum::<f64>() / total;
    let mean_y = y.iter().zip(weights).map(|(&yi, &wi)| wi * yi).sum::<f64>() / total;

    let mut sxx = 0.0;
    let mut sxy = 0.0;
    for ((&xi, &yi), &wi) in x.iter().zip(y).zip(weights) {
        let dx = xi - mean_x;
        sxx += wi * dx * dx;
        sxy += wi * dx * (yi - mean_y);
    }
    if sxx <= f64::EPSILON * total * mean_x.abs().max(1.0) {
        return Ok(FitCoefficients::new(mean_y, 0.0));
    }
    let slope = sxy / sxx;
    Ok(FitCoefficients::new(mean_y - slope * mean_x, slope))
}

/// Resistant starting line: median of pairwise slopes, then the median
/// intercept under that slope. The ordinary fit is a poor seed for the
/// reweighting loop — a gross outlier at the window edge can tilt it into
/// a basin the bisquare weights never escape at small n — while the
/// median slope starts on the clean majority by construction.
fn median_slope_seed(x: &[f64], y: &[f64]) -> Result<FitCoefficients> {
    let n = x.len();
    let mut slopes = Vec::with_capacity(n * (n - 1) / 2);
    for i in 0..n {
        for j in (i + 1)..n {
            let dx = x[j] - x[i];
            if dx.abs() > f64::EPSILON * x[i].abs().max(1.0) {
                slopes.push((y[j] - y[i]) / dx);
            }
        }
    }
    if slopes.is_empty() {
        // No date spread anywhere: flat line through the median value.
        return Ok(FitCoefficients::new(median(y)?, 0.0));
    }
    let slope = median(&slopes)?;
    let offsets: Vec<f64> = x.iter().zip(y).map(|(&xi, &yi)| yi - slope * xi).collect();
    Ok(FitCoefficients::new(median(&offsets)?, slope))
}

/// Robust intercept/slope via iteratively reweighted least squares with
/// Tukey's bisquare weight function.
///
/// Seeded from the median-slope line; residuals are standardized by the
/// MAD scale and points beyond the tuning cutoff get zero weight, so a
/// minority of outlying observations cannot drag the line. Converges on
/// coefficient change or after [`MAX_ITERATIONS`].
pub fn robust_fit(x: &[f64], y: &[f64]) -> Result<FitCoefficients> {
    check_lengths(x, y)?;
    let n = x.len();
    if n <= 2 {
        // A robust line through <= 2 points is the line itself.
        return ols_fit(x, y);
    }
    let mut fit = median_slope_seed(x, y)?;

    let mut residuals = vec![0.0f64; n];
    let mut weights = vec![0.0f64; n];

    for _ in 0..MAX_ITERATIONS {
        for (i, (&xi, &yi)) in x.iter().zip(y).enumerate() {
            residuals[i] = (yi - fit.predict(xi)).abs();
        }
        let scale = median(&residuals)? / MAD_CONSISTENCY;
        if scale <= f64::EPSILON {
            // Majority of points already on the line; nothing to reweight.
            break;
        }

        let cutoff = BISQUARE_TUNING * scale;
        let mut live = 0usize;
        for (wi, &ri) in weights.iter_mut().zip(&residuals) {
            let u = ri / cutoff;
            *wi = if u < 1.0 {
                let t = 1.0 - u * u;
                live += 1;
                t * t
            } else {
                0.0
            };
        }
        if live == 0 {
            break;
        }

        let next = weighted_fit(x, y, &weights)?;
        let delta = (next.intercept - fit.intercept).abs() + (next.slope - fit.slope).abs();
        let magnitude = 1.0 + fit.intercept.abs() + fit.slope.abs();
        fit = next;
        if delta <= COEF_TOLERANCE * magnitude {
            break;
        }
    }
    Ok(fit)
}
