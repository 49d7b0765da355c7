//! Statistics toolkit for temporal compositing
//!
//! Pure numeric primitives shared by the outlier screen and the reducer
//! family: order statistics, the successive-difference variogram, mean/RMSE,
//! and ordinary/weighted/robust linear regression. Everything here is
//! stateless, deterministic given input order, and tolerant of
//! single-observation inputs.

pub mod moments;
pub mod order;
pub mod regression;
pub mod variogram;

pub use moments::mean_rmse;
pub use order::{first_quartile, median, median_sorted, sort_in_place};
pub use regression::{ols_fit, robust_fit, weighted_fit};
pub use variogram::{median_variogram, series_dispersion, SeriesDispersion};
