//! Residual cloud/shadow outlier screen
//!
//! Applied between window selection and the fitted reducers: a green-band
//! upper-tail test for residual cloud followed by a NIR-band lower-tail
//! test for residual shadow, each backed by a bisquare robust fit and a
//! variogram-scaled threshold, each reverting wholesale when it would
//! leave fewer than the minimum sample.

pub mod screen;
pub mod threshold;

pub use screen::{band_test, OutlierScreen, Tail};
pub use threshold::ScreenThreshold;
