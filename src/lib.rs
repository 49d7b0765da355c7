//! Temporal compositing of multi-band surface-reflectance time series
//!
//! Reduces a per-location history of four-band observations into one
//! "best" value per band for a date window: a two-stage robust-regression
//! screen removes residual cloud and shadow, and one of seven reduction
//! strategies collapses what remains. This crate re-exports the workspace
//! members; see each for the details:
//!
//! - [`core`] — observation/series/window types, configuration,
//!   diagnostics, errors, scratch pooling
//! - [`stats`] — order statistics, variogram dispersion, mean/RMSE,
//!   ordinary/weighted/robust regression
//! - [`screen`] — the green/NIR outlier screen
//! - [`reduce`] — the reducer family
//! - [`engine`] — the per-pixel and per-scanline drivers
//!
//! # Example
//!
//! ```rust
//! use temporal_composite::{
//!     CompositeConfig, Compositor, Method, Observation, Series, Window,
//! };
//!
//! let series: Series = (0..8)
//!     .map(|k| {
//!         let date = 110 + k * 10;
//!         Observation::new(date, [210.0, 300.0, 260.0, 2800.0 + k as f32])
//!     })
//!     .collect();
//!
//! let compositor = Compositor::new(CompositeConfig::new(Method::Median)).unwrap();
//! let window = Window::new(100, 200).unwrap();
//! let composite = compositor
//!     .composite_pixel(&series.as_view(), window, None)
//!     .unwrap();
//! assert_ne!(composite, [-9999.0; 4]);
//! ```

pub use composite_core as core;
pub use composite_engine as engine;
pub use composite_reduce as reduce;
pub use composite_screen as screen;
pub use composite_stats as stats;

// The everyday surface, flattened.
pub use composite_core::{
    Band, CompositeConfig, Condition, DiagnosticRecord, Error, FitCoefficients, Method,
    Observation, Result, Series, SeriesView, Window, FILL_VALUE, MIN_SAMPLE, NUM_BANDS,
};
pub use composite_engine::{median_filter_scanlines, Compositor, ScanlineBuffer};
pub use composite_screen::{OutlierScreen, ScreenThreshold};
