//! Compositing orchestration
//!
//! Drives the pipeline end to end: window selection, the outlier screen
//! for fitted methods, reducer dispatch, and diagnostics — per pixel via
//! [`Compositor::composite_pixel`] and per image row via the
//! [`ScanlineBuffer`] driver. Columns are independent, so the `parallel`
//! feature adds a rayon variant of the row driver. A 3x3 scanline median
//! filter is available as an optional pre-pass.

pub mod filter;
pub mod pixel;
pub mod scanline;

pub use filter::median_filter_scanlines;
pub use pixel::Compositor;
pub use scanline::ScanlineBuffer;
