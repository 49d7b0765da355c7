//! Core types for temporal reflectance compositing
//!
//! This crate carries the data model shared by the whole workspace: the
//! four-band observation/series types, the date window, run configuration,
//! the diagnostic record, the workspace-wide error type, and the pooled
//! per-pixel scratch buffers. It has no algorithmic content of its own;
//! statistics, screening, reduction, and orchestration live in the sibling
//! crates.

pub mod config;
pub mod consts;
pub mod diagnostics;
pub mod error;
pub mod scratch;
pub mod types;
pub mod window;

pub use config::{CompositeConfig, Method};
pub use consts::{
    FILL_VALUE, MAX_REJECTED_DATES, MIN_SAMPLE, MIN_WEIGHT_DENOM, NUM_BANDS, SINGLE_TAIL_Z_99,
    SINGLE_TAIL_Z_999, SINGLE_TAIL_Z_9999,
};
pub use diagnostics::{Condition, DiagnosticRecord, RejectedDates, ScreenStage};
pub use error::{Error, Result};
pub use scratch::{PixelScratch, ScratchGuard, ScratchPool};
pub use types::{Band, FitCoefficients, Observation, Series, SeriesView};
pub use window::{select_into, Window};
