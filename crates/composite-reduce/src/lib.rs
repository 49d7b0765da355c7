//! Reduction strategies for temporal compositing
//!
//! Seven interchangeable ways to collapse a window of observations into
//! one value per band, behind the [`Reducer`] trait: a center-date linear
//! fit (weighted or robust), HOT-index and shadow-penalized weighted
//! averages, plain average, per-band median, NIR-rank median select, and
//! the valid-observation count. Which one runs is the orchestrator's
//! choice via [`dispatch::reduce`]; no reducer inspects the method code.

pub mod average;
pub mod count;
pub mod dispatch;
pub mod fitted;
pub mod hot;
pub mod median;
pub mod select;
pub mod shadow;
pub mod traits;
pub mod weights;

pub use average::PlainAverage;
pub use count::ValidCount;
pub use dispatch::reduce;
pub use fitted::CenterDateFit;
pub use hot::HotWeightedAverage;
pub use median::BandwiseMedian;
pub use select::NirRankSelect;
pub use shadow::ShadowWeightedAverage;
pub use traits::{ReduceContext, Reducer};
pub use weights::{hot_index, inverse_hot_squared_weights, inverse_hot_weights, weighted_mean};
