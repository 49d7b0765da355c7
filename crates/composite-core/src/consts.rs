//! Shared constants for the compositing workspace

/// Number of reflectance bands carried per observation (blue, green, red, NIR).
pub const NUM_BANDS: usize = 4;

/// Output value written to every band when a location has no usable data.
pub const FILL_VALUE: f32 = -9999.0;

/// Minimum observation count for a fit or a screen stage to be trusted.
///
/// A screen stage that would leave fewer survivors is reverted; a window
/// with fewer observations is routed to the median fallback.
pub const MIN_SAMPLE: usize = 5;

/// Capacity of the per-stage rejected-date list in a diagnostic record.
pub const MAX_REJECTED_DATES: usize = 90;

/// One-sided z threshold at the 0.99 quantile.
pub const SINGLE_TAIL_Z_99: f64 = 2.32;

/// One-sided z threshold at the 0.999 quantile.
pub const SINGLE_TAIL_Z_999: f64 = 3.09;

/// One-sided z threshold at the 0.9999 quantile. Default screen threshold.
pub const SINGLE_TAIL_Z_9999: f64 = 3.71;

/// Smallest magnitude allowed for a weighting denominator (HOT index,
/// blue-band cube). Denominators closer to zero are clamped to this value
/// so a single pathological observation cannot blow up a weighted mean.
pub const MIN_WEIGHT_DENOM: f64 = 1e-6;
