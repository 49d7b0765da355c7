//! Core value types for per-location reflectance time series
//!
//! Observations are stored band-major (`Series`): one date vector plus one
//! value vector per band. Reducers and screens consume whole bands as
//! contiguous slices, which is the layout the per-band statistics want.

use crate::consts::NUM_BANDS;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A reflectance band, in the fixed acquisition order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(usize)]
pub enum Band {
    Blue = 0,
    Green = 1,
    Red = 2,
    Nir = 3,
}

impl Band {
    /// All bands in storage order.
    pub const ALL: [Band; NUM_BANDS] = [Band::Blue, Band::Green, Band::Red, Band::Nir];

    /// Storage index of this band.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Band::Blue => "blue",
            Band::Green => "green",
            Band::Red => "red",
            Band::Nir => "nir",
        };
        write!(f, "{name}")
    }
}

/// One cloud/shadow-filtered sample: acquisition date plus one value per band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Ordinal date (day count from the epoch the decoder uses).
    pub date: i32,
    /// Reflectance values in [blue, green, red, nir] order.
    pub bands: [f32; NUM_BANDS],
}

impl Observation {
    /// Create a new observation.
    pub fn new(date: i32, bands: [f32; NUM_BANDS]) -> Self {
        Self { date, bands }
    }

    /// Value of one band.
    #[inline]
    pub fn band(&self, band: Band) -> f32 {
        self.bands[band.index()]
    }
}

/// Intercept/slope pair from a linear regression against ordinal date.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FitCoefficients {
    pub intercept: f64,
    pub slope: f64,
}

impl FitCoefficients {
    /// Create from intercept and slope.
    pub fn new(intercept: f64, slope: f64) -> Self {
        Self { intercept, slope }
    }

    /// Evaluate the fitted line at `x`.
    #[inline]
    pub fn predict(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }
}

/// Borrowed view of a decoded per-location series.
///
/// The decoder owns the storage; the band slices must all have the same
/// length as `dates`, and dates must be in acquisition order.
#[derive(Debug, Clone, Copy)]
pub struct SeriesView<'a> {
    pub dates: &'a [i32],
    pub bands: [&'a [f32]; NUM_BANDS],
}

impl<'a> SeriesView<'a> {
    /// Number of observations in the view.
    #[inline]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Whether the view holds no observations.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Observation at `i`. Panics if out of range.
    pub fn observation(&self, i: usize) -> Observation {
        let mut bands = [0.0; NUM_BANDS];
        for (b, slice) in self.bands.iter().enumerate() {
            bands[b] = slice[i];
        }
        Observation::new(self.dates[i], bands)
    }
}

/// Owned, band-major per-location series.
///
/// Ephemeral: built fresh per compositing call (usually inside pooled
/// scratch) and never retained afterward.
#[derive(Debug, Clone, Default)]
pub struct Series {
    dates: Vec<i32>,
    bands: [Vec<f32>; NUM_BANDS],
}

impl Series {
    /// Create an empty series.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty series with room for `capacity` observations.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            dates: Vec::with_capacity(capacity),
            bands: std::array::from_fn(|_| Vec::with_capacity(capacity)),
        }
    }

    /// Number of observations.
    #[inline]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Whether the series holds no observations.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Drop all observations, keeping allocations.
    pub fn clear(&mut self) {
        self.dates.clear();
        for band in &mut self.bands {
            band.clear();
        }
    }

    /// Grow the underlying buffers to hold at least `capacity` observations.
    pub fn reserve(&mut self, capacity: usize) {
        self.dates.reserve(capacity);
        for band in &mut self.bands {
            band.reserve(capacity);
        }
    }

    /// Append one observation.
    pub fn push(&mut self, obs: Observation) {
        self.dates.push(obs.date);
        for (b, band) in self.bands.iter_mut().enumerate() {
            band.push(obs.bands[b]);
        }
    }

    /// Replace the contents with every observation of `view`.
    pub fn assign_from(&mut self, view: &SeriesView<'_>) {
        self.clear();
        self.dates.extend_from_slice(view.dates);
        for (b, band) in self.bands.iter_mut().enumerate() {
            band.extend_from_slice(view.bands[b]);
        }
    }

    /// Acquisition dates.
    #[inline]
    pub fn dates(&self) -> &[i32] {
        &self.dates
    }

    /// All values of one band, in acquisition order.
    #[inline]
    pub fn band(&self, band: Band) -> &[f32] {
        &self.bands[band.index()]
    }

    /// Observation at `i`. Panics if out of range.
    pub fn observation(&self, i: usize) -> Observation {
        self.as_view().observation(i)
    }

    /// Borrow the series as a view.
    pub fn as_view(&self) -> SeriesView<'_> {
        SeriesView {
            dates: &self.dates,
            bands: std::array::from_fn(|b| self.bands[b].as_slice()),
        }
    }
}

impl FromIterator<Observation> for Series {
    fn from_iter<I: IntoIterator<Item = Observation>>(iter: I) -> Self {
        let mut series = Series::new();
        for obs in iter {
            series.push(obs);
        }
        series
    }
}
