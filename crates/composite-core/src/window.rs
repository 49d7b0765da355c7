//! Date window selection
//!
//! A window is an inclusive ordinal-date interval. Selecting a window out
//! of a full per-location series is the first step of every compositing
//! call; the retained count drives all downstream branching.

use crate::error::{Error, Result};
use crate::types::{Series, SeriesView};
use serde::{Deserialize, Serialize};

/// Inclusive ordinal-date window `[lower, upper]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Window {
    lower: i32,
    upper: i32,
}

impl Window {
    /// Create a window, rejecting inverted bounds.
    pub fn new(lower: i32, upper: i32) -> Result<Self> {
        if lower > upper {
            return Err(Error::inverted_window(lower, upper));
        }
        Ok(Self { lower, upper })
    }

    /// Lower (earliest) bound.
    #[inline]
    pub fn lower(&self) -> i32 {
        self.lower
    }

    /// Upper (latest) bound.
    #[inline]
    pub fn upper(&self) -> i32 {
        self.upper
    }

    /// Whether `date` falls inside the window.
    #[inline]
    pub fn contains(&self, date: i32) -> bool {
        // Same membership as the integer test `lower - 1 < date < upper + 1`.
        self.lower <= date && date <= self.upper
    }

    /// Center date of the window, the evaluation point for fitted composites.
    #[inline]
    pub fn center(&self) -> i32 {
        (self.lower + self.upper) / 2
    }
}

/// Copy the in-window subsequence of `view` into `out`, preserving
/// acquisition order. Returns the retained count.
pub fn select_into(view: &SeriesView<'_>, window: Window, out: &mut Series) -> usize {
    out.clear();
    out.reserve(view.len());
    for i in 0..view.len() {
        if window.contains(view.dates[i]) {
            out.push(view.observation(i));
        }
    }
    out.len()
}
