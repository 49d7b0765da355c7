//! Per-location diagnostic record
//!
//! When the caller asks for diagnostics, the orchestrator fills in which
//! branch of the state machine was taken, what each screen stage fitted and
//! rejected, and the final per-band fit coefficients. The record is created
//! by the caller and owned by the caller after return; the engine never
//! retains it.

use crate::consts::{MAX_REJECTED_DATES, NUM_BANDS};
use crate::types::FitCoefficients;
use serde::{Deserialize, Serialize};

/// Which branch of the per-pixel state machine produced the composite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum Condition {
    /// Enough in-window observations; the selected reducer ran.
    #[default]
    Normal = 0,
    /// Zero in-window observations; fill values were written.
    NoObservations = 1,
    /// Fewer than the minimum sample; the median fallback ran on the full
    /// pre-window series.
    InsufficientSamples = 2,
}

impl Condition {
    /// Numeric code used by external record writers.
    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }
}

/// Bounded list of dates rejected by one screen stage.
///
/// Capacity is [`MAX_REJECTED_DATES`]; pushes beyond it are counted but not
/// stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RejectedDates {
    dates: Vec<i32>,
    attempted: usize,
}

impl RejectedDates {
    /// Record one rejected date. Returns false once the list is full
    /// (the attempt is still counted).
    pub fn push(&mut self, date: i32) -> bool {
        self.attempted += 1;
        if self.dates.len() < MAX_REJECTED_DATES {
            self.dates.push(date);
            true
        } else {
            false
        }
    }

    /// Stored dates, at most [`MAX_REJECTED_DATES`].
    pub fn as_slice(&self) -> &[i32] {
        &self.dates
    }

    /// Number of rejections attempted, including those past capacity.
    pub fn attempted(&self) -> usize {
        self.attempted
    }

    /// Number of dates actually stored.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Whether no rejection was recorded.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Forget all recorded dates and attempts.
    pub fn clear(&mut self) {
        self.dates.clear();
        self.attempted = 0;
    }
}

/// Diagnostics from one screen stage (green or NIR).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScreenStage {
    /// Robust fit of the tested band against date.
    pub fit: FitCoefficients,
    /// True if the stage kept its effect; false if it was reverted because
    /// fewer than the minimum sample survived.
    pub accepted: bool,
    /// Dates the stage flagged, whether or not the stage was reverted.
    pub rejected: RejectedDates,
}

/// Complete diagnostic state for one compositing call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticRecord {
    /// State-machine branch taken. Set exactly once per call.
    pub condition: Condition,
    /// Green-band screen stage; present only on the screened (fitted) path.
    pub green: Option<ScreenStage>,
    /// NIR-band screen stage; present only on the screened (fitted) path.
    pub nir: Option<ScreenStage>,
    /// Final per-band center-date fit coefficients; present only when a
    /// fitted reducer ran.
    pub final_fit: Option<[FitCoefficients; NUM_BANDS]>,
}

impl DiagnosticRecord {
    /// Fresh record ready to be passed to a compositing call.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset for reuse across calls.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
