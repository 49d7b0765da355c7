//! Reusable per-pixel scratch buffers
//!
//! A compositing call needs three series buffers (window selection, screen
//! stage output, final screened set) and an outlier mask, all sized to the
//! scene count. Allocating them per pixel across an image row is wasteful,
//! so a pool hands out scratch sets and takes them back when the checkout
//! guard drops. Each checked-out scratch is exclusively owned by one pixel
//! task; nothing is shared across concurrent columns.

use crate::types::Series;
use std::ops::{Deref, DerefMut};
use std::sync::Mutex;

/// Scratch buffers for one compositing call.
#[derive(Debug, Default)]
pub struct PixelScratch {
    /// In-window subsequence of the input series.
    pub selected: Series,
    /// Output of the first (green) screen stage.
    pub stage: Series,
    /// Output of the second (NIR) screen stage; input to the reducer.
    pub screened: Series,
    /// Per-observation rejection mask, true = reject.
    pub mask: Vec<bool>,
}

impl PixelScratch {
    /// Create scratch with room for `capacity` observations per buffer.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            selected: Series::with_capacity(capacity),
            stage: Series::with_capacity(capacity),
            screened: Series::with_capacity(capacity),
            mask: Vec::with_capacity(capacity),
        }
    }

    /// Empty every buffer, keeping allocations.
    pub fn clear(&mut self) {
        self.selected.clear();
        self.stage.clear();
        self.screened.clear();
        self.mask.clear();
    }
}

/// Pool of reusable [`PixelScratch`] sets.
///
/// Scratch sets are returned to the pool when the [`ScratchGuard`] drops;
/// at most `max_pooled` are retained, the rest are freed.
#[derive(Debug)]
pub struct ScratchPool {
    pool: Mutex<Vec<PixelScratch>>,
    max_pooled: usize,
}

impl ScratchPool {
    /// Create a pool retaining at most `max_pooled` scratch sets.
    pub fn new(max_pooled: usize) -> Self {
        Self {
            pool: Mutex::new(Vec::new()),
            max_pooled,
        }
    }

    /// Check out a cleared scratch set with room for `capacity` observations.
    pub fn checkout(&self, capacity: usize) -> ScratchGuard<'_> {
        let mut scratch = self
            .pool
            .lock()
            .expect("scratch pool poisoned")
            .pop()
            .unwrap_or_default();
        scratch.clear();
        scratch.selected.reserve(capacity);
        scratch.stage.reserve(capacity);
        scratch.screened.reserve(capacity);
        scratch.mask.reserve(capacity);
        ScratchGuard {
            pool: self,
            scratch: Some(scratch),
        }
    }

    fn give_back(&self, scratch: PixelScratch) {
        let mut pool = self.pool.lock().expect("scratch pool poisoned");
        if pool.len() < self.max_pooled {
            pool.push(scratch);
        }
    }

    /// Number of scratch sets currently idle in the pool.
    pub fn idle(&self) -> usize {
        self.pool.lock().expect("scratch pool poisoned").len()
    }
}

impl Default for ScratchPool {
    fn default() -> Self {
        Self::new(64)
    }
}

/// RAII checkout of one scratch set; returns it to the pool on drop.
#[derive(Debug)]
pub struct ScratchGuard<'a> {
    pool: &'a ScratchPool,
    scratch: Option<PixelScratch>,
}

impl Deref for ScratchGuard<'_> {
    type Target = PixelScratch;

    fn deref(&self) -> &PixelScratch {
        self.scratch.as_ref().expect("scratch taken")
    }
}

impl DerefMut for ScratchGuard<'_> {
    fn deref_mut(&mut self) -> &mut PixelScratch {
        self.scratch.as_mut().expect("scratch taken")
    }
}

impl Drop for ScratchGuard<'_> {
    fn drop(&mut self) {
        if let Some(scratch) = self.scratch.take() {
            self.pool.give_back(scratch);
        }
    }
}
