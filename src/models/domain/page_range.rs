use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Half-open interval `[start, end)` of zero-based page indices.
///
/// `end` is never clamped when parsed; the part past the document is split
/// off with [`PageRange::missing`] while the run is processed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct PageRange {
    pub start: usize,
    pub end: usize,
}

impl PageRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Every page of a document with `total_pages` pages.
    pub fn all(total_pages: usize) -> Self {
        Self::new(0, total_pages)
    }

    /// Indices of this range that exist in a `total_pages` document.
    pub fn available(&self, total_pages: usize) -> Range<usize> {
        self.start.min(total_pages)..self.end.min(total_pages)
    }

    /// Indices of this range past the end of a `total_pages` document.
    pub fn missing(&self, total_pages: usize) -> Range<usize> {
        self.start.max(total_pages)..self.end.max(total_pages)
    }
}
