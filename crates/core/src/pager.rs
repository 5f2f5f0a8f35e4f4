// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Page window over an ordered collection.
//!
//! The window is the half-open range `[min, max)`. Invariants after every
//! operation: `min <= max <= len` and `max - min <= page_size`. A window is
//! always a full page unless the whole collection is shorter than one page,
//! so paging forward past the end shows the last `page_size` rows rather
//! than a short tail.

use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    page_size: usize,
    min: usize,
    max: usize,
}

impl Pager {
    /// First page of a collection of `len` rows. A zero page size is treated as one.
    pub fn new(page_size: usize, len: usize) -> Self {
        let mut pager = Self { page_size: page_size.max(1), min: 0, max: 0 };
        pager.resize(len);
        pager
    }

    /// Window showing the 1-based `page`, clamped to the collection.
    pub fn at_page(page_size: usize, len: usize, page: usize) -> Self {
        let mut pager = Self::new(page_size, len);
        pager.min = page.saturating_sub(1).saturating_mul(pager.page_size);
        pager.resize(len);
        pager
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn current_min(&self) -> usize {
        self.min
    }

    pub fn current_max(&self) -> usize {
        self.max
    }

    pub fn range(&self) -> Range<usize> {
        self.min..self.max
    }

    pub fn forward(&mut self, len: usize) {
        self.min = self.min.saturating_add(self.page_size);
        self.resize(len);
    }

    pub fn backward(&mut self, len: usize) {
        self.min = self.min.saturating_sub(self.page_size);
        self.resize(len);
    }

    /// Re-clamp after the collection changed length.
    pub fn resize(&mut self, len: usize) {
        let wanted = self.min.saturating_add(self.page_size);
        self.max = wanted.min(len);
        if self.max < wanted {
            self.min = self.max.saturating_sub(self.page_size);
        }
    }

    /// Paging controls only make sense when the rows overflow one page.
    pub fn has_controls(&self, len: usize) -> bool {
        len > self.page_size
    }

    /// 1-based page the window starts on.
    pub fn page_number(&self) -> usize {
        self.min / self.page_size + 1
    }

    pub fn page_count(&self, len: usize) -> usize {
        len.div_ceil(self.page_size).max(1)
    }

    /// Rows inside the window.
    pub fn slice<'a, T>(&self, rows: &'a [T]) -> &'a [T] {
        let end = self.max.min(rows.len());
        let start = self.min.min(end);
        &rows[start..end]
    }
}

#[cfg(test)]
#[path = "pager_tests.rs"]
mod tests;
