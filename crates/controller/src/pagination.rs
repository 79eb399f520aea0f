//! Fixed-size pages over the visible list.

use std::ops::Range;

/// Page bookkeeping. Pages are 1-based and there is always at least one page,
/// so an empty list still reports "page 1 of 1".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page_size: usize,
    page: usize,
    total_items: usize,
}

impl Pagination {
    /// A page size of 0 is treated as 1
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            page: 1,
            total_items: 0,
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.page_size).max(1)
    }

    /// Update the item count, pulling the current page back in range
    pub fn set_total(&mut self, total_items: usize) {
        self.total_items = total_items;
        self.page = self.page.clamp(1, self.total_pages());
    }

    /// Jump to a page, clamped to `[1, total_pages]`; returns the page landed on
    pub fn set_page(&mut self, page: usize) -> usize {
        self.page = page.clamp(1, self.total_pages());
        self.page
    }

    pub fn next(&mut self) -> usize {
        self.set_page(self.page.saturating_add(1))
    }

    pub fn prev(&mut self) -> usize {
        self.set_page(self.page.saturating_sub(1))
    }

    pub fn reset(&mut self) {
        self.page = 1;
    }

    /// Index range of the current page; always inside `0..total_items`
    pub fn range(&self) -> Range<usize> {
        let start = ((self.page - 1) * self.page_size).min(self.total_items);
        let end = start.saturating_add(self.page_size).min(self.total_items);
        start..end
    }
}
