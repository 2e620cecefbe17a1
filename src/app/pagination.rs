//! Page cursor over a result set.
//!
//! The list view reveals the result set one page at a time. [`Pagination`]
//! tracks how many pages have been revealed; every slice it hands out is
//! clamped to the result bounds, so an extra [`advance`](Pagination::advance)
//! past the end is harmless.

/// Page cursor and fixed page size.
///
/// # Example
///
/// ```rust
/// use bookcase::app::pagination::Pagination;
///
/// let results: Vec<u32> = (0..40).collect();
/// let mut pages = Pagination::new(36);
/// assert_eq!(pages.visible_slice(&results).len(), 36);
/// assert_eq!(pages.remaining(&results), 4);
///
/// pages.advance();
/// assert_eq!(pages.visible_slice(&results), &results[36..]);
/// assert_eq!(pages.remaining(&results), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: usize,
    page_size: usize,
}

impl Pagination {
    /// Starts at page 1. A zero page size is treated as 1.
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
        }
    }

    /// Current page cursor (always ≥ 1).
    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// End offset of everything revealed so far, unclamped.
    const fn revealed_end(&self) -> usize {
        self.page.saturating_mul(self.page_size)
    }

    /// The batch revealed by the current page: `[(page-1)*size, page*size)`.
    #[must_use]
    pub fn visible_slice<'a, T>(&self, results: &'a [T]) -> &'a [T] {
        let end = self.revealed_end().min(results.len());
        let start = self.revealed_end().saturating_sub(self.page_size).min(end);
        &results[start..end]
    }

    /// Everything revealed so far: `[0, page*size)`.
    #[must_use]
    pub fn revealed<'a, T>(&self, results: &'a [T]) -> &'a [T] {
        &results[..self.revealed_end().min(results.len())]
    }

    /// Items not yet revealed, never negative.
    #[must_use]
    pub fn remaining<T>(&self, results: &[T]) -> usize {
        results.len().saturating_sub(self.revealed_end())
    }

    /// Whether a "show more" action would reveal anything.
    #[must_use]
    pub fn has_more<T>(&self, results: &[T]) -> bool {
        self.remaining(results) > 0
    }

    /// Reveals one more page. Not rejected when nothing remains.
    pub fn advance(&mut self) {
        self.page = self.page.saturating_add(1);
        tracing::trace!(page = self.page, "page advanced");
    }

    /// Back to page 1, used whenever the criteria change.
    pub fn reset(&mut self) {
        self.page = 1;
    }
}
