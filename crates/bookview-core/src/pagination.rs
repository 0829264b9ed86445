//! Pagination controller for additive "show more" rendering.
//!
//! Pages are 1-based. Rendering is additive: page `p` means rows
//! `[0, min(p * page_size, total))` are on screen, and each "show more"
//! appends exactly one [`Window`].

/// Default number of previews per page
pub const DEFAULT_PAGE_SIZE: usize = 36;

/// A half-open range `[start, end)` into a result set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub start: usize,
    pub end: usize,
}

impl Window {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Current page and page size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: usize,
    page_size: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Pagination {
    /// A page size of zero is treated as one.
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Back to the first window (new filter submission)
    pub fn reset(&mut self) {
        self.page = 1;
    }

    /// The window belonging to the current page.
    ///
    /// A nominal start past the end of the set back-fills to the last
    /// `page_size` items (or fewer) instead of yielding an empty page.
    pub fn window(&self, total: usize) -> Window {
        let nominal_start = (self.page - 1).saturating_mul(self.page_size);
        if total > 0 && nominal_start >= total {
            return Window {
                start: total - self.page_size.min(total),
                end: total,
            };
        }
        let end = self.page.saturating_mul(self.page_size).min(total);
        Window {
            start: nominal_start.min(end),
            end,
        }
    }

    /// Number of rows on screen: `min(page * page_size, total)`
    pub fn shown(&self, total: usize) -> usize {
        self.page.saturating_mul(self.page_size).min(total)
    }

    /// `max(0, total - page * page_size)`
    pub fn remaining(&self, total: usize) -> usize {
        total.saturating_sub(self.page.saturating_mul(self.page_size))
    }

    pub fn has_more(&self, total: usize) -> bool {
        self.remaining(total) > 0
    }

    /// Advance one page and return the newly appended window.
    ///
    /// Returns `None` and leaves the page untouched once the set is
    /// exhausted, so repeated calls never grow the rendered list.
    pub fn show_more(&mut self, total: usize) -> Option<Window> {
        if !self.has_more(total) {
            return None;
        }
        self.page += 1;
        Some(self.window(total))
    }
}
