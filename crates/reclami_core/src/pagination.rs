use std::ops::Range;

/// Selectable rows-per-page values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageSize {
    #[default]
    Ten,
    TwentyFive,
    Fifty,
}

impl PageSize {
    pub const ALL: [PageSize; 3] = [PageSize::Ten, PageSize::TwentyFive, PageSize::Fifty];

    pub fn rows(self) -> usize {
        match self {
            PageSize::Ten => 10,
            PageSize::TwentyFive => 25,
            PageSize::Fifty => 50,
        }
    }

    /// Next size in the selector, wrapping back to the smallest.
    pub fn next(self) -> PageSize {
        match self {
            PageSize::Ten => PageSize::TwentyFive,
            PageSize::TwentyFive => PageSize::Fifty,
            PageSize::Fifty => PageSize::Ten,
        }
    }

    pub fn from_rows(rows: usize) -> Option<PageSize> {
        PageSize::ALL.into_iter().find(|size| size.rows() == rows)
    }
}

/// Client-side pagination over the full row collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pagination {
    page: usize,
    page_size: PageSize,
}

impl Pagination {
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.page_size.rows())
    }

    /// Indices of the rows visible on the current page.
    pub fn range(&self, total: usize) -> Range<usize> {
        let size = self.page_size.rows();
        let start = (self.page * size).min(total);
        let end = (start + size).min(total);
        start..end
    }

    pub fn next_page(&mut self, total: usize) -> bool {
        if self.page + 1 < self.page_count(total) {
            self.page += 1;
            true
        } else {
            false
        }
    }

    pub fn prev_page(&mut self) -> bool {
        if self.page > 0 {
            self.page -= 1;
            true
        } else {
            false
        }
    }

    /// Changes the page size, keeping the first visible row on screen.
    pub fn set_page_size(&mut self, page_size: PageSize, total: usize) -> bool {
        if self.page_size == page_size {
            return false;
        }
        let first_row = self.page * self.page_size.rows();
        self.page_size = page_size;
        self.page = first_row / page_size.rows();
        self.clamp(total);
        true
    }

    pub fn reset(&mut self) {
        self.page = 0;
    }

    fn clamp(&mut self, total: usize) {
        let last = self.page_count(total).saturating_sub(1);
        self.page = self.page.min(last);
    }
}
