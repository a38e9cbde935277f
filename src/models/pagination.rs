//! Page request model

use crate::constants::{DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

/// A normalized request for one page of a collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// 1-based
    pub page_number: u32,
    /// Always within `1..=MAX_PAGE_SIZE`
    pub page_size: u32,
}

impl PageRequest {
    /// Apply defaults, floor the page number at 1 and clamp the page size
    pub fn new(page_number: Option<i64>, page_size: Option<i64>) -> Self {
        let page_number = page_number
            .unwrap_or(i64::from(DEFAULT_PAGE_NUMBER))
            .clamp(1, i64::from(u32::MAX));
        let page_size = page_size
            .unwrap_or(i64::from(DEFAULT_PAGE_SIZE))
            .clamp(1, i64::from(MAX_PAGE_SIZE));

        Self {
            page_number: page_number as u32,
            page_size: page_size as u32,
        }
    }

    /// Number of entries preceding this page
    pub fn offset(&self) -> u64 {
        u64::from(self.page_number - 1) * u64::from(self.page_size)
    }

    pub fn previous(&self) -> Option<Self> {
        (self.page_number > 1).then(|| Self {
            page_number: self.page_number - 1,
            ..*self
        })
    }

    pub fn next(&self) -> Self {
        Self {
            page_number: self.page_number.saturating_add(1),
            ..*self
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(None, None)
    }
}
