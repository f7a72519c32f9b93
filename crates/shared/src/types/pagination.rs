//! Pagination types for list endpoints.

use serde::{Deserialize, Serialize};

/// Items per page when neither the request nor the configuration says
/// otherwise.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Request parameters for paginated queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number (1-indexed).
    #[serde(default = "default_page")]
    pub page: u32,
    /// Number of items per page.
    #[serde(default = "default_page_size", rename = "pageSize")]
    pub page_size: u32,
}

fn default_page() -> u32 {
    1
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: default_page(),
            page_size: default_page_size(),
        }
    }
}

impl PageRequest {
    /// Creates a page request from raw values.
    #[must_use]
    pub const fn new(page: u32, page_size: u32) -> Self {
        Self { page, page_size }
    }

    /// Coerces out-of-range values to safe ones.
    ///
    /// A page below 1 becomes 1, a page size below 1 becomes
    /// `default_page_size`, and a page size above `max_page_size` is capped.
    #[must_use]
    pub fn normalized(self, default_page_size: u32, max_page_size: u32) -> Self {
        let page = self.page.max(1);
        let page_size = if self.page_size < 1 {
            default_page_size.max(1)
        } else {
            self.page_size.min(max_page_size.max(1))
        };
        Self { page, page_size }
    }

    /// Calculates the number of items to skip.
    #[must_use]
    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.page_size)
    }

    /// Returns the maximum number of items on the page.
    #[must_use]
    pub fn limit(&self) -> u64 {
        u64::from(self.page_size)
    }
}

/// One page of results plus the numbers needed to page through the rest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagedList<T> {
    /// Page the results belong to (1-indexed).
    pub current_page: u32,
    /// Items per page.
    pub page_size: u32,
    /// Total number of items across all pages.
    pub total_item_count: u64,
    /// The items in the current page.
    pub results: Vec<T>,
}

impl<T> PagedList<T> {
    /// Creates a new paged list.
    #[must_use]
    pub fn new(results: Vec<T>, current_page: u32, page_size: u32, total_item_count: u64) -> Self {
        Self {
            current_page,
            page_size,
            total_item_count,
            results,
        }
    }

    /// Total number of pages, or 0 when there is nothing to page.
    #[must_use]
    pub fn page_count(&self) -> u64 {
        if self.total_item_count > 0 && self.page_size > 0 {
            self.total_item_count.div_ceil(u64::from(self.page_size))
        } else {
            0
        }
    }
}

#[cfg(test)]
#[path = "pagination_tests.rs"]
mod tests;
