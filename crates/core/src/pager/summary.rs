//! "Showing 11 – 20 of 500 items" style paging summaries.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::window::total_pages;

/// Which summary to produce.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryMode {
    /// `Page 2 of 50`
    PageNumbers,
    /// `Showing 11 – 20 of 500 items`
    #[default]
    PageItems,
}

/// Position of one page within the whole list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PagingSummary {
    /// Page number as supplied.
    pub page: u32,
    /// Total number of pages.
    pub total_pages: u64,
    /// 1-based index of the first item on the page.
    pub first_item: u64,
    /// 1-based index of the last item on the page.
    pub last_item: u64,
    /// Total number of items.
    pub total_items: u64,
    /// Rendering mode.
    pub mode: SummaryMode,
}

impl PagingSummary {
    /// Works out the item range of `page`.
    #[must_use]
    pub fn new(page: u32, page_size: u32, total_items: u64, mode: SummaryMode) -> Self {
        let size = u64::from(page_size);
        let first_item = (u64::from(page) * size).saturating_sub(size.saturating_sub(1));
        let last_item = first_item
            .saturating_add(size)
            .saturating_sub(1)
            .min(total_items);

        Self {
            page,
            total_pages: total_pages(total_items, page_size),
            first_item,
            last_item,
            total_items,
            mode,
        }
    }

    /// Shorthand for `PagingSummary::new(..).to_string()`.
    #[must_use]
    pub fn text(page: u32, page_size: u32, total_items: u64, mode: SummaryMode) -> String {
        Self::new(page, page_size, total_items, mode).to_string()
    }
}

impl fmt::Display for PagingSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mode {
            SummaryMode::PageNumbers => write!(f, "Page {} of {}", self.page, self.total_pages),
            SummaryMode::PageItems => write!(
                f,
                "Showing {} – {} of {} items",
                self.first_item, self.last_item, self.total_items
            ),
        }
    }
}
