//! Page window calculation.
//!
//! Given the current page, the page size, the total item count and the
//! number of page links to show, works out which page numbers are visible
//! and where the skip links jump to:
//!
//! ```text
//! [«] [‹ Previous] [..] [3] [4] [5] [6] [7] [..] [Next ›] [»]
//!                   ^    ^               ^    ^
//!          skip back     first      last     skip forward
//! ```

use std::ops::RangeInclusive;

use serde::Serialize;
use tracing::trace;

/// The visible slice of pages for one rendering of the pager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageWindow {
    /// Total number of pages (0 when there are no items).
    pub total_pages: u64,
    /// Current page, clamped to `total_pages`.
    pub current_page: u64,
    /// First page number rendered as a link.
    pub first_visible_page: u64,
    /// Last page number rendered as a link (inclusive).
    pub last_visible_page: u64,
    /// Destination of the skip-back link.
    pub skip_back_target: u64,
    /// Destination of the skip-forward link.
    pub skip_forward_target: u64,
    /// True when there is nothing to paginate.
    pub suppress: bool,
}

impl PageWindow {
    /// Computes the window.
    ///
    /// Skip targets sit one step outside the window: skip-back lands on the
    /// page just before `first_visible_page`, skip-forward on the page one
    /// window-width after it. Both are clamped to `1..=total_pages`.
    ///
    /// A `pages_to_display` of zero is treated as one.
    ///
    /// # Example
    ///
    /// ```
    /// use pagewise_core::pager::PageWindow;
    ///
    /// let window = PageWindow::compute(5, 5, 50, 5);
    /// assert_eq!(window.total_pages, 10);
    /// assert_eq!((window.first_visible_page, window.last_visible_page), (3, 7));
    /// assert_eq!((window.skip_back_target, window.skip_forward_target), (2, 8));
    /// ```
    #[must_use]
    pub fn compute(page: u32, page_size: u32, total_items: u64, pages_to_display: u32) -> Self {
        let total_pages = total_pages(total_items, page_size);
        let suppress = total_pages == 0;
        let span = u64::from(pages_to_display.max(1));

        let mut current_page = u64::from(page);
        if !suppress && current_page > total_pages {
            trace!(page, total_pages, "requested page beyond range, clamping");
            current_page = total_pages;
        }

        let mut first_visible_page = current_page.saturating_sub(span / 2);
        if first_visible_page.saturating_add(span) > total_pages {
            first_visible_page = total_pages.saturating_add(1).saturating_sub(span);
        }
        let first_visible_page = first_visible_page.max(1);

        let last_visible_page = first_visible_page
            .saturating_add(span - 1)
            .min(total_pages);

        let skip_back_target = first_visible_page.saturating_sub(1).max(1);
        let skip_forward_target = first_visible_page.saturating_add(span).min(total_pages);

        Self {
            total_pages,
            current_page,
            first_visible_page,
            last_visible_page,
            skip_back_target,
            skip_forward_target,
            suppress,
        }
    }

    /// The visible page numbers; empty when suppressed.
    #[must_use]
    pub fn visible_pages(&self) -> RangeInclusive<u64> {
        if self.suppress {
            1..=0
        } else {
            self.first_visible_page..=self.last_visible_page
        }
    }

    /// Number of page links in the window.
    #[must_use]
    pub fn len(&self) -> u64 {
        if self.suppress {
            0
        } else {
            self.last_visible_page - self.first_visible_page + 1
        }
    }

    /// True when the window holds no page links.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// `ceil(total_items / page_size)`, or 0 when either side is zero.
#[must_use]
pub fn total_pages(total_items: u64, page_size: u32) -> u64 {
    if total_items > 0 && page_size > 0 {
        total_items.div_ceil(u64::from(page_size))
    } else {
        0
    }
}
