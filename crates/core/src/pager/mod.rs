//! Page window calculation and navigation link sets.

pub mod ajax;
pub mod links;
pub mod query;
pub mod summary;
pub mod window;

#[cfg(test)]
mod props;

pub use ajax::{AjaxOptions, InsertionMode, escape_id_selector};
pub use links::{
    DEFAULT_PAGE_SIZE, DEFAULT_PAGES_TO_DISPLAY, LinkDescriptor, LinkKind, LinkSetBuilder,
    PagerLabels, PagerModel, PagerOptions, PagingRequest,
};
pub use query::{PAGE_KEY, PAGE_SIZE_KEY, QueryParams, build_url, is_ignored_key};
pub use summary::{PagingSummary, SummaryMode};
pub use window::{PageWindow, total_pages};
