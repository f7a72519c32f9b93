//! Property-based tests for the pager.
//!
//! - Page count is the ceiling of items over page size
//! - The window stays inside `1..=total_pages` and is at most `pages_to_display` wide
//! - Pages beyond range clamp to the last page
//! - Exactly one current page link
//! - Enable rules at both ends
//! - Built URLs re-parse to the target page and the original parameters

use proptest::prelude::*;
use url::form_urlencoded;

use super::links::{LinkKind, LinkSetBuilder, PagingRequest};
use super::query::{PAGE_KEY, PAGE_SIZE_KEY, QueryParams};
use super::window::PageWindow;

fn page() -> impl Strategy<Value = u32> {
    1u32..=2_000
}

fn page_size() -> impl Strategy<Value = u32> {
    1u32..=200
}

fn total_items() -> impl Strategy<Value = u64> {
    0u64..=100_000
}

fn pages_to_display() -> impl Strategy<Value = u32> {
    1u32..=15
}

/// Query pairs with short lowercase keys, so none of them matches `page`,
/// `pageSize` or an ignored key in any case.
fn query_pairs() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec(("[a-z]{1,3}", "\\PC{0,12}"), 0..6)
}

fn query_part(url: &str) -> &str {
    url.split_once('?').map_or("", |(_, query)| query)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_total_pages_is_ceiling(size in page_size(), items in total_items()) {
        let window = PageWindow::compute(1, size, items, 5);
        let size = u64::from(size);

        prop_assert_eq!(window.total_pages == 0, items == 0);
        prop_assert_eq!(window.suppress, items == 0);
        if items > 0 {
            prop_assert!(window.total_pages * size >= items);
            prop_assert!((window.total_pages - 1) * size < items);
        }
    }

    #[test]
    fn prop_window_within_bounds(
        page in page(),
        size in page_size(),
        items in 1u64..=100_000,
        width in pages_to_display(),
    ) {
        let window = PageWindow::compute(page, size, items, width);

        prop_assert!(!window.suppress);
        prop_assert!(window.first_visible_page >= 1);
        prop_assert!(window.first_visible_page <= window.last_visible_page);
        prop_assert!(window.last_visible_page <= window.total_pages);
        prop_assert!(window.len() <= u64::from(width));
        prop_assert!(window.current_page >= window.first_visible_page);
        prop_assert!(window.current_page <= window.last_visible_page);
        prop_assert!(window.skip_back_target >= 1);
        prop_assert!(window.skip_forward_target <= window.total_pages);
    }

    #[test]
    fn prop_clamping_is_idempotent(
        size in page_size(),
        items in 1u64..=10_000,
        width in pages_to_display(),
        extra in 0u32..=50,
    ) {
        let last = PageWindow::compute(1, size, items, width).total_pages;
        let last = u32::try_from(last).unwrap();

        let at_last = PageWindow::compute(last, size, items, width);
        let beyond = PageWindow::compute(last + extra, size, items, width);
        prop_assert_eq!(at_last, beyond);
    }

    #[test]
    fn prop_exactly_one_current_page(
        page in page(),
        size in page_size(),
        items in total_items(),
        width in pages_to_display(),
    ) {
        let request = PagingRequest::new("/p", page, size, items).with_pages_to_display(width);
        let links = LinkSetBuilder::default().paginate(&request).links;

        let current: Vec<_> = links.iter().filter(|l| l.is_current).collect();
        if links.is_empty() {
            prop_assert!(current.is_empty());
        } else {
            prop_assert_eq!(current.len(), 1);
            prop_assert_eq!(current[0].kind, LinkKind::Page);
        }
    }

    #[test]
    fn prop_enable_rules_at_both_ends(
        page in page(),
        size in page_size(),
        items in 1u64..=100_000,
        width in pages_to_display(),
    ) {
        let request = PagingRequest::new("/p", page, size, items).with_pages_to_display(width);
        let model = LinkSetBuilder::default().paginate(&request);
        let window = model.window;
        let enabled = |kind: LinkKind| {
            model.links.iter().find(|l| l.kind == kind).is_some_and(|l| l.enabled)
        };

        let at_start = window.current_page == 1;
        let at_end = window.current_page == window.total_pages;

        prop_assert_eq!(enabled(LinkKind::Previous), !at_start);
        prop_assert_eq!(enabled(LinkKind::First), !at_start && window.total_pages > 1);
        prop_assert_eq!(
            enabled(LinkKind::SkipBack),
            !at_start && window.first_visible_page > 1
        );
        prop_assert_eq!(enabled(LinkKind::Next), !at_end);
        prop_assert_eq!(enabled(LinkKind::Last), !at_end && window.total_pages > 1);
        prop_assert_eq!(
            enabled(LinkKind::SkipForward),
            window.last_visible_page < window.total_pages
        );
    }

    #[test]
    fn prop_url_round_trip(
        pairs in query_pairs(),
        page in page(),
        size in page_size(),
        items in 1u64..=10_000,
    ) {
        let params = QueryParams::from_pairs(pairs);
        let request = PagingRequest::new("/items", page, size, items).with_params(params.clone());
        let links = LinkSetBuilder::default().paginate(&request).links;

        for link in links.iter().filter(|l| l.enabled) {
            let url = link.url.as_deref().unwrap_or_default();
            let reparsed: Vec<(String, String)> = form_urlencoded::parse(query_part(url).as_bytes())
                .into_owned()
                .collect();
            let value = |key: &str| {
                reparsed.iter().find(|(k, _)| k == key).map(|(_, v)| v.clone())
            };

            prop_assert_eq!(value(PAGE_KEY), link.target_page.map(|p| p.to_string()));
            prop_assert_eq!(value(PAGE_SIZE_KEY), Some(size.to_string()));
            for (key, original) in params.iter().filter(|(k, _)| *k != PAGE_KEY) {
                prop_assert_eq!(value(key), Some(original.to_string()));
            }
        }
    }
}
