//! HTML rendering of pagers, summaries and product pages.
//!
//! The pager follows the usual list markup:
//!
//! ```text
//! <ul class="pagination">
//!   <li class="disabled"><a aria-disabled="true" ...>«</a></li>
//!   <li class="active"><a href="/products?page=1&amp;pageSize=5" aria-current="page" ...>1</a></li>
//!   ...
//! </ul>
//! ```

use maud::{DOCTYPE, Markup, html};
use pagewise_core::catalog::Product;
use pagewise_core::pager::{LinkDescriptor, LinkKind, PagerModel, PagingSummary};
use pagewise_shared::PagedList;

/// Element id the AJAX pager swaps.
pub const GRID_ID: &str = "product-grid";

/// Element id of the loading indicator.
pub const LOADING_ID: &str = "grid-loading";

/// Scripts needed for `data-ajax-*` links.
const AJAX_SCRIPTS: [&str; 2] = [
    "https://code.jquery.com/jquery-3.7.1.min.js",
    "https://cdn.jsdelivr.net/npm/jquery-ajax-unobtrusive@3.2.6/dist/jquery.unobtrusive-ajax.min.js",
];

/// Renders the pager, or nothing when the model is empty.
#[must_use]
pub fn pager(model: &PagerModel) -> Markup {
    html! {
        @if !model.is_empty() {
            ul.pagination {
                @for link in &model.links {
                    @if !link.enabled {
                        li.disabled {
                            a aria-disabled="true" aria-label=(aria_label(link)) { (link.label) }
                        }
                    } @else if link.is_current {
                        li.active { (anchor(link)) }
                    } @else {
                        li { (anchor(link)) }
                    }
                }
            }
        }
    }
}

fn attribute<'a>(link: &'a LinkDescriptor, name: &str) -> Option<&'a str> {
    link.attributes
        .iter()
        .find(|(n, _)| n == name)
        .map(|(_, v)| v.as_str())
}

fn anchor(link: &LinkDescriptor) -> Markup {
    let attr = |name| attribute(link, name);

    html! {
        a href=[link.url.as_deref()]
            aria-label=(aria_label(link))
            aria-current=[link.is_current.then_some("page")]
            data-ajax=[attr("data-ajax")]
            data-ajax-url=[attr("data-ajax-url")]
            data-ajax-method=[attr("data-ajax-method")]
            data-ajax-confirm=[attr("data-ajax-confirm")]
            data-ajax-begin=[attr("data-ajax-begin")]
            data-ajax-complete=[attr("data-ajax-complete")]
            data-ajax-failure=[attr("data-ajax-failure")]
            data-ajax-success=[attr("data-ajax-success")]
            data-ajax-cache=[attr("data-ajax-cache")]
            data-ajax-loading=[attr("data-ajax-loading")]
            data-ajax-loading-duration=[attr("data-ajax-loading-duration")]
            data-ajax-update=[attr("data-ajax-update")]
            data-ajax-mode=[attr("data-ajax-mode")]
        { (link.label) }
    }
}

/// Screen reader text for a link.
#[must_use]
pub fn aria_label(link: &LinkDescriptor) -> String {
    let target = link.target_page;
    match (link.kind, target) {
        (LinkKind::First, _) => "First page".to_string(),
        (LinkKind::Previous, _) => "Previous page".to_string(),
        (LinkKind::Next, _) => "Next page".to_string(),
        (LinkKind::Last, _) => "Last page".to_string(),
        (LinkKind::SkipBack, Some(page)) => format!("Back to page {page}"),
        (LinkKind::SkipForward, Some(page)) => format!("Forward to page {page}"),
        (LinkKind::SkipBack | LinkKind::SkipForward, None) => "More pages".to_string(),
        (LinkKind::Page, _) => format!("Page {}", link.label),
    }
}

/// Renders the paging summary line.
#[must_use]
pub fn summary(paging_summary: &PagingSummary) -> Markup {
    html! {
        ul.pagination {
            li { (paging_summary.to_string()) }
        }
    }
}

/// Product table followed by the summary and the pager.
#[must_use]
pub fn product_grid(
    products: &PagedList<Product>,
    pager_model: &PagerModel,
    paging_summary: &PagingSummary,
) -> Markup {
    html! {
        table.products {
            thead {
                tr {
                    th { "Id" }
                    th { "Name" }
                    th { "SKU" }
                    th { "Price" }
                }
            }
            tbody {
                @for product in &products.results {
                    tr {
                        td { (product.id) }
                        td { (product.name) }
                        td { (product.sku) }
                        td { (product.price_display()) }
                    }
                }
            }
        }
        (summary(paging_summary))
        (pager(pager_model))
    }
}

/// Full page around the grid. AJAX pages wrap the grid in its update target
/// and pull in the unobtrusive AJAX scripts.
#[must_use]
pub fn product_page(title: &str, grid: &Markup, ajax: bool) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { (title) }
            }
            body {
                h1 { (title) }
                @if ajax {
                    div id=(LOADING_ID) style="display:none" { "Loading…" }
                    div id=(GRID_ID) { (grid) }
                    @for script in AJAX_SCRIPTS {
                        script src=(script) {}
                    }
                } @else {
                    (grid)
                }
            }
        }
    }
}
