//! Navigation link set construction.

use serde::Serialize;

pub use pagewise_shared::DEFAULT_PAGE_SIZE;

use super::ajax::AjaxOptions;
use super::query::{QueryParams, build_url};
use super::window::PageWindow;

/// Number of page links shown when a request asks for none.
pub const DEFAULT_PAGES_TO_DISPLAY: u32 = 5;

/// Input to one pager rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagingRequest {
    /// Requested page (1-indexed, before clamping).
    pub page: u32,
    /// Items per page.
    pub page_size: u32,
    /// Total number of items.
    pub total_items: u64,
    /// Number of page links in the window.
    pub pages_to_display: u32,
    /// Path or URL the page links point at.
    pub base_url: String,
    /// Query parameters of the incoming request, carried into every link.
    pub existing_params: QueryParams,
}

impl PagingRequest {
    /// Creates a request, coercing a page below 1 to 1 and a zero page size
    /// to [`DEFAULT_PAGE_SIZE`].
    #[must_use]
    pub fn new(base_url: impl Into<String>, page: u32, page_size: u32, total_items: u64) -> Self {
        Self {
            page: page.max(1),
            page_size: if page_size < 1 { DEFAULT_PAGE_SIZE } else { page_size },
            total_items,
            pages_to_display: DEFAULT_PAGES_TO_DISPLAY,
            base_url: base_url.into(),
            existing_params: QueryParams::new(),
        }
    }

    /// Sets the window width; zero falls back to [`DEFAULT_PAGES_TO_DISPLAY`].
    #[must_use]
    pub fn with_pages_to_display(mut self, pages_to_display: u32) -> Self {
        self.pages_to_display = if pages_to_display < 1 {
            DEFAULT_PAGES_TO_DISPLAY
        } else {
            pages_to_display
        };
        self
    }

    /// Sets the query parameters carried into the links.
    #[must_use]
    pub fn with_params(mut self, params: QueryParams) -> Self {
        self.existing_params = params;
        self
    }

    /// Computes the page window for this request.
    #[must_use]
    pub fn window(&self) -> PageWindow {
        PageWindow::compute(
            self.page,
            self.page_size,
            self.total_items,
            self.pages_to_display,
        )
    }

    /// URL of `page`, keeping the other query parameters.
    #[must_use]
    pub fn page_url(&self, page: u64) -> String {
        build_url(
            &self.base_url,
            &self.existing_params.for_page(page, self.page_size),
        )
    }
}

/// The navigation slot a link fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkKind {
    /// Jump to page 1.
    First,
    /// One page back.
    Previous,
    /// Jump to just before the visible window.
    SkipBack,
    /// A numbered page.
    Page,
    /// Jump past the visible window.
    SkipForward,
    /// One page forward.
    Next,
    /// Jump to the last page.
    Last,
}

/// One anchor of the pager.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkDescriptor {
    /// Slot this link fills.
    pub kind: LinkKind,
    /// Destination page, absent when disabled.
    pub target_page: Option<u64>,
    /// Display text.
    pub label: String,
    /// Whether the link navigates anywhere.
    pub enabled: bool,
    /// True for the page link of the current page.
    pub is_current: bool,
    /// Fully built link, absent when disabled.
    pub url: Option<String>,
    /// Extra transport attributes (AJAX), only on enabled links.
    pub attributes: Vec<(String, String)>,
}

impl LinkDescriptor {
    fn disabled(kind: LinkKind, label: &str) -> Self {
        Self {
            kind,
            target_page: None,
            label: label.to_string(),
            enabled: false,
            is_current: false,
            url: None,
            attributes: Vec::new(),
        }
    }
}

/// Display strings for the non-numbered links. Passed through verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PagerLabels {
    /// First page link.
    pub first: String,
    /// Previous page link.
    pub previous: String,
    /// Skip-back link.
    pub skip_back: String,
    /// Skip-forward link.
    pub skip_forward: String,
    /// Next page link.
    pub next: String,
    /// Last page link.
    pub last: String,
}

impl Default for PagerLabels {
    fn default() -> Self {
        Self {
            first: "«".to_string(),
            previous: "‹ Previous".to_string(),
            skip_back: "..".to_string(),
            skip_forward: "..".to_string(),
            next: "Next ›".to_string(),
            last: "»".to_string(),
        }
    }
}

/// Which link families are rendered, and how they read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PagerOptions {
    /// Emit the first/last links.
    pub first_last_navigation: bool,
    /// Emit the skip-back/skip-forward links.
    pub skip_navigation: bool,
    /// Link texts.
    pub labels: PagerLabels,
}

impl Default for PagerOptions {
    fn default() -> Self {
        Self {
            first_last_navigation: true,
            skip_navigation: true,
            labels: PagerLabels::default(),
        }
    }
}

/// The window and links of one pager, ready for a renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PagerModel {
    /// Page window the links were built from.
    pub window: PageWindow,
    /// Links in display order.
    pub links: Vec<LinkDescriptor>,
}

impl PagerModel {
    /// The page link marked current, if any.
    #[must_use]
    pub fn current(&self) -> Option<&LinkDescriptor> {
        self.links.iter().find(|link| link.is_current)
    }

    /// True when nothing should be rendered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

/// Builds the ordered link set for a page window.
///
/// ```text
/// [«] [‹ Previous] [..] [6] [7] [8] [9] [10] [..] [Next ›] [»]
/// ```
#[derive(Debug, Clone, Default)]
pub struct LinkSetBuilder {
    options: PagerOptions,
    ajax_attributes: Vec<(String, String)>,
}

impl LinkSetBuilder {
    /// Creates a builder with the given options and no AJAX attributes.
    #[must_use]
    pub fn new(options: PagerOptions) -> Self {
        Self {
            options,
            ajax_attributes: Vec::new(),
        }
    }

    /// Attaches AJAX attributes to every enabled link.
    #[must_use]
    pub fn with_ajax(mut self, ajax: &AjaxOptions) -> Self {
        self.ajax_attributes = ajax.to_unobtrusive_attributes();
        self
    }

    /// Computes the window for `request` and builds its links.
    #[must_use]
    pub fn paginate(&self, request: &PagingRequest) -> PagerModel {
        let window = request.window();
        let links = self.build(&window, request);
        PagerModel { window, links }
    }

    /// Builds the links for `window`.
    ///
    /// Returns an empty list when the window is suppressed.
    #[must_use]
    pub fn build(&self, window: &PageWindow, request: &PagingRequest) -> Vec<LinkDescriptor> {
        if window.suppress {
            return Vec::new();
        }

        let labels = &self.options.labels;
        let current = window.current_page;
        let total = window.total_pages;
        let mut links = Vec::with_capacity(usize::try_from(window.len()).unwrap_or(0) + 6);

        if self.options.first_last_navigation {
            links.push(self.slot(
                LinkKind::First,
                &labels.first,
                (total > 1 && current > 1).then_some(1),
                request,
            ));
        }

        links.push(self.slot(
            LinkKind::Previous,
            &labels.previous,
            (current > 1).then(|| current - 1),
            request,
        ));

        if self.options.skip_navigation {
            links.push(self.slot(
                LinkKind::SkipBack,
                &labels.skip_back,
                (current > 1 && window.first_visible_page > 1).then_some(window.skip_back_target),
                request,
            ));
        }

        for page in window.visible_pages() {
            let mut link = self.slot(LinkKind::Page, &page.to_string(), Some(page), request);
            link.is_current = page == current;
            links.push(link);
        }

        if self.options.skip_navigation {
            links.push(self.slot(
                LinkKind::SkipForward,
                &labels.skip_forward,
                (total > 1 && window.last_visible_page < total)
                    .then_some(window.skip_forward_target),
                request,
            ));
        }

        links.push(self.slot(
            LinkKind::Next,
            &labels.next,
            (current < total).then(|| current + 1),
            request,
        ));

        if self.options.first_last_navigation {
            links.push(self.slot(
                LinkKind::Last,
                &labels.last,
                (total > 1 && current < total).then_some(total),
                request,
            ));
        }

        links
    }

    fn slot(
        &self,
        kind: LinkKind,
        label: &str,
        target: Option<u64>,
        request: &PagingRequest,
    ) -> LinkDescriptor {
        let Some(page) = target else {
            return LinkDescriptor::disabled(kind, label);
        };

        LinkDescriptor {
            kind,
            target_page: Some(page),
            label: label.to_string(),
            enabled: true,
            is_current: false,
            url: Some(request.page_url(page)),
            attributes: self.ajax_attributes.clone(),
        }
    }
}
