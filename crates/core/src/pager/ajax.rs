//! Unobtrusive AJAX attributes for page links.
//!
//! Enabled page links can carry `data-ajax-*` attributes so a client script
//! fetches the target page in the background and swaps it into the document
//! instead of doing a full navigation.

use serde::{Deserialize, Serialize};

/// How the response is inserted into the update target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InsertionMode {
    /// Replace the target's contents.
    #[default]
    Replace,
    /// Insert before the target's contents.
    InsertBefore,
    /// Insert after the target's contents.
    InsertAfter,
    /// Replace the target element itself.
    ReplaceWith,
}

impl InsertionMode {
    /// Token understood by the client script.
    #[must_use]
    pub const fn as_token(self) -> &'static str {
        match self {
            Self::Replace => "replace",
            Self::InsertBefore => "before",
            Self::InsertAfter => "after",
            Self::ReplaceWith => "replace-with",
        }
    }
}

/// AJAX transport settings shared by every enabled link of a pager.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AjaxOptions {
    /// URL to request instead of the link's `href`.
    pub url: Option<String>,
    /// Confirmation prompt shown before the request is sent.
    pub confirm: Option<String>,
    /// HTTP method ("Get" or "Post").
    pub http_method: Option<String>,
    /// Where the response goes relative to the update target.
    pub insertion_mode: InsertionMode,
    /// Show/hide animation length for the loading element, in milliseconds.
    pub loading_element_duration: u32,
    /// Id of an element shown while the request is in flight.
    pub loading_element_id: Option<String>,
    /// Callback run before the request.
    pub on_begin: Option<String>,
    /// Callback run once the response has arrived.
    pub on_complete: Option<String>,
    /// Callback run when the request fails.
    pub on_failure: Option<String>,
    /// Callback run after a successful update.
    pub on_success: Option<String>,
    /// Id of the element receiving the response.
    pub update_target_id: Option<String>,
    /// Opt into client-side caching of responses.
    pub allow_cache: bool,
}

impl Default for AjaxOptions {
    fn default() -> Self {
        Self {
            url: None,
            confirm: None,
            http_method: Some("Post".to_string()),
            insertion_mode: InsertionMode::Replace,
            loading_element_duration: 0,
            loading_element_id: None,
            on_begin: None,
            on_complete: None,
            on_failure: None,
            on_success: None,
            update_target_id: None,
            allow_cache: false,
        }
    }
}

impl AjaxOptions {
    /// Options that replace the contents of the element with `id`.
    #[must_use]
    pub fn updating(id: impl Into<String>) -> Self {
        Self {
            update_target_id: Some(id.into()),
            ..Self::default()
        }
    }

    /// Sets the HTTP method.
    #[must_use]
    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.http_method = Some(method.into());
        self
    }

    /// Sets the insertion mode.
    #[must_use]
    pub fn with_insertion_mode(mut self, mode: InsertionMode) -> Self {
        self.insertion_mode = mode;
        self
    }

    /// Sets the loading element and its animation duration.
    #[must_use]
    pub fn with_loading_element(mut self, id: impl Into<String>, duration_ms: u32) -> Self {
        self.loading_element_id = Some(id.into());
        self.loading_element_duration = duration_ms;
        self
    }

    /// Renders the options as ordered `data-ajax-*` attribute pairs.
    ///
    /// Blank values are left out. The client treats a missing
    /// `data-ajax-cache` as false, so it is only emitted when caching is on.
    #[must_use]
    pub fn to_unobtrusive_attributes(&self) -> Vec<(String, String)> {
        let mut attributes = vec![("data-ajax".to_string(), "true".to_string())];

        push_if_specified(&mut attributes, "data-ajax-url", self.url.as_deref());
        push_if_specified(&mut attributes, "data-ajax-method", self.http_method.as_deref());
        push_if_specified(&mut attributes, "data-ajax-confirm", self.confirm.as_deref());

        push_if_specified(&mut attributes, "data-ajax-begin", self.on_begin.as_deref());
        push_if_specified(&mut attributes, "data-ajax-complete", self.on_complete.as_deref());
        push_if_specified(&mut attributes, "data-ajax-failure", self.on_failure.as_deref());
        push_if_specified(&mut attributes, "data-ajax-success", self.on_success.as_deref());

        if self.allow_cache {
            attributes.push(("data-ajax-cache".to_string(), "true".to_string()));
        }

        if let Some(id) = specified(self.loading_element_id.as_deref()) {
            attributes.push(("data-ajax-loading".to_string(), escape_id_selector(id)));
            if self.loading_element_duration > 0 {
                attributes.push((
                    "data-ajax-loading-duration".to_string(),
                    self.loading_element_duration.to_string(),
                ));
            }
        }

        if let Some(id) = specified(self.update_target_id.as_deref()) {
            attributes.push(("data-ajax-update".to_string(), escape_id_selector(id)));
            attributes.push((
                "data-ajax-mode".to_string(),
                self.insertion_mode.as_token().to_string(),
            ));
        }

        attributes
    }
}

/// Turns an element id into a selector, escaping `.`, `:`, `[` and `]`.
///
/// These are legal in ids but would otherwise be read as class, pseudo-class
/// or attribute syntax: `a.b` becomes `#a\.b`.
#[must_use]
pub fn escape_id_selector(id: &str) -> String {
    let mut selector = String::with_capacity(id.len() + 1);
    selector.push('#');
    for c in id.chars() {
        if matches!(c, '.' | ':' | '[' | ']') {
            selector.push('\\');
        }
        selector.push(c);
    }
    selector
}

fn specified(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn push_if_specified(attributes: &mut Vec<(String, String)>, name: &str, value: Option<&str>) {
    if let Some(value) = specified(value) {
        attributes.push((name.to_string(), value.to_string()));
    }
}
