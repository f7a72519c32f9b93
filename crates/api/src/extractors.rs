//! Request extractors.

use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::request::Parts};
use pagewise_core::pager::{PAGE_KEY, PAGE_SIZE_KEY, QueryParams};
use pagewise_shared::{PageRequest, PagerConfig};

/// Header set by XHR clients.
pub const REQUESTED_WITH_HEADER: &str = "x-requested-with";

/// Paging view of the incoming request.
///
/// Reads the query string in order (dropping AJAX markers and the
/// anti-forgery key) and never rejects: unparsable numbers fall back to the
/// configured defaults.
#[derive(Debug, Clone, Default)]
pub struct PagingQuery {
    /// Query parameters to carry into page links.
    pub params: QueryParams,
    /// `page`, if present and numeric.
    pub page: Option<u32>,
    /// `pageSize`, if present and numeric.
    pub page_size: Option<u32>,
    /// True for `X-Requested-With: XMLHttpRequest`.
    pub is_ajax: bool,
}

impl PagingQuery {
    /// Builds the paging view from a raw query string and the XHR flag.
    #[must_use]
    pub fn from_query(query: &str, is_ajax: bool) -> Self {
        let params = QueryParams::parse(query);
        let page = params.get(PAGE_KEY).and_then(|v| v.trim().parse().ok());
        let page_size = params.get(PAGE_SIZE_KEY).and_then(|v| v.trim().parse().ok());
        Self {
            params,
            page,
            page_size,
            is_ajax,
        }
    }

    /// Page request with defaults applied and bounds enforced.
    #[must_use]
    pub fn page_request(&self, config: &PagerConfig) -> PageRequest {
        PageRequest::new(
            self.page.unwrap_or(1),
            self.page_size.unwrap_or(config.default_page_size),
        )
        .normalized(config.default_page_size, config.max_page_size)
    }
}

impl<S> FromRequestParts<S> for PagingQuery
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let is_ajax = parts
            .headers
            .get(REQUESTED_WITH_HEADER)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.eq_ignore_ascii_case("XMLHttpRequest"));

        Ok(Self::from_query(parts.uri.query().unwrap_or_default(), is_ajax))
    }
}

#[cfg(test)]
mod tests {
    use pagewise_shared::DEFAULT_PAGE_SIZE;

    use super::*;

    #[test]
    fn test_from_query_parses_paging_numbers() {
        let query = PagingQuery::from_query("page=3&pageSize=20&sort=name", false);
        assert_eq!(query.page, Some(3));
        assert_eq!(query.page_size, Some(20));
        assert_eq!(query.params.get("sort"), Some("name"));
    }

    #[test]
    fn test_from_query_reads_mixed_case_paging_keys() {
        let query = PagingQuery::from_query("Page=3&PAGESIZE=20&page=9&sort=name", false);
        assert_eq!(query.page, Some(3));
        assert_eq!(query.page_size, Some(20));
        assert_eq!(
            query.params.iter().collect::<Vec<_>>(),
            vec![("Page", "3"), ("PAGESIZE", "20"), ("sort", "name")]
        );
    }

    #[test]
    fn test_from_query_ignores_garbage_numbers() {
        let query = PagingQuery::from_query("page=abc&pageSize=-4", false);
        assert_eq!(query.page, None);
        assert_eq!(query.page_size, None);

        let request = query.page_request(&PagerConfig::default());
        assert_eq!(request, PageRequest::new(1, DEFAULT_PAGE_SIZE));
    }

    #[test]
    fn test_from_query_drops_ajax_markers() {
        let query = PagingQuery::from_query("X-Requested-With=XMLHttpRequest&_=123&page=2", true);
        assert_eq!(query.params.iter().collect::<Vec<_>>(), vec![("page", "2")]);
        assert!(query.is_ajax);
    }

    #[test]
    fn test_page_request_caps_page_size() {
        let query = PagingQuery::from_query("page=2&pageSize=1000", false);
        assert_eq!(
            query.page_request(&PagerConfig::default()),
            PageRequest::new(2, 100)
        );
    }
}
