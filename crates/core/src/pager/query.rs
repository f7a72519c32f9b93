//! Ordered query parameters and page link URLs.

use serde::Serialize;
use url::form_urlencoded;

/// Query key carrying the page number.
pub const PAGE_KEY: &str = "page";

/// Query key carrying the page size.
pub const PAGE_SIZE_KEY: &str = "pageSize";

/// Keys dropped from incoming queries: the XHR marker some clients send as a
/// query value, the jQuery cache-buster and the anti-forgery token.
const IGNORED_KEYS: [&str; 2] = ["_", "__RequestVerificationToken"];

/// Returns true for query keys that must not be carried into page links.
#[must_use]
pub fn is_ignored_key(key: &str) -> bool {
    key.eq_ignore_ascii_case("x-requested-with")
        || IGNORED_KEYS.iter().any(|ignored| key.eq_ignore_ascii_case(ignored))
}

/// Query parameters in first-seen order, one value per key.
///
/// Keys compare ASCII case-insensitively, so `Page` and `page` are the same
/// parameter. The spelling seen first is the one written back out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Creates an empty parameter list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a raw (still percent-encoded) query string such as
    /// `page=2&pageSize=20`. A leading `?` is accepted.
    ///
    /// Duplicate keys keep their first value and ignored keys are dropped.
    #[must_use]
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        Self::from_pairs(form_urlencoded::parse(query.as_bytes()))
    }

    /// Builds the list from decoded pairs with the same rules as [`Self::parse`].
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut params = Self::new();
        for (key, value) in pairs {
            let key = key.as_ref();
            if key.is_empty() || is_ignored_key(key) {
                continue;
            }
            params.insert_if_absent(key, value.as_ref());
        }
        params
    }

    /// Returns the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

    /// Returns true if `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Overwrites the value for `key` in place, or appends it.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self
            .pairs
            .iter_mut()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
        {
            Some((_, existing)) => *existing = value,
            None => self.pairs.push((key.to_string(), value)),
        }
    }

    /// Appends `key` unless it is already present.
    pub fn insert_if_absent(&mut self, key: &str, value: impl Into<String>) {
        if !self.contains_key(key) {
            self.pairs.push((key.to_string(), value.into()));
        }
    }

    /// Iterates the pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// True when there are no pairs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Serializes the pairs as `application/x-www-form-urlencoded`.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.iter())
            .finish()
    }

    /// Copy of these parameters pointing at `page`, with `pageSize` filled
    /// in when the request carried none.
    #[must_use]
    pub fn for_page(&self, page: u64, page_size: u32) -> Self {
        let mut params = self.clone();
        params.set(PAGE_KEY, page.to_string());
        params.insert_if_absent(PAGE_SIZE_KEY, page_size.to_string());
        params
    }
}

impl<K: AsRef<str>, V: AsRef<str>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}

/// Joins `base_url` and the encoded parameters.
///
/// A base URL that already carries a query string is extended with `&`. A
/// `#fragment` stays at the end.
#[must_use]
pub fn build_url(base_url: &str, params: &QueryParams) -> String {
    let query = params.to_query_string();
    if query.is_empty() {
        return base_url.to_string();
    }

    let (path, fragment) = match base_url.split_once('#') {
        Some((path, fragment)) => (path, Some(fragment)),
        None => (base_url, None),
    };
    let separator = match path.rfind('?') {
        None => "?",
        Some(idx) if idx + 1 == path.len() || path.ends_with('&') => "",
        Some(_) => "&",
    };

    match fragment {
        Some(fragment) => format!("{path}{separator}{query}#{fragment}"),
        None => format!("{path}{separator}{query}"),
    }
}
