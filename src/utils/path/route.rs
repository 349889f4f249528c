//! URL path utilities.
//!
//! Routes are kept as site-relative, decoded paths (`/über uns`) until they
//! are joined with the configured origin at render time.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Everything but RFC 3986 unreserved characters.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Join a site origin and a site-relative path into an absolute URL.
///
/// Exactly one slash separates the two halves; the root path keeps its
/// trailing slash. Each path segment is percent-encoded, the origin is
/// taken as is.
///
/// # Examples
/// ```ignore
/// assert_eq!(join_url("https://example.com/", "/about"), "https://example.com/about");
/// assert_eq!(join_url("https://example.com", "/"), "https://example.com/");
/// assert_eq!(join_url("https://example.com", "/a b"), "https://example.com/a%20b");
/// ```
#[inline]
pub fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = encode_path(path.trim_start_matches('/'));
    format!("{base}/{path}")
}

/// Percent-encode every `/`-separated segment of a decoded path.
pub fn encode_path(path: &str) -> String {
    path.split('/')
        .map(|segment| utf8_percent_encode(segment, PATH_SEGMENT).to_string())
        .collect::<Vec<_>>()
        .join("/")
}

/// Normalize a configured path prefix (`blog/`, `/blog`) into `/blog`.
///
/// An empty prefix stays empty so that joined paths do not gain a `//`.
#[inline]
pub fn normalize_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}

/// Strip the query string from a request URL.
#[inline]
pub fn strip_query(url: &str) -> &str {
    url.split_once(['?', '#']).map_or(url, |(path, _)| path)
}
