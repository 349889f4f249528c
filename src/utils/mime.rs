//! MIME type detection for generated documents.

use std::path::Path;

/// MIME type constants for everything seomap emits.
pub mod types {
    pub const PLAIN: &str = "text/plain; charset=utf-8";
    pub const JSON: &str = "application/json";
    pub const XML: &str = "application/xml";

    // Web feeds
    pub const RSS: &str = "application/rss+xml";
    pub const ATOM: &str = "application/atom+xml";
}

/// Guess MIME type from a document path.
pub fn from_path(path: &Path) -> &'static str {
    from_extension(path.extension().and_then(|e| e.to_str()))
}

/// Guess MIME type from file extension string.
pub fn from_extension(ext: Option<&str>) -> &'static str {
    match ext {
        Some("xml") => types::XML,
        Some("rss") => types::RSS,
        Some("atom") => types::ATOM,
        Some("json") => types::JSON,
        _ => types::PLAIN,
    }
}
