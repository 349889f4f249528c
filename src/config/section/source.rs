//! `[source]` section configuration.
//!
//! Where posts come from.
//!
//! # Example
//!
//! ```toml
//! [source]
//! api_url = "https://api.example.com"    # overridden by $API_BASE_URL
//! detail_url = "https://blog.example.com/api/posts"
//! page_limit = 100
//! max_pages = 20
//! timeout_secs = 10
//! # fixture = "posts.json"               # read posts from a local file instead
//! ```

use super::site::validate_http_url;
use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// API base used when neither the file nor `$API_BASE_URL` provides one.
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";

/// Post source settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Base URL of the listing API (`<api_url>/home/all-posts`).
    pub api_url: String,
    /// Base URL for post-by-id lookups. Defaults to `<site.url>/api/posts`.
    pub detail_url: Option<String>,
    /// Local JSON document served instead of the remote API.
    pub fixture: Option<PathBuf>,
    /// Posts requested per listing page.
    pub page_limit: u32,
    /// Hard cap on listing requests per sitemap.
    pub max_pages: u32,
    /// Request timeout. Unset means the client default.
    pub timeout_secs: Option<u64>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.into(),
            detail_url: None,
            fixture: None,
            page_limit: 100,
            max_pages: 20,
            timeout_secs: None,
        }
    }
}

impl SourceConfig {
    pub const API_URL: FieldPath = FieldPath::new("source.api_url");
    pub const DETAIL_URL: FieldPath = FieldPath::new("source.detail_url");
    pub const FIXTURE: FieldPath = FieldPath::new("source.fixture");
    pub const PAGE_LIMIT: FieldPath = FieldPath::new("source.page_limit");
    pub const MAX_PAGES: FieldPath = FieldPath::new("source.max_pages");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        // A fixture replaces the API entirely, so its URL is never dialed
        if let Some(fixture) = &self.fixture {
            if !fixture.is_file() {
                diag.error(
                    Self::FIXTURE,
                    format!("fixture file not found: {}", fixture.display()),
                );
            }
        } else {
            validate_http_url(&self.api_url, Self::API_URL, diag);
        }

        if let Some(detail) = &self.detail_url {
            validate_http_url(detail, Self::DETAIL_URL, diag);
        }
        if self.page_limit == 0 {
            diag.error_with_hint(Self::PAGE_LIMIT, "must be positive", "the default is 100");
        }
        if self.max_pages == 0 {
            diag.error_with_hint(Self::MAX_PAGES, "must be positive", "the default is 20");
        }
    }

    /// Base URL for post-by-id lookups.
    pub fn detail_base(&self, site_url: &str) -> String {
        self.detail_url.clone().unwrap_or_else(|| {
            crate::utils::path::join_url(site_url, "/api/posts")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.source.api_url, DEFAULT_API_URL);
        assert_eq!(config.source.page_limit, 100);
        assert_eq!(config.source.max_pages, 20);
        assert!(config.source.timeout_secs.is_none());
        assert!(config.source.fixture.is_none());
    }

    #[test]
    fn test_detail_base() {
        let source = SourceConfig::default();
        assert_eq!(
            source.detail_base("https://blog.example.com/"),
            "https://blog.example.com/api/posts"
        );

        let source = SourceConfig {
            detail_url: Some("https://api.example.com/v2/posts".into()),
            ..SourceConfig::default()
        };
        assert_eq!(
            source.detail_base("https://blog.example.com"),
            "https://api.example.com/v2/posts"
        );
    }

    #[test]
    fn test_validate_zero_limits() {
        let mut diag = ConfigDiagnostics::new();
        let source = SourceConfig {
            page_limit: 0,
            max_pages: 0,
            ..SourceConfig::default()
        };
        source.validate(&mut diag);
        assert_eq!(diag.len(), 2);
    }

    #[test]
    fn test_validate_missing_fixture() {
        let mut diag = ConfigDiagnostics::new();
        let source = SourceConfig {
            api_url: "not a url".into(),
            fixture: Some(PathBuf::from("/definitely/missing/posts.json")),
            ..SourceConfig::default()
        };
        source.validate(&mut diag);
        // Only the fixture is reported; the API URL is unused
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field, SourceConfig::FIXTURE);
    }
}
