//! `[site]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [site]
//! url = "https://blog.example.com"   # overridden by $SITE_URL
//! title = "Example Blog"
//! description = "Notes from the team"
//! language = "en"
//! posts_prefix = "/posts"            # where post pages live
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// Origin used when neither the file nor `$SITE_URL` provides one.
pub const DEFAULT_SITE_URL: &str = "http://localhost:3000";

/// Site identity shared by every generated document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfoConfig {
    /// Absolute origin all `<loc>` and `<link>` values are built from.
    pub url: String,
    /// Feed channel title, also used for the placeholder item.
    pub title: String,
    /// Feed channel description.
    pub description: String,
    /// Feed language code.
    pub language: String,
    /// Path prefix of post detail pages.
    pub posts_prefix: String,
}

impl Default for SiteInfoConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_SITE_URL.into(),
            title: "Blog".into(),
            description: "Latest posts".into(),
            language: "en".into(),
            posts_prefix: "/posts".into(),
        }
    }
}

impl SiteInfoConfig {
    pub const URL: FieldPath = FieldPath::new("site.url");
    pub const TITLE: FieldPath = FieldPath::new("site.title");

    /// Validate site configuration.
    ///
    /// # Checks
    /// - `url` parses, uses http(s) and has a host
    /// - `title` is not blank (RSS requires a channel title)
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        validate_http_url(&self.url, Self::URL, diag);

        if self.title.trim().is_empty() {
            diag.error_with_hint(
                Self::TITLE,
                "site title is empty",
                "set a title, e.g.: \"My Blog\"",
            );
        }
    }
}

/// Check that `value` is an absolute http(s) URL with a host.
pub fn validate_http_url(value: &str, field: FieldPath, diag: &mut ConfigDiagnostics) {
    match url::Url::parse(value) {
        Ok(parsed) => {
            if !matches!(parsed.scheme(), "http" | "https") {
                diag.error_with_hint(
                    field,
                    format!(
                        "scheme '{}' not supported, must be http or https",
                        parsed.scheme()
                    ),
                    "use format like https://example.com",
                );
            }
            if parsed.host_str().is_none() {
                diag.error_with_hint(
                    field,
                    "URL must have a valid host",
                    "use format like https://example.com",
                );
            }
        }
        Err(e) => {
            diag.error_with_hint(
                field,
                format!("invalid URL: {e}"),
                "use format like https://example.com",
            );
        }
    }
}
