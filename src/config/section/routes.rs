//! `[routes]` section configuration.
//!
//! Describes the page-route tree that static routes are discovered from.
//!
//! # Example
//!
//! ```toml
//! [routes]
//! dir = "app"
//! page_files = ["page.tsx", "page.mdx"]
//! exclude = ["api", "dashboard", "admin"]
//! private_prefix = "_"
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Route tree layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutesConfig {
    /// Root of the route tree (relative to the project root).
    pub dir: PathBuf,
    /// File names that mark a directory as a page.
    pub page_files: Vec<String>,
    /// Directory names never crawled.
    pub exclude: Vec<String>,
    /// Directories starting with this prefix are private.
    pub private_prefix: String,
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            dir: "app".into(),
            page_files: ["page.tsx", "page.ts", "page.jsx", "page.js", "page.mdx", "page.md"]
                .map(String::from)
                .to_vec(),
            exclude: [
                "api",
                "dashboard",
                "admin",
                "feed",
                "sitemap",
                "robots",
                "sitemap.xml",
                "rss.xml",
                "robots.txt",
            ]
            .map(String::from)
            .to_vec(),
            private_prefix: "_".into(),
        }
    }
}

impl RoutesConfig {
    pub const PAGE_FILES: FieldPath = FieldPath::new("routes.page_files");
    pub const DIR: FieldPath = FieldPath::new("routes.dir");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.page_files.is_empty() {
            diag.error_with_hint(
                Self::PAGE_FILES,
                "no page file names configured, only `/` would be discovered",
                "e.g.: [\"page.tsx\"]",
            );
        }
        if !self.dir.is_dir() {
            diag.warn(
                Self::DIR,
                format!("route tree {} not found, only `/` will be listed", self.dir.display()),
            );
        }
    }
}
