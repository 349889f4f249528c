//! `[sitemap]` section configuration.

use crate::config::{ConfigDiagnostics, FieldPath, util::validate_document_path};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SitemapConfig {
    /// Enable sitemap generation.
    pub enable: bool,
    /// Output path for sitemap file, also its serve route.
    pub path: PathBuf,
    /// Prefix of the short `/<prefix>/<id>` entry emitted per post.
    /// Unset disables alternate entries.
    pub alternate_prefix: Option<String>,
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self {
            enable: true,
            path: "sitemap.xml".into(),
            alternate_prefix: Some("/blog".into()),
        }
    }
}

impl SitemapConfig {
    pub const PATH: FieldPath = FieldPath::new("sitemap.path");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.enable {
            validate_document_path(&self.path, Self::PATH, diag);
        }
    }
}
