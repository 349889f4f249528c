//! `[feed]` section configuration (RSS/Atom).

use crate::config::{ConfigDiagnostics, FieldPath, util::validate_document_path};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Feed output format.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FeedFormat {
    /// RSS 2.0 format (default).
    #[default]
    Rss,
    /// Atom 1.0 format.
    Atom,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Enable feed generation.
    pub enable: bool,
    /// Output path for feed file, also its serve route.
    pub path: PathBuf,
    /// Feed format (RSS 2.0 or Atom 1.0).
    pub format: FeedFormat,
    /// Number of posts requested for the feed (single fetch).
    pub limit: u32,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            enable: true,
            path: "rss.xml".into(),
            format: FeedFormat::Rss,
            limit: 50,
        }
    }
}

impl FeedConfig {
    pub const PATH: FieldPath = FieldPath::new("feed.path");
    pub const LIMIT: FieldPath = FieldPath::new("feed.limit");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !self.enable {
            return;
        }
        validate_document_path(&self.path, Self::PATH, diag);
        if self.limit == 0 {
            diag.error_with_hint(Self::LIMIT, "must be positive", "the default is 50");
        }
    }
}
