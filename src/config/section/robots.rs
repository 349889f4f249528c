//! `[robots]` section configuration.

use crate::config::{ConfigDiagnostics, FieldPath, util::validate_document_path};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RobotsConfig {
    /// Enable robots.txt generation.
    pub enable: bool,
    /// Output path, also its serve route.
    pub path: PathBuf,
    /// Path prefixes crawlers are asked to skip.
    pub disallow: Vec<String>,
}

impl Default for RobotsConfig {
    fn default() -> Self {
        Self {
            enable: true,
            path: "robots.txt".into(),
            disallow: ["/dashboard", "/api", "/admin"].map(String::from).to_vec(),
        }
    }
}

impl RobotsConfig {
    pub const PATH: FieldPath = FieldPath::new("robots.path");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.enable {
            validate_document_path(&self.path, Self::PATH, diag);
        }
    }
}
