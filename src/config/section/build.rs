//! `[build]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [build]
//! output = "public"
//! minify = false
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Build-time output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Directory generated documents are written to.
    pub output: PathBuf,
    /// Strip indentation from XML documents.
    pub minify: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            output: "public".into(),
            minify: false,
        }
    }
}
