//! robots.txt generation.
//!
//! ```text
//! User-agent: *
//! Allow: /
//! Disallow: /dashboard
//! Disallow: /api
//! Disallow: /admin
//!
//! Sitemap: https://example.com/sitemap.xml
//! ```

use crate::{config::SiteConfig, utils::path::join_url};
use std::fmt::Write;

pub fn render_robots(config: &SiteConfig) -> String {
    let mut out = String::from("User-agent: *\nAllow: /\n");

    for prefix in &config.robots.disallow {
        let _ = writeln!(out, "Disallow: {prefix}");
    }

    // No sitemap line for a disabled sitemap
    if config.sitemap.enable {
        let sitemap = join_url(&config.site.url, &config.sitemap.path.to_string_lossy());
        let _ = write!(out, "\nSitemap: {sitemap}\n");
    }
    out
}
