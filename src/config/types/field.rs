//! Config field paths used in diagnostics.

use owo_colors::OwoColorize;
use std::fmt;

/// A dotted path into `seomap.toml`, e.g. `site.url`.
///
/// Each section exposes its paths as associated constants so diagnostics
/// never spell a field name by hand:
///
/// ```ignore
/// diag.error(SiteInfoConfig::URL, "must use http or https");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(pub &'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        self.0
    }
}
