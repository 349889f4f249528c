//! XML text helpers shared by the sitemap and feed writers.

use std::borrow::Cow;

/// Escape special XML characters.
pub fn escape_xml(s: &str) -> Cow<'_, str> {
    // Fast path: check if escaping is needed
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len() + 16);
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Minify XML content if enabled.
///
/// Only strips indentation and blank lines, so text nodes keep their inner
/// whitespace.
pub fn minify_xml(content: String, enabled: bool) -> String {
    if !enabled {
        return content;
    }
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("")
}
