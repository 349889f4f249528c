//! URL slug generation for post pages.
//!
//! A post slug is `<normalized-title>-<id>`:
//!
//! ```text
//! ("42", "Crème Brûlée: A History!")  ->  "creme-brulee-a-history-42"
//! ("42", None)                         ->  "article-42"
//! ```
//!
//! Normalization lower-cases, folds Latin diacritics to their base letters,
//! drops everything outside `[a-z0-9\s-]`, turns whitespace runs into one
//! hyphen, collapses hyphen runs and truncates to [`MAX_TITLE_LEN`].

use crate::utils::path::normalize_prefix;
use regex::Regex;
use std::sync::LazyLock;

/// Maximum length of the title part of a slug.
pub const MAX_TITLE_LEN: usize = 90;

/// Title part used when a post has no usable title.
pub const FALLBACK_TITLE: &str = "article";

static RE_DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9\s-]").expect("valid regex"));
static RE_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));
static RE_HYPHENS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-{2,}").expect("valid regex"));

/// Build the `<title>-<id>` slug of a post.
///
/// An empty id is kept as-is, yielding a trailing hyphen.
pub fn slug(id: &str, title: Option<&str>) -> String {
    let title = title
        .map(slugify_title)
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| FALLBACK_TITLE.to_string());
    format!("{title}-{id}")
}

/// Normalize a title into the title part of a slug.
pub fn slugify_title(title: &str) -> String {
    let folded = fold_diacritics(&title.to_lowercase());
    let stripped = RE_DISALLOWED.replace_all(&folded, "");
    let hyphenated = RE_WHITESPACE.replace_all(stripped.trim(), "-");
    let mut slug = RE_HYPHENS.replace_all(&hyphenated, "-").into_owned();

    // Only ASCII survives the filters above, so byte truncation is safe
    slug.truncate(MAX_TITLE_LEN);
    slug
}

/// Site path of a post detail page: `<prefix>/<slug>`.
pub fn post_path(prefix: &str, id: &str, title: Option<&str>) -> String {
    format!("{}/{}", normalize_prefix(prefix), slug(id, title))
}

/// Short site path of a post: `<prefix>/<id>`.
pub fn alternate_path(prefix: &str, id: &str) -> String {
    format!("{}/{}", normalize_prefix(prefix), id)
}

/// Decompose Latin letters and keep their base letters.
///
/// Non-Latin letters have no ASCII base and are dropped here, the same as
/// canonical decomposition followed by the `[a-z0-9]` filter. Whitespace is
/// kept so it can still separate words.
fn fold_diacritics(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if c.is_ascii() || c.is_whitespace() {
            out.push(c);
        } else if is_latin_letter(c) {
            if let Some(base) = deunicode::deunicode_char(c) {
                out.extend(base.chars().map(|b| b.to_ascii_lowercase()));
            }
        }
    }
    out
}

#[inline]
fn is_latin_letter(c: char) -> bool {
    matches!(c, '\u{00C0}'..='\u{024F}' | '\u{1E00}'..='\u{1EFF}') && !matches!(c, '×' | '÷')
}
