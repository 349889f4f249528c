//! Filesystem path helpers.
//!
//! - `normalize_path` - absolute form for config-relative paths
//! - `ensure_parent` - create the parent directory of an output file

use std::io;
use std::path::{Path, PathBuf};

/// Normalize a file system path to absolute form.
///
/// Tries `canonicalize()` first (resolves symlinks, `.`, `..`).
/// Falls back to:
/// - Return as-is if already absolute
/// - Join with current directory if relative
///
/// The fallback matters for output directories, which usually do not exist
/// before the first build.
#[inline]
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
        }
    })
}

/// Create the parent directory of `file` if it is missing.
pub fn ensure_parent(file: &Path) -> io::Result<()> {
    match file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path_absolute() {
        let normalized = normalize_path(Path::new("/absolute/path/sitemap.xml"));
        assert_eq!(normalized, PathBuf::from("/absolute/path/sitemap.xml"));
    }

    #[test]
    fn test_normalize_path_relative() {
        let normalized = normalize_path(Path::new("public/feeds"));
        assert!(normalized.is_absolute());
        assert!(normalized.ends_with("public/feeds"));
    }

    #[test]
    fn test_ensure_parent_creates_nested_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("a/b/sitemap.xml");

        ensure_parent(&file).unwrap();
        assert!(dir.path().join("a/b").is_dir());

        // Bare file names have no parent to create
        ensure_parent(Path::new("robots.txt")).unwrap();
    }
}
