//! Configuration utility functions.

use super::{ConfigDiagnostics, FieldPath};
use std::path::{Component, Path, PathBuf};

/// Find config file by searching upward from the current directory.
///
/// See [`find_config_file_from`].
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    find_config_file_from(&cwd, config_name)
}

/// Find config file by searching upward from `start`.
///
/// Walks up parent directories until a directory containing `config_name`
/// is found. Absolute names are only checked for existence.
///
/// # Example
/// ```text
/// /home/user/blog/app/posts/   ← start
/// /home/user/blog/seomap.toml  ← found!
/// ```
pub fn find_config_file_from(start: &Path, config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.is_file().then(|| config_name.to_path_buf());
    }

    start
        .ancestors()
        .map(|dir| dir.join(config_name))
        .find(|candidate| candidate.is_file())
}

/// Check a document path: relative, made only of plain names.
///
/// The same value names the file below `build.output` and the serve route,
/// so `/x.xml`, `./x.xml` and `../x.xml` are all rejected.
pub fn validate_document_path(path: &Path, field: FieldPath, diag: &mut ConfigDiagnostics) {
    if path.as_os_str().is_empty() {
        diag.error(field, "path is empty");
        return;
    }
    if !path.components().all(|c| matches!(c, Component::Normal(_))) {
        diag.error_with_hint(
            field,
            format!("`{}` must stay inside the output directory", path.display()),
            "use a relative path without `.` or `..`, e.g.: \"sitemap.xml\"",
        );
    }
}

// ============================================================================
// tests
// ============================================================================
