//! Output path utilities
//!
//! Maps terms to page file names and keeps reported paths in '/' form.

use std::path::{Path, PathBuf};

/// Extension appended to every page name
pub const PAGE_EXTENSION: &str = ".html";

/// File name of the index page
pub const INDEX_FILE_NAME: &str = "index.html";

/// Page file name for a term: the term itself plus ".html", unsanitized
pub fn page_file_name(term: &str) -> String {
    format!("{}{}", term, PAGE_EXTENSION)
}

/// Full path of a term page inside the output directory
pub fn page_path(out_dir: &Path, term: &str) -> PathBuf {
    out_dir.join(page_file_name(term))
}

/// Full path of the index page inside the output directory
pub fn index_path(out_dir: &Path) -> PathBuf {
    out_dir.join(INDEX_FILE_NAME)
}

/// Normalize a path to use '/' as separator (for cross-platform consistency)
pub fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
