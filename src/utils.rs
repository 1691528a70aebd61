//! Common utility functions shared across the codebase.

use std::{fs, path::Path};

/// Outcome of a best-effort file read.
///
/// A failed read still yields text: the error description stands in for the
/// content so a scan never aborts on a single unreadable file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileContent {
    pub text: String,
    pub is_error: bool,
}

/// Read a file as UTF-8, substituting `Error reading file: <reason>` on failure.
///
/// # Examples
///
/// ```
/// use nextmap::utils::read_file_content;
///
/// let content = read_file_content(std::path::Path::new("does/not/exist.tsx"));
/// assert!(content.is_error);
/// assert!(content.text.starts_with("Error reading file: "));
/// ```
pub fn read_file_content(path: &Path) -> FileContent {
    match fs::read_to_string(path) {
        Ok(text) => FileContent {
            text,
            is_error: false,
        },
        Err(e) => FileContent {
            text: format!("Error reading file: {}", e),
            is_error: true,
        },
    }
}

/// Path of `path` relative to `base`, or `path` itself when it is not under `base`.
pub fn relative_display(path: &Path, base: &Path) -> String {
    path.strip_prefix(base)
        .unwrap_or(path)
        .to_string_lossy()
        .into_owned()
}

/// Join path components with forward slashes regardless of platform.
pub fn to_forward_slashes(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
