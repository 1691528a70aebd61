use std::path::{Path, PathBuf};

use colored::Colorize;
use glob::Pattern;
use walkdir::WalkDir;

use crate::utils::to_forward_slashes;

/// Regular files found under a directory.
pub struct WalkResult {
    /// Files in traversal order: depth-first, siblings sorted by file name.
    pub files: Vec<PathBuf>,
    /// Entries that could not be accessed.
    pub skipped_count: usize,
}

/// Recursively collect regular files under `dir`.
///
/// A missing `dir` yields no files and no skips. Files whose path relative to
/// `project_root` matches one of `ignores` are left out.
pub fn walk_files(
    dir: &Path,
    project_root: &Path,
    ignores: &[Pattern],
    verbose: bool,
) -> WalkResult {
    let mut files = Vec::new();
    let mut skipped_count = 0;

    if !dir.is_dir() {
        return WalkResult {
            files,
            skipped_count,
        };
    }

    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                skipped_count += 1;
                if verbose {
                    eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                }
                continue;
            }
        };
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        if !ignores.is_empty() {
            let relative = to_forward_slashes(path.strip_prefix(project_root).unwrap_or(path));
            if ignores.iter().any(|p| p.matches(&relative)) {
                continue;
            }
        }

        files.push(path.to_path_buf());
    }

    WalkResult {
        files,
        skipped_count,
    }
}
