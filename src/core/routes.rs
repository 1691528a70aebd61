use std::path::Path;

use super::{analyzer::ProjectAnalyzer, analyzer::Scan, data::RouteEntry, walk::walk_files};
use crate::{
    config::PAGE_FILE_STEM,
    utils::{relative_display, to_forward_slashes},
};

/// Route path served by a page file in `parent`, relative to the app directory.
///
/// The app directory itself maps to `/`; nested directories keep their
/// segments as-is (`blog/[slug]`, `(marketing)/about`).
pub fn route_for(parent: &Path, app_dir: &Path) -> String {
    let relative = to_forward_slashes(parent.strip_prefix(app_dir).unwrap_or(parent));
    if relative.is_empty() {
        "/".to_string()
    } else {
        relative
    }
}

fn is_page_file(name: &str) -> bool {
    name.strip_prefix(PAGE_FILE_STEM)
        .is_some_and(|rest| rest.starts_with('.'))
}

/// Find `page.*` files under the app directory and derive their routes.
///
/// The component scan walks the same directory and reports its inaccessible
/// entries, so this walk stays silent and leaves `unreadable_count` at zero.
pub fn scan_routes(analyzer: &ProjectAnalyzer) -> Scan<RouteEntry> {
    let root = analyzer.root();
    let app_dir = analyzer.app_dir();
    let mut scan = Scan::default();

    let walked = walk_files(&app_dir, root, analyzer.ignores(), false);

    for path in walked.files {
        let is_page = path
            .file_name()
            .is_some_and(|name| is_page_file(&name.to_string_lossy()));
        let is_source = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| analyzer.config().is_source_extension(e));
        if !is_page || !is_source {
            continue;
        }

        let Some(parent) = path.parent() else {
            continue;
        };

        scan.items.push(RouteEntry {
            route: route_for(parent, &app_dir),
            file: relative_display(&path, root),
        });
    }

    scan
}
