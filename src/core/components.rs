use colored::Colorize;

use super::{analyzer::ProjectAnalyzer, analyzer::Scan, data::ComponentEntry, walk::walk_files};
use crate::utils::{read_file_content, relative_display};

/// Collect every source file under the app and components directories.
///
/// Both roots are walked in turn without de-duplication, so page files under
/// the app directory are listed here as well as in the routes. Dotfiles and
/// files with other extensions are skipped.
pub fn scan_components(analyzer: &ProjectAnalyzer) -> Scan<ComponentEntry> {
    let root = analyzer.root();
    let config = analyzer.config();
    let mut scan = Scan::default();

    for dir in [analyzer.app_dir(), analyzer.components_dir()] {
        let walked = walk_files(&dir, root, analyzer.ignores(), analyzer.verbose());
        scan.unreadable_count += walked.skipped_count;

        for path in walked.files {
            let is_hidden = path
                .file_name()
                .is_some_and(|name| name.to_string_lossy().starts_with('.'));
            let is_source = path
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| config.is_source_extension(e));
            if is_hidden || !is_source {
                continue;
            }

            let content = read_file_content(&path);
            if content.is_error {
                scan.unreadable_count += 1;
                if analyzer.verbose() {
                    eprintln!(
                        "{} Cannot read {}: {}",
                        "warning:".bold().yellow(),
                        path.display(),
                        content.text
                    );
                }
            }

            scan.items.push(ComponentEntry {
                path: relative_display(&path, root),
                content: content.text,
            });
        }
    }

    scan
}
