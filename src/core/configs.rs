use colored::Colorize;

use super::{analyzer::ProjectAnalyzer, analyzer::Scan, data::ConfigFileEntry};
use crate::utils::read_file_content;

/// Read each allow-listed config file present at the project root.
///
/// Absent files are omitted. Entries follow the allow-list order.
pub fn read_config_files(analyzer: &ProjectAnalyzer) -> Scan<ConfigFileEntry> {
    let mut scan = Scan::default();

    for name in &analyzer.config().config_files {
        let path = analyzer.root().join(name);
        if !path.exists() {
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

        scan.items.push(ConfigFileEntry {
            name: name.clone(),
            content: content.text,
        });
    }

    scan
}
