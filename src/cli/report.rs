//! Console summary printing.
//!
//! Separate from the scans so nextmap can be used as a library.

use std::{
    io::{self, Write},
    path::Path,
};

use colored::Colorize;
use serde_json::Value;

use crate::core::AnalysisReport;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Print the analysis summary to stdout.
pub fn print_summary(report: &AnalysisReport) {
    print_summary_to(report, &mut io::stdout().lock());
}

/// Print the analysis summary to a custom writer.
///
/// Sections: dependencies (when the manifest declares them), routes,
/// components and config files, one item per line.
pub fn print_summary_to<W: Write>(report: &AnalysisReport, writer: &mut W) {
    let _ = writeln!(writer);
    let _ = writeln!(writer, "{}", "=== Next.js Project Analysis ===".bold());
    let _ = writeln!(writer);

    let _ = writeln!(writer, "{}", "📦 Dependencies:".bold());
    if let Some(deps) = report.package.dependencies() {
        for (name, version) in deps {
            let _ = writeln!(writer, "  - {}: {}", name, format_version(version));
        }
    }

    let _ = writeln!(writer);
    let _ = writeln!(writer, "{}", "🛣️  Routes:".bold());
    for route in &report.routes {
        let _ = writeln!(writer, "  - {} -> {}", route.route.cyan(), route.file);
    }

    let _ = writeln!(writer);
    let _ = writeln!(writer, "{}", "🧩 Components:".bold());
    for component in &report.components {
        let _ = writeln!(writer, "  - {}", component.path);
    }

    let _ = writeln!(writer);
    let _ = writeln!(writer, "{}", "⚙️  Configuration Files:".bold());
    for config in &report.configs {
        let _ = writeln!(writer, "  - {}", config.name);
    }
}

/// Print where the report was written.
pub fn print_saved(output: &Path) {
    print_saved_to(output, &mut io::stdout().lock());
}

pub fn print_saved_to<W: Write>(output: &Path, writer: &mut W) {
    let _ = writeln!(writer);
    let _ = writeln!(
        writer,
        "📝 {}",
        format!("Full analysis saved to {}", output.display()).green()
    );
}

/// Print a hint about unreadable entries when not in verbose mode.
pub fn print_unreadable_warning(count: usize, verbose: bool) {
    print_unreadable_warning_to(count, verbose, &mut io::stderr().lock());
}

pub fn print_unreadable_warning_to<W: Write>(count: usize, verbose: bool, writer: &mut W) {
    if count > 0 && !verbose {
        let _ = writeln!(
            writer,
            "{} {} file(s) could not be read (use {} for details)",
            "warning:".bold().yellow(),
            count,
            "-v".cyan()
        );
    }
}

fn format_version(version: &Value) -> String {
    match version {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
