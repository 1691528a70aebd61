use std::path::PathBuf;

use anyhow::{Result, bail};
use colored::Colorize;

use super::super::{
    args::AnalyzeArgs,
    exit_status::ExitStatus,
    report::{print_saved, print_summary, print_unreadable_warning},
};
use crate::{
    config::{ConfigLoadResult, load_config},
    core::ProjectAnalyzer,
};

/// Scan the project, print the summary and write the JSON report.
///
/// The report path is resolved against the working directory, not the
/// project root.
pub fn analyze(args: &AnalyzeArgs) -> Result<ExitStatus> {
    let root = &args.path;
    if !root.is_dir() {
        bail!("Project root is not a directory: {}", root.display());
    }

    let ConfigLoadResult { config, from_file } = load_config(root)?;
    if args.verbose && from_file {
        eprintln!("{} Using configuration file", "note:".bold().cyan());
    }

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.output));

    let report = ProjectAnalyzer::new(root, config)
        .with_verbose(args.verbose)
        .analyze();

    if !args.no_summary {
        print_summary(&report);
    }

    report.save(&output)?;

    if !args.no_summary {
        print_saved(&output);
    }
    print_unreadable_warning(report.unreadable_count, args.verbose);

    Ok(ExitStatus::Success)
}
