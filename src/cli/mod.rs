use anyhow::Result;

pub mod args;
mod commands;
pub mod exit_status;
pub mod report;

pub use args::{AnalyzeArgs, Arguments, Command};
pub use exit_status::ExitStatus;

use commands::{analyze::analyze, init::init};

/// Main entry point for the nextmap CLI.
///
/// Dispatches to `init` or, when no command is given, analyzes the project.
/// `Err` means an environment failure (unreadable root, bad config,
/// unwritable report).
pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    match args.command {
        Some(Command::Init) => init(),
        None => analyze(&args.analyze),
    }
}
