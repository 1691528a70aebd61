//! CLI argument definitions using clap.
//!
//! Running `nextmap` without a command analyzes a project (the current
//! directory by default). The only subcommand is `init`, which writes a
//! default configuration file.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None, args_conflicts_with_subcommands = true)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub analyze: AnalyzeArgs,
}

/// Arguments for the default analyze run.
#[derive(Debug, Clone, Args)]
pub struct AnalyzeArgs {
    /// Project root directory
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Report file, relative to the working directory (overrides config file)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Skip the console summary
    #[arg(long)]
    pub no_summary: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Initialize a new .nextmaprc.json configuration file
    Init,
}
