//! Nextmap - Next.js project mapper
//!
//! Nextmap is a CLI tool and library that scans a Next.js project directory
//! and reports its declared dependencies, file-based routes, component
//! sources and config files, both as a console summary and as a JSON
//! document.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, commands, console output)
//! - `config`: Configuration file loading and parsing
//! - `core`: Project scans and the report data model
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod utils;
