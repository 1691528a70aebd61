//! Project scanning.
//!
//! Four independent, read-only scans feed one report:
//! - `manifest`: parse `package.json`
//! - `components`: source files under the app and components directories
//! - `routes`: `page.*` files under the app directory
//! - `configs`: allow-listed config files at the project root
//!
//! `ProjectAnalyzer` runs all of them; `data` holds the report types.

pub mod analyzer;
pub mod components;
pub mod configs;
pub mod data;
pub mod manifest;
pub mod routes;
pub mod walk;

pub use analyzer::{ProjectAnalyzer, Scan};
pub use data::*;
