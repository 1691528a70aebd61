//! Report data types and their JSON shape.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::{
    Serialize, Serializer,
    ser::{SerializeMap, SerializeStruct},
};
use serde_json::{Map, Value};

pub const MANIFEST_NOT_FOUND: &str = "package.json not found";
pub const MANIFEST_INVALID: &str = "Invalid package.json";

/// Parsed `package.json`, or a marker describing why it is unavailable.
///
/// Markers serialize as `{"error": "..."}`; a parsed manifest serializes
/// unchanged.
#[derive(Debug, Clone, PartialEq)]
pub enum PackageManifest {
    Parsed(Value),
    NotFound,
    Invalid,
}

impl PackageManifest {
    /// The `dependencies` object, when the manifest parsed and declares one.
    pub fn dependencies(&self) -> Option<&Map<String, Value>> {
        match self {
            PackageManifest::Parsed(value) => value.get("dependencies").and_then(Value::as_object),
            PackageManifest::NotFound | PackageManifest::Invalid => None,
        }
    }

    pub fn error_message(&self) -> Option<&'static str> {
        match self {
            PackageManifest::Parsed(_) => None,
            PackageManifest::NotFound => Some(MANIFEST_NOT_FOUND),
            PackageManifest::Invalid => Some(MANIFEST_INVALID),
        }
    }
}

impl Serialize for PackageManifest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PackageManifest::Parsed(value) => value.serialize(serializer),
            PackageManifest::NotFound | PackageManifest::Invalid => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("error", &self.error_message())?;
                map.end()
            }
        }
    }
}

/// A source file found under the app or components directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentEntry {
    pub path: String,
    pub content: String,
}

/// A page file and the route it serves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteEntry {
    pub route: String,
    pub file: String,
}

/// A config file present at the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigFileEntry {
    pub name: String,
    pub content: String,
}

/// Full analysis result. Serialized as the report document.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisReport {
    pub package: PackageManifest,
    pub components: Vec<ComponentEntry>,
    pub routes: Vec<RouteEntry>,
    pub configs: Vec<ConfigFileEntry>,
    /// Files or directories that could not be read during the scan.
    pub unreadable_count: usize,
}

struct ConfigMap<'a>(&'a [ConfigFileEntry]);

impl Serialize for ConfigMap<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for entry in self.0 {
            map.serialize_entry(&entry.name, &entry.content)?;
        }
        map.end()
    }
}

impl Serialize for AnalysisReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut report = serializer.serialize_struct("AnalysisReport", 4)?;
        report.serialize_field("package", &self.package)?;
        report.serialize_field("components", &self.components)?;
        report.serialize_field("routes", &self.routes)?;
        report.serialize_field("configs", &ConfigMap(&self.configs))?;
        report.end()
    }
}

impl AnalysisReport {
    /// Render the report with 2-space indentation and a trailing newline.
    pub fn to_json_pretty(&self) -> Result<String> {
        let content = serde_json::to_string_pretty(self).context("Failed to serialize report")?;
        Ok(format!("{}\n", content))
    }

    /// Write the report to `path`, replacing any previous contents.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = self.to_json_pretty()?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write report: {}", path.display()))
    }
}
