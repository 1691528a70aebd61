use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".nextmaprc.json";

/// Manifest file read from the project root.
pub const MANIFEST_FILE_NAME: &str = "package.json";

/// Filename stem that marks a route endpoint inside the app directory.
pub const PAGE_FILE_STEM: &str = "page";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_app_dir")]
    pub app_dir: String,
    #[serde(default = "default_components_dir")]
    pub components_dir: String,
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    #[serde(default = "default_config_files")]
    pub config_files: Vec<String>,
    #[serde(default = "default_output")]
    pub output: String,
    #[serde(default)]
    pub ignores: Vec<String>,
}

fn default_app_dir() -> String {
    "app".to_string()
}

fn default_components_dir() -> String {
    "components".to_string()
}

fn default_extensions() -> Vec<String> {
    ["tsx", "jsx", "ts", "js"].map(String::from).to_vec()
}

fn default_config_files() -> Vec<String> {
    [
        "package.json",
        "tsconfig.json",
        "next.config.js",
        "tailwind.config.js",
        "postcss.config.js",
        ".eslintrc.json",
    ]
    .map(String::from)
    .to_vec()
}

fn default_output() -> String {
    "project_analysis.json".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_dir: default_app_dir(),
            components_dir: default_components_dir(),
            extensions: default_extensions(),
            config_files: default_config_files(),
            output: default_output(),
            ignores: Vec::new(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Rejects invalid glob patterns in `ignores`, an empty extension list,
    /// and empty directory names.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        if self.extensions.is_empty() {
            bail!("'extensions' must list at least one file extension");
        }
        if let Some(ext) = self.extensions.iter().find(|e| e.is_empty() || e.starts_with('.')) {
            bail!(
                "Invalid entry in 'extensions': \"{}\" (use the bare extension, e.g. \"tsx\")",
                ext
            );
        }

        if self.app_dir.trim().is_empty() {
            bail!("'appDir' must not be empty");
        }
        if self.components_dir.trim().is_empty() {
            bail!("'componentsDir' must not be empty");
        }
        if self.output.trim().is_empty() {
            bail!("'output' must not be empty");
        }

        Ok(())
    }

    /// Compile `ignores` into glob patterns. Call after [`Config::validate`].
    pub fn ignore_patterns(&self) -> Vec<Pattern> {
        self.ignores
            .iter()
            .filter_map(|p| Pattern::new(p).ok())
            .collect()
    }

    /// Whether `extension` is one of the scanned source extensions.
    pub fn is_source_extension(&self, extension: &str) -> bool {
        self.extensions.iter().any(|e| e == extension)
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
