use std::path::{Path, PathBuf};

use glob::Pattern;

use super::{
    components::scan_components, configs::read_config_files, data::AnalysisReport,
    manifest::read_manifest, routes::scan_routes,
};
use crate::config::Config;

/// Items produced by one scan plus the number of entries that could not be read.
#[derive(Debug)]
pub struct Scan<T> {
    pub items: Vec<T>,
    pub unreadable_count: usize,
}

impl<T> Default for Scan<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            unreadable_count: 0,
        }
    }
}

/// Scans a Next.js project directory.
///
/// Each scan is independent and read-only; [`ProjectAnalyzer::analyze`] runs
/// all four and assembles an [`AnalysisReport`].
pub struct ProjectAnalyzer {
    root: PathBuf,
    config: Config,
    ignores: Vec<Pattern>,
    verbose: bool,
}

impl ProjectAnalyzer {
    pub fn new(root: impl Into<PathBuf>, config: Config) -> Self {
        let ignores = config.ignore_patterns();
        Self {
            root: root.into(),
            config,
            ignores,
            verbose: false,
        }
    }

    /// Print a warning for every unreadable entry.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn ignores(&self) -> &[Pattern] {
        &self.ignores
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub fn app_dir(&self) -> PathBuf {
        self.root.join(&self.config.app_dir)
    }

    pub fn components_dir(&self) -> PathBuf {
        self.root.join(&self.config.components_dir)
    }

    pub fn analyze(&self) -> AnalysisReport {
        let package = read_manifest(&self.root);
        let components = scan_components(self);
        let routes = scan_routes(self);
        let configs = read_config_files(self);

        AnalysisReport {
            package,
            components: components.items,
            routes: routes.items,
            configs: configs.items,
            unreadable_count: components.unreadable_count
                + routes.unreadable_count
                + configs.unreadable_count,
        }
    }
}
