// Configuration loading and defaults

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root directory scanned when nothing else is configured
pub const DEFAULT_ROOT: &str = "./ql/java";

/// DOT file written when nothing else is configured
pub const DEFAULT_OUTPUT: &str = "inheritance.dot";

/// Config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "qlhier.toml";

/// Query and library source extensions
pub const DEFAULT_EXTENSIONS: [&str; 2] = ["ql", "qll"];

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub scan: ScanConfig,
    pub output: OutputConfig,
}

/// Source discovery settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    pub root: PathBuf,
    pub extensions: Vec<String>,
    pub exclude: Vec<String>,
}

/// Output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub path: PathBuf,
    pub graph_name: String,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            exclude: vec![],
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_OUTPUT),
            graph_name: "G".to_string(),
        }
    }
}

impl Config {
    /// Load config from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from file if it exists, otherwise return defaults.
    ///
    /// A file that exists but fails to load is reported and replaced by defaults.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                println!("Error loading config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Merge CLI arguments into config (CLI takes precedence)
    pub fn merge_cli(&mut self, root: Option<PathBuf>, output: Option<PathBuf>, exclude: Vec<String>) {
        if let Some(root) = root {
            self.scan.root = root;
        }

        if let Some(out) = output {
            self.output.path = out;
        }

        if !exclude.is_empty() {
            self.scan.exclude.extend(exclude);
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.scan.extensions.is_empty() {
            return Err(Error::config_validation("at least one extension required"));
        }

        if let Some(ext) = self.scan.extensions.iter().find(|e| e.starts_with('.') || e.is_empty()) {
            return Err(Error::config_validation(format!(
                "extension {:?} must be non-empty and written without a leading dot",
                ext
            )));
        }

        if self.output.graph_name.trim().is_empty() {
            return Err(Error::config_validation("graph_name must not be empty"));
        }

        Ok(())
    }
}
