// src/config/mod.rs
pub mod types;

pub use self::types::{Config, OutputConfig, OutputFormat};

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::datasets::DatasetCatalog;
use crate::error::{LineageError, Result};

pub const CONFIG_FILE: &str = "lineage.toml";

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `lineage.toml` from the working directory, falling back to
    /// defaults when the file does not exist.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(CONFIG_FILE), false)
    }

    /// Loads configuration from `path`. A missing file yields defaults unless
    /// `required` is set.
    ///
    /// # Errors
    /// Returns `Io` if the file cannot be read and `Config` if it does not parse.
    pub fn load_from(path: &Path, required: bool) -> Result<Self> {
        if !path.exists() && !required {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::new());
        }
        let content = fs::read_to_string(path).map_err(|source| LineageError::Io {
            source,
            path: path.to_path_buf(),
        })?;
        let mut config = Self::parse_toml(&content)?;
        if let Some(dir) = path.parent() {
            config.resolve_paths(dir);
        }
        Ok(config)
    }

    /// Parses configuration text.
    ///
    /// # Errors
    /// Returns `Config` with the parser message on invalid TOML or values.
    pub fn parse_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| LineageError::Config(e.to_string()))
    }

    fn resolve_paths(&mut self, base: &Path) {
        self.dataset_files = self
            .dataset_files
            .iter()
            .map(|p| if p.is_absolute() { p.clone() } else { base.join(p) })
            .collect();
    }

    /// Builds the dataset catalog: built-ins, then configured files, then
    /// `extra_files`, then the configured default.
    ///
    /// # Errors
    /// Returns error if a dataset file fails to load or the default is unknown.
    pub fn catalog(&self, extra_files: &[PathBuf]) -> Result<DatasetCatalog> {
        let mut catalog = DatasetCatalog::builtin();
        for path in self.dataset_files.iter().chain(extra_files) {
            catalog.load_file(path)?;
        }
        if let Some(name) = &self.default_dataset {
            catalog.set_default(name)?;
        }
        Ok(catalog)
    }
}
