use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::graph::CyclePolicy;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Dataset opened when none is named on the command line.
    #[serde(default)]
    pub default_dataset: Option<String>,
    /// Extra dataset files, relative to the config file's directory.
    #[serde(default)]
    pub dataset_files: Vec<PathBuf>,
    #[serde(default)]
    pub cycle_policy: CyclePolicy,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_dataset: None,
            dataset_files: Vec::new(),
            cycle_policy: CyclePolicy::default(),
            log_level: default_log_level(),
            output: OutputConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_true")]
    pub color: bool,
    #[serde(default)]
    pub format: OutputFormat,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: default_true(),
            format: OutputFormat::default(),
        }
    }
}

const fn default_true() -> bool { true }
fn default_log_level() -> String { "warn".to_string() }
