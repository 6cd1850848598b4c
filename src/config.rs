//! Generator configuration
//!
//! Every field has a default, so an empty TOML file (or no file at all) gives
//! a full run over all six categories with the built-in presets.

use std::path::{Path, PathBuf};

use indexmap::IndexSet;
use serde::{Deserialize, Deserializer};
use thiserror::Error;

use crate::template::Category;

/// Errors that can occur when loading a configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

pub const DEFAULT_OUTPUT_DIR: &str = "output/templates";
pub const DEFAULT_MANIFEST_VERSION: &str = "1.0.0";
pub const DEFAULT_MODULE_FILE_NAME: &str = "template-constants.ts";

/// Settings for one generation run
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Directory every artifact is written into
    pub output_dir: PathBuf,

    /// Version string recorded in the manifest
    pub manifest_version: String,

    /// Categories to generate, in output order. Accepts slugs or labels.
    #[serde(deserialize_with = "deserialize_categories")]
    pub categories: Vec<Category>,

    /// Extra directories of authored preset files
    pub preset_dirs: Vec<PathBuf>,

    /// Whether the compiled-in presets are part of the run
    pub include_builtin_presets: bool,

    /// Fill each category's unused ids with generated variations
    pub fill_ranges: bool,

    /// File name of the generated lookup module
    pub module_file_name: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            manifest_version: DEFAULT_MANIFEST_VERSION.to_string(),
            categories: Category::ALL.to_vec(),
            preset_dirs: Vec::new(),
            include_builtin_presets: true,
            fill_ranges: true,
            module_file_name: DEFAULT_MODULE_FILE_NAME.to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load configuration from a TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Repeated categories are dropped, keeping first-seen order
    pub fn with_categories(mut self, categories: Vec<Category>) -> Self {
        self.categories = dedup(categories);
        self
    }

    pub fn with_preset_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.preset_dirs.push(dir.into());
        self
    }

    pub fn with_builtin_presets(mut self, include: bool) -> Self {
        self.include_builtin_presets = include;
        self
    }

    pub fn with_fill_ranges(mut self, fill: bool) -> Self {
        self.fill_ranges = fill;
        self
    }
}

fn deserialize_categories<'de, D>(deserializer: D) -> Result<Vec<Category>, D::Error>
where
    D: Deserializer<'de>,
{
    let names = Vec::<String>::deserialize(deserializer)?;
    let categories = names
        .iter()
        .map(|name| name.parse().map_err(serde::de::Error::custom))
        .collect::<Result<Vec<Category>, _>>()?;
    Ok(dedup(categories))
}

fn dedup(categories: Vec<Category>) -> Vec<Category> {
    categories
        .into_iter()
        .collect::<IndexSet<_>>()
        .into_iter()
        .collect()
}
