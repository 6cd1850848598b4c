//! Sources of statically authored template configurations
//!
//! Presets are plain [`TemplateConfig`] values. They come from the built-in set
//! or from author-written files (TOML with `[[template]]` tables, or a JSON
//! array of configs).

mod builtin;

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::template::{Category, TemplateConfig};

pub use builtin::BuiltinPresets;

/// Errors that can occur when loading preset files
#[derive(Error, Debug)]
pub enum PresetError {
    #[error("failed to read preset file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse preset TOML {path}: {source}")]
    Toml {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("failed to parse preset JSON {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("unsupported preset file {path} (expected .toml or .json)")]
    UnsupportedFormat { path: PathBuf },
}

/// Producer of authored configurations, consumed category by category
pub trait PresetSource {
    /// Short label used in logs
    fn name(&self) -> &str;

    /// Authored configurations for one category, in authoring order
    fn configs(&self, category: Category) -> Vec<TemplateConfig>;
}

/// TOML layout for preset files
#[derive(Deserialize)]
struct TomlPresetFile {
    #[serde(default)]
    template: Vec<TemplateConfig>,
}

/// Parse preset configurations from TOML source
pub fn parse_toml_presets(content: &str) -> Result<Vec<TemplateConfig>, toml::de::Error> {
    let parsed: TomlPresetFile = toml::from_str(content)?;
    Ok(parsed.template)
}

/// Load every configuration in one preset file
pub fn load_preset_file(path: &Path) -> Result<Vec<TemplateConfig>, PresetError> {
    let content = fs::read_to_string(path).map_err(|source| PresetError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    match path.extension().and_then(|e| e.to_str()) {
        Some("toml") => parse_toml_presets(&content).map_err(|source| PresetError::Toml {
            path: path.to_path_buf(),
            source,
        }),
        Some("json") => serde_json::from_str(&content).map_err(|source| PresetError::Json {
            path: path.to_path_buf(),
            source,
        }),
        _ => Err(PresetError::UnsupportedFormat {
            path: path.to_path_buf(),
        }),
    }
}

/// Presets loaded from every `.toml`/`.json` file in a directory
#[derive(Debug, Clone)]
pub struct PresetDirectory {
    label: String,
    configs: Vec<TemplateConfig>,
}

impl PresetDirectory {
    /// Load all preset files in `dir`, in file-name order
    pub fn load(dir: &Path) -> Result<Self, PresetError> {
        let entries = fs::read_dir(dir).map_err(|source| PresetError::Io {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut files = Vec::new();
        for entry in entries {
            let path = entry
                .map_err(|source| PresetError::Io {
                    path: dir.to_path_buf(),
                    source,
                })?
                .path();
            let is_preset = matches!(
                path.extension().and_then(|e| e.to_str()),
                Some("toml") | Some("json")
            );
            if path.is_file() && is_preset {
                files.push(path);
            }
        }
        files.sort();

        let mut configs = Vec::new();
        for file in &files {
            let loaded = load_preset_file(file)?;
            tracing::debug!(file = %file.display(), count = loaded.len(), "loaded preset file");
            configs.extend(loaded);
        }

        Ok(Self {
            label: dir.display().to_string(),
            configs,
        })
    }

    /// Every loaded configuration, across categories
    pub fn all(&self) -> &[TemplateConfig] {
        &self.configs
    }
}

impl PresetSource for PresetDirectory {
    fn name(&self) -> &str {
        &self.label
    }

    fn configs(&self, category: Category) -> Vec<TemplateConfig> {
        self.configs
            .iter()
            .filter(|c| c.category == category)
            .cloned()
            .collect()
    }
}
