//! Motion Catalog - a registry and generator for parameterized animation templates
//!
//! This library turns authored template configurations into validated, id-stamped
//! templates, fills each category's id range with generated variations, and
//! exports the catalog as JSON, a manifest, SQL inserts and a lookup module.
//!
//! # Example
//!
//! ```rust
//! use motion_catalog::{generate, GeneratorConfig};
//! use motion_catalog::template::Category;
//!
//! let catalog = generate(&GeneratorConfig::default().with_categories(vec![Category::Core])).unwrap();
//!
//! let first = catalog.templates()[0];
//! assert_eq!(first.id.to_string(), "ID-t1");
//! assert_eq!(first.name, "Fade In");
//! ```

pub mod config;
pub mod export;
pub mod generator;
pub mod presets;
pub mod template;

pub use config::{ConfigError, GeneratorConfig};
pub use export::{export_catalog, ExportError, ExportOptions, ExportReport};
pub use generator::{BatchError, BatchGenerator, Catalog};
pub use presets::{BuiltinPresets, PresetDirectory, PresetError, PresetSource};
pub use template::{Template, TemplateConfig, TemplateRegistry};

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors that can occur during the generation pipeline
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Error loading the configuration file
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// Error loading authored preset files
    #[error("preset error: {0}")]
    Preset(#[from] PresetError),

    /// Error while collecting templates
    #[error(transparent)]
    Batch(#[from] BatchError),

    /// One or more artifacts could not be written
    #[error("export failed: {}", format_export_failures(&.0.failures))]
    Export(ExportReport),
}

fn format_export_failures(errors: &[ExportError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Build the batch generator a configuration describes
pub fn batch_generator(config: &GeneratorConfig) -> Result<BatchGenerator, GenerateError> {
    let mut batch = BatchGenerator::new().with_fill(config.fill_ranges);
    if config.include_builtin_presets {
        batch = batch.with_source(BuiltinPresets);
    }
    for dir in &config.preset_dirs {
        batch = batch.with_source(PresetDirectory::load(dir)?);
    }
    Ok(batch)
}

/// Collect every configured category into a catalog
///
/// Nothing is written to disk.
pub fn generate(config: &GeneratorConfig) -> Result<Catalog, GenerateError> {
    let catalog = batch_generator(config)?.run(&config.categories)?;
    tracing::info!(total = catalog.len(), "generated catalog");
    Ok(catalog)
}

/// Generate the catalog and write every artifact into `config.output_dir`
///
/// `generated_at` is stamped into the lookup module header.
///
/// # Example
///
/// ```rust
/// use motion_catalog::{generate_and_export, GeneratorConfig};
///
/// let dir = tempfile::tempdir().unwrap();
/// let config = GeneratorConfig::default().with_output_dir(dir.path());
/// let (catalog, report) = generate_and_export(&config, chrono::Utc::now()).unwrap();
///
/// assert!(report.is_success());
/// assert!(dir.path().join("all-templates.json").is_file());
/// assert!(catalog.len() > 6);
/// ```
pub fn generate_and_export(
    config: &GeneratorConfig,
    generated_at: DateTime<Utc>,
) -> Result<(Catalog, ExportReport), GenerateError> {
    let catalog = generate(config)?;
    let report = export_catalog(&catalog, &ExportOptions::from_config(config, generated_at));
    if !report.is_success() {
        return Err(GenerateError::Export(report));
    }
    Ok((catalog, report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::Category;

    #[test]
    fn test_generate_default_covers_every_category() {
        let catalog = generate(&GeneratorConfig::default()).unwrap();
        for category in Category::ALL {
            assert!(!catalog.templates_by_category(category).is_empty());
        }
    }

    #[test]
    fn test_missing_preset_dir_is_preset_error() {
        let config = GeneratorConfig::default().with_preset_dir("/definitely/not/here");
        assert!(matches!(generate(&config), Err(GenerateError::Preset(_))));
    }

    #[test]
    fn test_no_sources_and_no_fill_is_empty() {
        let config = GeneratorConfig::default()
            .with_builtin_presets(false)
            .with_fill_ranges(false);
        let catalog = generate(&config).unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.batches().len(), 6);
    }
}
