//! Batch generation: authored presets first, then generated fill per category

use indexmap::IndexSet;
use thiserror::Error;

use crate::presets::PresetSource;
use crate::template::{Category, RegistryError, Template, TemplateRegistry, ValidationError};

use super::families::{configs_for, ease_variation_specs, SWAP_EASINGS};

/// Errors that abort a batch run
#[derive(Debug, Error)]
pub enum BatchError {
    /// A registry failure outside authored-preset validation, such as range exhaustion
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// One or more authored presets failed validation
    #[error("{} authored template(s) failed validation:\n{}", .0.len(), format_failures(.0))]
    InvalidPresets(Vec<ValidationError>),
}

fn format_failures(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| format!("  - {}", e))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Counts for one category of a finished run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryBatch {
    pub category: Category,
    /// Authored presets registered
    pub authored: usize,
    /// Family configurations registered
    pub generated: usize,
    /// Ease-swap variations derived from authored templates
    pub derived: usize,
    /// Generated configurations rejected by validation
    pub skipped: usize,
}

impl CategoryBatch {
    fn new(category: Category) -> Self {
        Self {
            category,
            authored: 0,
            generated: 0,
            derived: 0,
            skipped: 0,
        }
    }

    pub fn total(&self) -> usize {
        self.authored + self.generated + self.derived
    }
}

/// The result of a batch run: the populated registry plus per-category counts
#[derive(Debug)]
pub struct Catalog {
    registry: TemplateRegistry,
    batches: Vec<CategoryBatch>,
}

impl Catalog {
    pub fn registry(&self) -> &TemplateRegistry {
        &self.registry
    }

    pub fn batches(&self) -> &[CategoryBatch] {
        &self.batches
    }

    /// Categories that were collected, in run order
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.batches.iter().map(|b| b.category)
    }

    /// Every template in registration order
    pub fn templates(&self) -> Vec<&Template> {
        self.registry.all_templates().collect()
    }

    pub fn templates_by_category(&self, category: Category) -> Vec<&Template> {
        self.registry.templates_by_category(category)
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    pub fn into_registry(self) -> TemplateRegistry {
        self.registry
    }
}

/// Collects templates for a list of categories from a set of preset sources
pub struct BatchGenerator {
    sources: Vec<Box<dyn PresetSource>>,
    fill_ranges: bool,
}

impl Default for BatchGenerator {
    fn default() -> Self {
        Self {
            sources: Vec::new(),
            fill_ranges: true,
        }
    }
}

impl BatchGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a preset source; sources are read in insertion order
    pub fn with_source(mut self, source: impl PresetSource + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    /// Whether to fill each category's remaining ids with generated variations
    pub fn with_fill(mut self, fill_ranges: bool) -> Self {
        self.fill_ranges = fill_ranges;
        self
    }

    /// Run every category in order against a fresh registry.
    ///
    /// Authored presets that fail validation are collected across the whole run
    /// and reported together; range exhaustion stops the run immediately.
    /// A category listed twice is run once.
    pub fn run(&self, categories: &[Category]) -> Result<Catalog, BatchError> {
        let categories: IndexSet<Category> = categories.iter().copied().collect();
        let mut registry = TemplateRegistry::new();
        let mut batches = Vec::with_capacity(categories.len());
        let mut failures = Vec::new();

        for &category in &categories {
            let batch = self.collect_category(&mut registry, category, &mut failures)?;
            tracing::info!(
                category = %category,
                authored = batch.authored,
                generated = batch.generated,
                derived = batch.derived,
                skipped = batch.skipped,
                "collected category"
            );
            batches.push(batch);
        }

        if !failures.is_empty() {
            return Err(BatchError::InvalidPresets(failures));
        }

        Ok(Catalog { registry, batches })
    }

    fn collect_category(
        &self,
        registry: &mut TemplateRegistry,
        category: Category,
        failures: &mut Vec<ValidationError>,
    ) -> Result<CategoryBatch, BatchError> {
        let mut batch = CategoryBatch::new(category);
        let mut authored = Vec::new();

        for source in &self.sources {
            for config in source.configs(category) {
                match registry.create_template(config) {
                    Ok(template) => authored.push(template),
                    Err(RegistryError::Validation(err)) => failures.push(err),
                    Err(err) => return Err(err.into()),
                }
            }
        }
        batch.authored = authored.len();

        if !self.fill_ranges {
            return Ok(batch);
        }

        for config in configs_for(category) {
            if registry.remaining(category) == 0 {
                break;
            }
            let name = config.name.clone();
            match registry.create_template(config) {
                Ok(_) => batch.generated += 1,
                Err(err) => {
                    tracing::warn!(template = %name, error = %err, "skipping generated variation");
                    batch.skipped += 1;
                }
            }
        }

        let specs = ease_variation_specs(&SWAP_EASINGS);
        'bases: for base in authored.iter().filter(|t| t.parameter("ease").is_some()) {
            for spec in &specs {
                if registry.remaining(category) == 0 {
                    break 'bases;
                }
                match registry.create_variation(base, spec) {
                    Ok(_) => batch.derived += 1,
                    Err(err) => {
                        tracing::warn!(
                            base = %base.id,
                            suffix = %spec.suffix,
                            error = %err,
                            "skipping ease variation"
                        );
                        batch.skipped += 1;
                    }
                }
            }
        }

        Ok(batch)
    }
}
