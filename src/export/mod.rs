//! Artifact export for a finished catalog
//!
//! Every artifact is rendered in memory first, then all files are written
//! concurrently. A failed write only fails its own artifact; the rest are
//! still written and the outcome is reported per artifact in [`ExportReport`].

mod json;
mod manifest;
mod module;
mod sql;

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::thread;

use chrono::{DateTime, Utc};
use indexmap::IndexSet;
use thiserror::Error;

use crate::config::GeneratorConfig;
use crate::generator::Catalog;
use crate::template::{Category, Template};

pub use json::{parse_templates, render_templates};
pub use manifest::{build_manifest, render_manifest, CategorySummary, Manifest};
pub use module::{constant_name, render_module, TYPES_IMPORT};
pub use sql::{insert_statement, quote, render_sql};

pub const ALL_TEMPLATES_FILE: &str = "all-templates.json";
pub const MANIFEST_FILE: &str = "template-manifest.json";
pub const SQL_FILE: &str = "templates-insert.sql";

/// One output file of an export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Artifact {
    OutputDir,
    CategoryJson(Category),
    AllTemplates,
    Manifest,
    SqlInserts,
    LookupModule,
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Artifact::OutputDir => write!(f, "output directory"),
            Artifact::CategoryJson(category) => write!(f, "{} templates", category.slug()),
            Artifact::AllTemplates => write!(f, "combined templates"),
            Artifact::Manifest => write!(f, "manifest"),
            Artifact::SqlInserts => write!(f, "SQL inserts"),
            Artifact::LookupModule => write!(f, "lookup module"),
        }
    }
}

/// Underlying cause of an export failure
#[derive(Debug, Error)]
pub enum ExportFailure {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A single artifact that could not be produced
#[derive(Debug, Error)]
#[error("failed to export {artifact} to {path}: {source}")]
pub struct ExportError {
    pub artifact: Artifact,
    pub path: PathBuf,
    #[source]
    pub source: ExportFailure,
}

/// Outcome of an export run
#[derive(Debug, Default)]
pub struct ExportReport {
    pub written: Vec<(Artifact, PathBuf)>,
    pub failures: Vec<ExportError>,
}

impl ExportReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn path_of(&self, artifact: Artifact) -> Option<&Path> {
        self.written
            .iter()
            .find(|(a, _)| *a == artifact)
            .map(|(_, p)| p.as_path())
    }
}

/// Where and how to write artifacts
#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub output_dir: PathBuf,
    pub manifest_version: String,
    pub module_file_name: String,
    /// Timestamp written into the lookup module header
    pub generated_at: DateTime<Utc>,
}

impl ExportOptions {
    pub fn new(output_dir: impl Into<PathBuf>, generated_at: DateTime<Utc>) -> Self {
        let defaults = GeneratorConfig::default();
        Self {
            output_dir: output_dir.into(),
            manifest_version: defaults.manifest_version,
            module_file_name: defaults.module_file_name,
            generated_at,
        }
    }

    pub fn from_config(config: &GeneratorConfig, generated_at: DateTime<Utc>) -> Self {
        Self {
            output_dir: config.output_dir.clone(),
            manifest_version: config.manifest_version.clone(),
            module_file_name: config.module_file_name.clone(),
            generated_at,
        }
    }

    /// File name of an artifact inside the output directory
    pub fn file_name(&self, artifact: Artifact) -> String {
        match artifact {
            Artifact::OutputDir => String::new(),
            Artifact::CategoryJson(category) => format!("{}-templates.json", category.slug()),
            Artifact::AllTemplates => ALL_TEMPLATES_FILE.to_string(),
            Artifact::Manifest => MANIFEST_FILE.to_string(),
            Artifact::SqlInserts => SQL_FILE.to_string(),
            Artifact::LookupModule => self.module_file_name.clone(),
        }
    }
}

/// Rendered artifact waiting to be written
struct Pending {
    artifact: Artifact,
    path: PathBuf,
    content: Result<String, serde_json::Error>,
}

/// Render every artifact of a template set
fn render_all(
    categories: &[Category],
    templates: &[&Template],
    options: &ExportOptions,
) -> Vec<Pending> {
    let pending = |artifact: Artifact, content: Result<String, serde_json::Error>| Pending {
        artifact,
        path: options.output_dir.join(options.file_name(artifact)),
        content,
    };

    // one file per category, however often it is listed
    let categories: IndexSet<Category> = categories.iter().copied().collect();
    let mut out = Vec::with_capacity(categories.len() + 4);
    for &category in &categories {
        let in_category: Vec<&Template> = templates
            .iter()
            .copied()
            .filter(|t| t.category == category)
            .collect();
        out.push(pending(
            Artifact::CategoryJson(category),
            render_templates(&in_category),
        ));
    }
    out.push(pending(Artifact::AllTemplates, render_templates(templates)));
    out.push(pending(
        Artifact::Manifest,
        render_manifest(&build_manifest(&options.manifest_version, templates)),
    ));
    out.push(pending(Artifact::SqlInserts, render_sql(templates)));
    out.push(pending(
        Artifact::LookupModule,
        render_module(templates, options.generated_at),
    ));
    out
}

fn write_one(pending: Pending) -> Result<(Artifact, PathBuf), ExportError> {
    let Pending {
        artifact,
        path,
        content,
    } = pending;
    let result = content
        .map_err(ExportFailure::from)
        .and_then(|content| fs::write(&path, content).map_err(ExportFailure::from));
    match result {
        Ok(()) => Ok((artifact, path)),
        Err(source) => Err(ExportError {
            artifact,
            path,
            source,
        }),
    }
}

/// Write all artifacts for `templates`, one JSON file per entry of `categories`
pub fn export_templates(
    categories: &[Category],
    templates: &[&Template],
    options: &ExportOptions,
) -> ExportReport {
    let mut report = ExportReport::default();

    if let Err(err) = fs::create_dir_all(&options.output_dir) {
        tracing::error!(
            path = %options.output_dir.display(),
            error = %err,
            "cannot create output directory"
        );
        report.failures.push(ExportError {
            artifact: Artifact::OutputDir,
            path: options.output_dir.clone(),
            source: err.into(),
        });
        return report;
    }

    let pending = render_all(categories, templates, options);
    let results: Vec<_> = thread::scope(|scope| {
        let handles: Vec<_> = pending
            .into_iter()
            .map(|p| scope.spawn(move || write_one(p)))
            .collect();
        handles.into_iter().map(|h| h.join()).collect()
    });

    for result in results {
        match result {
            Ok(Ok((artifact, path))) => {
                tracing::info!(artifact = %artifact, path = %path.display(), "wrote artifact");
                report.written.push((artifact, path));
            }
            Ok(Err(err)) => {
                tracing::error!(error = %err, "artifact export failed");
                report.failures.push(err);
            }
            Err(panic) => std::panic::resume_unwind(panic),
        }
    }

    report
}

/// Write every artifact for a catalog
pub fn export_catalog(catalog: &Catalog, options: &ExportOptions) -> ExportReport {
    let categories: Vec<Category> = catalog.categories().collect();
    export_templates(&categories, &catalog.templates(), options)
}
