//! Catalog manifest: counts, ids and search vocabulary in one summary

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use crate::template::{Template, TemplateId};

/// Summary of one category in the manifest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummary {
    pub count: usize,
    pub subcategories: Vec<String>,
    pub template_ids: Vec<TemplateId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    pub version: String,
    pub total_templates: usize,
    /// Keyed by category label, in order of first appearance
    pub categories: IndexMap<String, CategorySummary>,
    /// Union of every template's keywords
    pub keywords: Vec<String>,
    /// Every distinct example prompt
    pub prompts: Vec<String>,
}

/// Summarize a template set; every list keeps first-seen order
pub fn build_manifest(version: &str, templates: &[&Template]) -> Manifest {
    let mut categories: IndexMap<String, (usize, IndexSet<String>, Vec<TemplateId>)> =
        IndexMap::new();
    let mut keywords = IndexSet::new();
    let mut prompts = IndexSet::new();

    for template in templates {
        let entry = categories
            .entry(template.category.label().to_string())
            .or_default();
        entry.0 += 1;
        entry.1.insert(template.subcategory.clone());
        entry.2.push(template.id);

        keywords.extend(template.keywords.iter().cloned());
        prompts.extend(template.example_prompts.iter().cloned());
    }

    Manifest {
        version: version.to_string(),
        total_templates: templates.len(),
        categories: categories
            .into_iter()
            .map(|(label, (count, subcategories, template_ids))| {
                (
                    label,
                    CategorySummary {
                        count,
                        subcategories: subcategories.into_iter().collect(),
                        template_ids,
                    },
                )
            })
            .collect(),
        keywords: keywords.into_iter().collect(),
        prompts: prompts.into_iter().collect(),
    }
}

pub fn render_manifest(manifest: &Manifest) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(manifest)
}
