//! Generated TypeScript lookup module
//!
//! The module mirrors [`TemplateIndex`](crate::template::TemplateIndex): a
//! constant id table, an id -> template map and the three lookup functions.

use std::collections::HashSet;

use chrono::{DateTime, SecondsFormat, Utc};

use crate::template::Template;

/// Where the consuming project keeps its `Template` type
pub const TYPES_IMPORT: &str = "../types/template.types";

const LOOKUP_FUNCTIONS: &str = r#"export const getTemplateById = (id: string): Template | undefined => {
  return TEMPLATE_MAP.get(id);
};

export const getTemplatesByCategory = (category: string): Template[] => {
  return Array.from(TEMPLATE_MAP.values()).filter(t => t.category === category);
};

export const searchTemplates = (query: string): Template[] => {
  const lowercaseQuery = query.toLowerCase();
  return Array.from(TEMPLATE_MAP.values()).filter(t =>
    t.name.toLowerCase().includes(lowercaseQuery) ||
    t.description.toLowerCase().includes(lowercaseQuery) ||
    t.keywords.some(k => k.toLowerCase().includes(lowercaseQuery)) ||
    t.examplePrompts.some(p => p.toLowerCase().includes(lowercaseQuery))
  );
};
"#;

/// Turn a template name into an upper-snake identifier
pub fn constant_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_uppercase());
        } else if !out.ends_with('_') {
            out.push('_');
        }
    }
    let trimmed = out.trim_matches('_');
    match trimmed.chars().next() {
        None => "TEMPLATE".to_string(),
        Some(c) if c.is_ascii_digit() => format!("_{}", trimmed),
        Some(_) => trimmed.to_string(),
    }
}

/// Constant names for each template, suffixed `_2`, `_3`, ... on collision
fn constant_names(templates: &[&Template]) -> Vec<String> {
    let mut seen = HashSet::new();
    templates
        .iter()
        .map(|t| {
            let base = constant_name(&t.name);
            let mut candidate = base.clone();
            let mut n = 2;
            while !seen.insert(candidate.clone()) {
                candidate = format!("{}_{}", base, n);
                n += 1;
            }
            candidate
        })
        .collect()
}

/// Render the full module source
pub fn render_module(
    templates: &[&Template],
    generated_at: DateTime<Utc>,
) -> Result<String, serde_json::Error> {
    let mut out = String::new();
    out.push_str("// Auto-generated template constants\n");
    out.push_str(&format!(
        "// Generated on {}\n\n",
        generated_at.to_rfc3339_opts(SecondsFormat::Millis, true)
    ));
    out.push_str(&format!("import {{ Template }} from '{}';\n\n", TYPES_IMPORT));

    let ids: Vec<String> = constant_names(templates)
        .into_iter()
        .zip(templates)
        .map(|(key, t)| format!("  {}: '{}'", key, t.id))
        .collect();
    out.push_str("export const TEMPLATE_IDS = {\n");
    out.push_str(&ids.join(",\n"));
    out.push_str("\n} as const;\n\n");

    let mut entries = Vec::with_capacity(templates.len());
    for template in templates {
        let json = serde_json::to_string_pretty(template)?.replace('\n', "\n  ");
        entries.push(format!("  ['{}', {}]", template.id, json));
    }
    out.push_str("export const TEMPLATE_MAP = new Map<string, Template>([\n");
    out.push_str(&entries.join(",\n"));
    out.push_str("\n]);\n\n");

    out.push_str(LOOKUP_FUNCTIONS);
    Ok(out)
}
