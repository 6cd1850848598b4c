//! Deriving new template configurations from a registered base template

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::preprocess::interpolation;
use super::registry::default_thumbnail;
use super::types::{ParameterSpec, PreviewConfig, Template, TemplateConfig};

/// How to derive one variation from a base template
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariationSpec {
    /// Appended to the base name
    pub suffix: String,
    /// Replaces the composed `"<base description> - <suffix>"`
    #[serde(default)]
    pub description: Option<String>,
    /// Parameter name -> literal value substituted for `${params.<name>}`
    #[serde(default)]
    pub code_modifications: BTreeMap<String, String>,
    /// Code block appended after a blank line
    #[serde(default)]
    pub additional_code: Option<String>,
    #[serde(default)]
    pub additional_params: Vec<ParameterSpec>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub prompts: Vec<String>,
}

impl VariationSpec {
    pub fn new(suffix: impl Into<String>) -> Self {
        Self {
            suffix: suffix.into(),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Bake a literal value in place of a parameter placeholder
    pub fn with_code_modification(
        mut self,
        param: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.code_modifications.insert(param.into(), value.into());
        self
    }

    pub fn with_additional_code(mut self, code: impl Into<String>) -> Self {
        self.additional_code = Some(code.into());
        self
    }

    pub fn with_param(mut self, param: ParameterSpec) -> Self {
        self.additional_params.push(param);
        self
    }

    pub fn with_tags<S: Into<String>>(mut self, tags: impl IntoIterator<Item = S>) -> Self {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    pub fn with_prompts<S: Into<String>>(mut self, prompts: impl IntoIterator<Item = S>) -> Self {
        self.prompts.extend(prompts.into_iter().map(Into::into));
        self
    }
}

/// Substitute placeholder literals and append any extra code
pub fn apply_to_code(base_code: &str, spec: &VariationSpec) -> String {
    let mut code = base_code.to_string();

    for (param, value) in &spec.code_modifications {
        code = code.replace(&interpolation(param), value);
    }

    if let Some(extra) = &spec.additional_code {
        code = format!("{}\n\n{}", code, extra);
    }

    code
}

/// Build the configuration for one variation without touching `base`
pub fn derive_config(base: &Template, spec: &VariationSpec) -> TemplateConfig {
    let name = format!("{} {}", base.name, spec.suffix);
    let description = spec
        .description
        .clone()
        .unwrap_or_else(|| format!("{} - {}", base.description, spec.suffix));

    let parameters = base
        .parameters
        .iter()
        .map(ParameterSpec::from)
        .chain(spec.additional_params.iter().cloned())
        .collect();

    // A generated thumbnail points at the base id; let the variation get its own.
    let thumbnail = if base.preview.thumbnail == default_thumbnail(base.id) {
        None
    } else {
        Some(base.preview.thumbnail.clone())
    };

    let mut keywords = base.keywords.clone();
    let suffix_keyword = spec.suffix.to_lowercase();
    if !suffix_keyword.is_empty() && !keywords.contains(&suffix_keyword) {
        keywords.push(suffix_keyword);
    }

    let mut related = base.related_templates.clone();
    related.push(base.id.to_string());

    TemplateConfig {
        name,
        category: base.category,
        subcategory: base.subcategory.clone(),
        description,
        code: apply_to_code(&base.code, spec),
        preview: PreviewConfig {
            html: base.preview.html.clone(),
            css: Some(base.preview.css.clone()),
            thumbnail,
            live_preview_url: base.preview.live_preview_url.clone(),
        },
        parameters: Some(parameters),
        tags: Some(concat(&base.tags, &spec.tags)),
        difficulty: Some(base.difficulty),
        code_variations: base.code_variations.clone(),
        required_plugins: Some(base.required_plugins.clone()),
        dependencies: base.dependencies.clone(),
        example_prompts: Some(concat(&base.example_prompts, &spec.prompts)),
        keywords: Some(keywords),
        related_templates: Some(related),
        performance_score: Some(base.performance_score),
        mobile_optimized: Some(base.mobile_optimized),
        browser_support: Some(base.browser_support.clone()),
        popularity_score: base.popularity_score,
        common_use_cases: Some(base.common_use_cases.clone()),
    }
}

fn concat(a: &[String], b: &[String]) -> Vec<String> {
    a.iter().chain(b).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_modifications_replace_every_occurrence() {
        let spec = VariationSpec::new("Bounce").with_code_modification("ease", "bounce.out");
        let code = apply_to_code("a: \"${params.ease}\", b: \"${params.ease}\"", &spec);
        assert_eq!(code, "a: \"bounce.out\", b: \"bounce.out\"");
    }

    #[test]
    fn test_other_placeholders_survive() {
        let spec = VariationSpec::new("Fast").with_code_modification("duration", "0.2");
        let code = apply_to_code("d: ${params.duration}, e: ${params.ease}", &spec);
        assert_eq!(code, "d: 0.2, e: ${params.ease}");
    }

    #[test]
    fn test_additional_code_is_appended_after_blank_line() {
        let spec = VariationSpec::new("Loop").with_additional_code("tl.repeat(-1);");
        assert_eq!(apply_to_code("tl.play();", &spec), "tl.play();\n\ntl.repeat(-1);");
    }
}
