//! Template registry: the only way templates are constructed and stored

use indexmap::IndexMap;
use thiserror::Error;

use super::ids::{IdAllocator, RangeExhausted, TemplateId};
use super::metadata::{default_prompts, extract_keywords};
use super::normalize::normalize_parameters;
use super::preprocess::preprocess_code;
use super::types::{Category, ParameterKind, Preview, Template, TemplateConfig};
use super::validate::{validate, ValidationError};
use super::variation::{derive_config, VariationSpec};

/// Errors that can occur during registry operations
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The category's id range is used up
    #[error(transparent)]
    RangeExhausted(#[from] RangeExhausted),

    /// The assembled template broke one or more structural rules
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No template registered under this id
    #[error("template not found: {id}")]
    NotFound { id: String },
}

impl RegistryError {
    /// The collected violations, when this is a validation failure
    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            RegistryError::Validation(err) => Some(err),
            _ => None,
        }
    }
}

pub const DEFAULT_PERFORMANCE_SCORE: u8 = 85;

pub const DEFAULT_BROWSER_SUPPORT: [&str; 4] = ["chrome", "firefox", "safari", "edge"];

/// Stylesheet used for previews that do not ship their own
pub const DEFAULT_PREVIEW_CSS: &str = r#".preview-container {
  display: flex;
  justify-content: center;
  align-items: center;
  min-height: 300px;
  background: #f5f5f5;
  border-radius: 8px;
  overflow: hidden;
}

.preview-element {
  padding: 2rem;
  background: white;
  border-radius: 8px;
  box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
  text-align: center;
}"#;

/// Thumbnail path generated for templates without one
pub fn default_thumbnail(id: TemplateId) -> String {
    format!("/thumbnails/{}.png", id.to_string().to_lowercase())
}

/// Assemble a candidate template from its configuration.
///
/// Pure and total: applies field defaults, preprocesses code, normalizes
/// parameters and synthesizes missing search metadata. The result still has
/// to pass validation before it may be stored.
pub fn build_template(id: TemplateId, config: TemplateConfig) -> Template {
    let example_prompts = config
        .example_prompts
        .unwrap_or_else(|| default_prompts(&config.name));
    let keywords = config.keywords.unwrap_or_else(|| {
        extract_keywords(
            &config.name,
            &config.description,
            config.category,
            &config.subcategory,
        )
    });

    Template {
        id,
        code: preprocess_code(&config.code),
        parameters: normalize_parameters(&config.parameters.unwrap_or_default()),
        preview: Preview {
            html: config.preview.html,
            css: config
                .preview
                .css
                .unwrap_or_else(|| DEFAULT_PREVIEW_CSS.to_string()),
            thumbnail: config
                .preview
                .thumbnail
                .unwrap_or_else(|| default_thumbnail(id)),
            live_preview_url: config.preview.live_preview_url,
        },
        name: config.name,
        category: config.category,
        subcategory: config.subcategory,
        description: config.description,
        tags: config.tags.unwrap_or_default(),
        difficulty: config.difficulty.unwrap_or_default(),
        code_variations: config.code_variations,
        required_plugins: config.required_plugins.unwrap_or_default(),
        dependencies: config.dependencies,
        example_prompts,
        keywords,
        related_templates: config.related_templates.unwrap_or_default(),
        performance_score: config
            .performance_score
            .unwrap_or(DEFAULT_PERFORMANCE_SCORE),
        mobile_optimized: config.mobile_optimized.unwrap_or(true),
        browser_support: config.browser_support.unwrap_or_else(|| {
            DEFAULT_BROWSER_SUPPORT
                .iter()
                .map(|b| b.to_string())
                .collect()
        }),
        popularity_score: config.popularity_score,
        common_use_cases: config.common_use_cases.unwrap_or_default(),
    }
}

/// Registry owning every template of one generation run plus the id counters.
///
/// Mutation goes through `&mut self`, so id allocation and insertion happen
/// together; share a registry across threads only behind a lock.
#[derive(Debug, Default)]
pub struct TemplateRegistry {
    templates: IndexMap<TemplateId, Template>,
    ids: IdAllocator,
}

impl TemplateRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Build, validate and store a template.
    ///
    /// The id is only consumed once validation succeeds, so a rejected
    /// configuration leaves the registry untouched.
    pub fn create_template(&mut self, config: TemplateConfig) -> Result<Template, RegistryError> {
        let category = config.category;
        let id = self.ids.peek(category)?;
        let template = build_template(id, config);

        validate(&template)?;

        for param in &template.parameters {
            if matches!(&param.kind, ParameterKind::Select { options } if options.is_empty()) {
                tracing::warn!(
                    template = %template.name,
                    parameter = %param.name,
                    "select parameter has no options"
                );
            }
        }

        let committed = self.ids.allocate(category)?;
        debug_assert_eq!(committed, id);
        tracing::debug!(id = %id, name = %template.name, category = %category, "registered template");

        self.templates.insert(id, template.clone());
        Ok(template)
    }

    /// Derive and register one variation of `base`
    pub fn create_variation(
        &mut self,
        base: &Template,
        spec: &VariationSpec,
    ) -> Result<Template, RegistryError> {
        self.create_template(derive_config(base, spec))
    }

    /// Derive and register a variation of `base` per spec, in order.
    ///
    /// Stops at the first failure; variations registered before it stay registered.
    pub fn create_variations(
        &mut self,
        base: &Template,
        specs: &[VariationSpec],
    ) -> Result<Vec<Template>, RegistryError> {
        specs
            .iter()
            .map(|spec| self.create_variation(base, spec))
            .collect()
    }

    /// Like [`create_variations`](Self::create_variations), looking the base up by id
    pub fn create_variations_of(
        &mut self,
        base_id: TemplateId,
        specs: &[VariationSpec],
    ) -> Result<Vec<Template>, RegistryError> {
        let base = self
            .get(base_id)
            .cloned()
            .ok_or_else(|| RegistryError::NotFound {
                id: base_id.to_string(),
            })?;
        self.create_variations(&base, specs)
    }

    /// Get a template by id
    pub fn get(&self, id: TemplateId) -> Option<&Template> {
        self.templates.get(&id)
    }

    /// Get a template by its `ID-t<N>` string form
    pub fn find(&self, id: &str) -> Option<&Template> {
        id.parse().ok().and_then(|id| self.get(id))
    }

    /// Check if a template exists
    pub fn contains(&self, id: TemplateId) -> bool {
        self.templates.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// All templates in registration order
    pub fn all_templates(&self) -> impl Iterator<Item = &Template> {
        self.templates.values()
    }

    /// Templates of one category in registration order
    pub fn templates_by_category(&self, category: Category) -> Vec<&Template> {
        self.templates
            .values()
            .filter(|t| t.category == category)
            .collect()
    }

    /// Ids still free in a category
    pub fn remaining(&self, category: Category) -> u32 {
        self.ids.remaining(category)
    }

    /// Serialize every stored template as a pretty JSON array
    pub fn export_templates(&self) -> Result<String, serde_json::Error> {
        let templates: Vec<&Template> = self.all_templates().collect();
        serde_json::to_string_pretty(&templates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::types::{ParameterSpec, ParameterType, PreviewConfig};
    use crate::template::validate::Violation;

    fn config(name: &str, category: Category) -> TemplateConfig {
        TemplateConfig::new(
            name,
            category,
            "fade",
            "Fade an element into view",
            "gsap.from(\"{{elementId}}\", { opacity: 0 })",
            "<div class=\"preview-container\"></div>",
        )
    }

    #[test]
    fn test_registry_create_and_get() {
        let mut registry = TemplateRegistry::new();
        let template = registry
            .create_template(config("Fade In", Category::Core))
            .expect("Should register");

        assert_eq!(template.id.to_string(), "ID-t1");
        assert!(registry.contains(template.id));
        assert_eq!(registry.find("ID-t1"), Some(&template));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_field_defaults_are_applied() {
        let mut registry = TemplateRegistry::new();
        let template = registry
            .create_template(config("Fade In", Category::Core))
            .unwrap();

        assert_eq!(template.code, "gsap.from(\"${params.elementId}\", { opacity: 0 })");
        assert_eq!(template.difficulty, crate::template::types::Difficulty::Beginner);
        assert_eq!(template.performance_score, 85);
        assert!(template.mobile_optimized);
        assert_eq!(template.browser_support, DEFAULT_BROWSER_SUPPORT);
        assert_eq!(template.preview.css, DEFAULT_PREVIEW_CSS);
        assert_eq!(template.preview.thumbnail, "/thumbnails/id-t1.png");
        assert!(template.tags.is_empty());
        assert!(template.required_plugins.is_empty());
        assert!(template.example_prompts.len() >= 3);
        assert!(template.keywords.contains(&"core animations".to_string()));
    }

    #[test]
    fn test_explicit_values_win_over_defaults() {
        let mut registry = TemplateRegistry::new();
        let mut cfg = config("Fade In", Category::Core).with_prompts(["x", "y", "z"]);
        cfg.mobile_optimized = Some(false);
        cfg.performance_score = Some(70);
        cfg.keywords = Some(vec!["custom".to_string()]);
        cfg.preview = PreviewConfig {
            html: "<p></p>".to_string(),
            css: Some(".x{}".to_string()),
            thumbnail: Some("/t.png".to_string()),
            live_preview_url: None,
        };

        let template = registry.create_template(cfg).unwrap();
        assert!(!template.mobile_optimized);
        assert_eq!(template.performance_score, 70);
        assert_eq!(template.example_prompts, vec!["x", "y", "z"]);
        assert_eq!(template.keywords, vec!["custom"]);
        assert_eq!(template.preview.css, ".x{}");
        assert_eq!(template.preview.thumbnail, "/t.png");
    }

    #[test]
    fn test_invalid_template_is_not_stored_and_keeps_id() {
        let mut registry = TemplateRegistry::new();
        let mut bad = config("Fx", Category::Core).with_prompts(["only one"]);
        bad.parameters = Some(vec![ParameterSpec::new("duration", ParameterType::Range)]);

        let err = registry.create_template(bad).unwrap_err();
        let validation = err.validation().expect("validation error");
        assert_eq!(validation.violations.len(), 3);
        assert!(matches!(
            validation.violations[1],
            Violation::ParameterMissingDefault { .. }
        ));
        assert!(registry.is_empty());

        let next = registry
            .create_template(config("Fade In", Category::Core))
            .unwrap();
        assert_eq!(next.id.to_string(), "ID-t1");
    }

    #[test]
    fn test_templates_by_category() {
        let mut registry = TemplateRegistry::new();
        registry.create_template(config("Fade In", Category::Core)).unwrap();
        registry
            .create_template(config("Scroll Fade", Category::ScrollTrigger))
            .unwrap();
        registry.create_template(config("Fade Out", Category::Core)).unwrap();

        let core: Vec<&str> = registry
            .templates_by_category(Category::Core)
            .iter()
            .map(|t| t.name.as_str())
            .collect();
        assert_eq!(core, vec!["Fade In", "Fade Out"]);
        assert!(registry.templates_by_category(Category::Svg).is_empty());
    }

    #[test]
    fn test_variations_of_unknown_base() {
        let mut registry = TemplateRegistry::new();
        let result = registry.create_variations_of(TemplateId::new(7), &[VariationSpec::new("X")]);
        assert!(matches!(result, Err(RegistryError::NotFound { .. })));
    }

    #[test]
    fn test_variation_gets_fresh_thumbnail_and_related_base() {
        let mut registry = TemplateRegistry::new();
        let base = registry.create_template(config("Fade In", Category::Core)).unwrap();
        let derived = registry
            .create_variation(&base, &VariationSpec::new("Slow"))
            .unwrap();

        assert_eq!(derived.name, "Fade In Slow");
        assert_eq!(derived.description, "Fade an element into view - Slow");
        assert_eq!(derived.preview.thumbnail, default_thumbnail(derived.id));
        assert_eq!(derived.related_templates, vec![base.id.to_string()]);
    }

    #[test]
    fn test_export_templates_is_json_array() {
        let mut registry = TemplateRegistry::new();
        registry.create_template(config("Fade In", Category::Core)).unwrap();
        let json = registry.export_templates().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(1));
        assert_eq!(value[0]["id"], "ID-t1");
        assert_eq!(value[0]["category"], "Core Animations");
    }
}
