//! Schema types for templates, their authoring configuration, and parameters

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::ids::TemplateId;

/// Top-level template grouping. Each category owns a fixed id range.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Category {
    #[default]
    #[serde(rename = "Core Animations")]
    Core,
    #[serde(rename = "ScrollTrigger")]
    ScrollTrigger,
    #[serde(rename = "SVG Animations")]
    Svg,
    #[serde(rename = "Physics & Interaction")]
    Physics,
    #[serde(rename = "Text Effects")]
    Text,
    #[serde(rename = "Advanced Effects")]
    Advanced,
}

impl Category {
    /// All categories in id-range order
    pub const ALL: [Category; 6] = [
        Category::Core,
        Category::ScrollTrigger,
        Category::Svg,
        Category::Physics,
        Category::Text,
        Category::Advanced,
    ];

    /// Human-readable label, also used as the serialized form
    pub fn label(&self) -> &'static str {
        match self {
            Category::Core => "Core Animations",
            Category::ScrollTrigger => "ScrollTrigger",
            Category::Svg => "SVG Animations",
            Category::Physics => "Physics & Interaction",
            Category::Text => "Text Effects",
            Category::Advanced => "Advanced Effects",
        }
    }

    /// Short name used for per-category output files
    pub fn slug(&self) -> &'static str {
        match self {
            Category::Core => "core",
            Category::ScrollTrigger => "scrolltrigger",
            Category::Svg => "svg",
            Category::Physics => "physics",
            Category::Text => "text",
            Category::Advanced => "advanced",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = String;

    /// Accepts either the slug (`core`) or the label (`Core Animations`), case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.slug() == wanted || c.label().to_lowercase() == wanted)
            .ok_or_else(|| {
                let known: Vec<&str> = Category::ALL.iter().map(|c| c.slug()).collect();
                format!("unknown category '{}' (expected one of: {})", s, known.join(", "))
            })
    }
}

/// Ordered difficulty levels
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Beginner => write!(f, "beginner"),
            Difficulty::Intermediate => write!(f, "intermediate"),
            Difficulty::Advanced => write!(f, "advanced"),
        }
    }
}

/// Runtime plugins a template may require from the consuming page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Plugin {
    ScrollTrigger,
    TextPlugin,
    #[serde(rename = "MorphSVGPlugin")]
    MorphSvg,
    #[serde(rename = "DrawSVGPlugin")]
    DrawSvg,
    MotionPathPlugin,
    ScrollToPlugin,
    Flip,
    Observer,
    ScrollSmoother,
    SplitText,
    InertiaPlugin,
    #[serde(rename = "Physics2DPlugin")]
    Physics2D,
    PixiPlugin,
    EaselPlugin,
    #[serde(rename = "CSSRulePlugin")]
    CssRule,
    CustomEase,
    RoughEase,
    SlowMo,
    CustomWiggle,
    CustomBounce,
}

/// Kind tag of a parameter as authors write it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterType {
    Number,
    String,
    Boolean,
    Select,
    Color,
    Range,
}

impl ParameterType {
    /// Whether this type carries numeric bounds
    pub fn is_numeric(&self) -> bool {
        matches!(self, ParameterType::Number | ParameterType::Range)
    }
}

/// One entry of a select parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    pub label: String,
    pub value: Value,
}

impl SelectOption {
    pub fn new(label: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Numeric bounds carried by `number` and `range` parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumericBounds {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl NumericBounds {
    pub fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.step.is_finite()
    }
}

/// Type-specific part of a normalized parameter.
///
/// The variant fixes which extra fields exist: bounds for numeric kinds,
/// options for selects, nothing for the rest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ParameterKind {
    Number(NumericBounds),
    Range(NumericBounds),
    String,
    Boolean,
    Select { options: Vec<SelectOption> },
    Color,
}

impl ParameterKind {
    pub fn parameter_type(&self) -> ParameterType {
        match self {
            ParameterKind::Number(_) => ParameterType::Number,
            ParameterKind::Range(_) => ParameterType::Range,
            ParameterKind::String => ParameterType::String,
            ParameterKind::Boolean => ParameterType::Boolean,
            ParameterKind::Select { .. } => ParameterType::Select,
            ParameterKind::Color => ParameterType::Color,
        }
    }

    pub fn bounds(&self) -> Option<&NumericBounds> {
        match self {
            ParameterKind::Number(b) | ParameterKind::Range(b) => Some(b),
            _ => None,
        }
    }
}

/// A fully specified parameter as stored on a registered template.
///
/// `default` distinguishes "absent" (`None`) from an explicit JSON `null`
/// (`Some(Value::Null)`); only the former is invalid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    pub name: String,
    #[serde(flatten)]
    pub kind: ParameterKind,
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub default: Option<Value>,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub affects_performance: Option<bool>,
}

/// A parameter as authored: bounds, options and description may be missing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterSpec {
    pub name: String,
    #[serde(rename = "type")]
    pub param_type: ParameterType,
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub default: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<SelectOption>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub affects_performance: Option<bool>,
}

impl ParameterSpec {
    pub fn new(name: impl Into<String>, param_type: ParameterType) -> Self {
        Self {
            name: name.into(),
            param_type,
            default: None,
            min: None,
            max: None,
            step: None,
            options: None,
            description: None,
            affects_performance: None,
        }
    }

    pub fn number(name: impl Into<String>, default: f64) -> Self {
        Self::new(name, ParameterType::Number).with_default(default)
    }

    pub fn range(name: impl Into<String>, default: f64, min: f64, max: f64, step: f64) -> Self {
        Self::new(name, ParameterType::Range)
            .with_default(default)
            .with_bounds(min, max)
            .with_step(step)
    }

    pub fn text(name: impl Into<String>, default: impl Into<String>) -> Self {
        Self::new(name, ParameterType::String).with_default(default.into())
    }

    pub fn boolean(name: impl Into<String>, default: bool) -> Self {
        Self::new(name, ParameterType::Boolean).with_default(default)
    }

    pub fn color(name: impl Into<String>, default: impl Into<String>) -> Self {
        Self::new(name, ParameterType::Color).with_default(default.into())
    }

    pub fn select(name: impl Into<String>, default: impl Into<Value>, options: Vec<SelectOption>) -> Self {
        let mut spec = Self::new(name, ParameterType::Select).with_default(default);
        spec.options = Some(options);
        spec
    }

    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn with_bounds(mut self, min: f64, max: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    pub fn with_step(mut self, step: f64) -> Self {
        self.step = Some(step);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl From<&Parameter> for ParameterSpec {
    fn from(param: &Parameter) -> Self {
        let mut spec = ParameterSpec::new(param.name.clone(), param.kind.parameter_type());
        spec.default = param.default.clone();
        spec.description = Some(param.description.clone());
        spec.affects_performance = param.affects_performance;
        match &param.kind {
            ParameterKind::Number(b) | ParameterKind::Range(b) => {
                spec.min = Some(b.min);
                spec.max = Some(b.max);
                spec.step = Some(b.step);
            }
            ParameterKind::Select { options } => spec.options = Some(options.clone()),
            _ => {}
        }
        spec
    }
}

/// Preview markup attached to a registered template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preview {
    pub html: String,
    pub css: String,
    pub thumbnail: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_preview_url: Option<String>,
}

/// Preview markup as authored; css and thumbnail are generated when missing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewConfig {
    pub html: String,
    #[serde(default)]
    pub css: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub live_preview_url: Option<String>,
}

impl PreviewConfig {
    pub fn html(html: impl Into<String>) -> Self {
        Self {
            html: html.into(),
            ..Default::default()
        }
    }
}

/// Alternative code body shipped alongside the main skeleton
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeVariation {
    pub name: String,
    pub code: String,
    pub description: String,
}

/// A registered, validated animation preset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: TemplateId,
    pub name: String,
    pub category: Category,
    pub subcategory: String,
    pub description: String,
    pub tags: Vec<String>,
    pub difficulty: Difficulty,

    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_variations: Option<Vec<CodeVariation>>,
    pub required_plugins: Vec<Plugin>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<Vec<String>>,

    pub preview: Preview,
    pub parameters: Vec<Parameter>,

    pub example_prompts: Vec<String>,
    pub keywords: Vec<String>,
    pub related_templates: Vec<String>,

    pub performance_score: u8,
    pub mobile_optimized: bool,
    pub browser_support: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub popularity_score: Option<u8>,
    pub common_use_cases: Vec<String>,
}

impl Template {
    /// Look up a parameter by name
    pub fn parameter(&self, name: &str) -> Option<&Parameter> {
        self.parameters.iter().find(|p| p.name == name)
    }
}

/// Authoring input for [`TemplateRegistry::create_template`](super::TemplateRegistry::create_template)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateConfig {
    pub name: String,
    pub category: Category,
    pub subcategory: String,
    pub description: String,
    pub code: String,
    pub preview: PreviewConfig,
    #[serde(default)]
    pub parameters: Option<Vec<ParameterSpec>>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
    #[serde(default)]
    pub code_variations: Option<Vec<CodeVariation>>,
    #[serde(default)]
    pub required_plugins: Option<Vec<Plugin>>,
    #[serde(default)]
    pub dependencies: Option<Vec<String>>,
    #[serde(default)]
    pub example_prompts: Option<Vec<String>>,
    #[serde(default)]
    pub keywords: Option<Vec<String>>,
    #[serde(default)]
    pub related_templates: Option<Vec<String>>,
    #[serde(default)]
    pub performance_score: Option<u8>,
    #[serde(default)]
    pub mobile_optimized: Option<bool>,
    #[serde(default)]
    pub browser_support: Option<Vec<String>>,
    #[serde(default)]
    pub popularity_score: Option<u8>,
    #[serde(default)]
    pub common_use_cases: Option<Vec<String>>,
}

impl TemplateConfig {
    /// Start a configuration with the fields every template needs
    pub fn new(
        name: impl Into<String>,
        category: Category,
        subcategory: impl Into<String>,
        description: impl Into<String>,
        code: impl Into<String>,
        preview_html: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            subcategory: subcategory.into(),
            description: description.into(),
            code: code.into(),
            preview: PreviewConfig::html(preview_html),
            ..Default::default()
        }
    }

    pub fn with_parameters(mut self, parameters: Vec<ParameterSpec>) -> Self {
        self.parameters = Some(parameters);
        self
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    pub fn with_plugins(mut self, plugins: Vec<Plugin>) -> Self {
        self.required_plugins = Some(plugins);
        self
    }

    pub fn with_prompts<S: Into<String>>(mut self, prompts: impl IntoIterator<Item = S>) -> Self {
        self.example_prompts = Some(prompts.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_tags<S: Into<String>>(mut self, tags: impl IntoIterator<Item = S>) -> Self {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_use_cases<S: Into<String>>(mut self, cases: impl IntoIterator<Item = S>) -> Self {
        self.common_use_cases = Some(cases.into_iter().map(Into::into).collect());
        self
    }
}

/// Keeps a present `null` distinct from a missing field
fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_category_round_trips_through_label() {
        for category in Category::ALL {
            let encoded = serde_json::to_string(&category).unwrap();
            assert_eq!(encoded, format!("\"{}\"", category.label()));
            let decoded: Category = serde_json::from_str(&encoded).unwrap();
            assert_eq!(decoded, category);
        }
    }

    #[test]
    fn test_category_from_str_accepts_slug_and_label() {
        assert_eq!("core".parse::<Category>(), Ok(Category::Core));
        assert_eq!("ScrollTrigger".parse::<Category>(), Ok(Category::ScrollTrigger));
        assert_eq!(
            "physics & interaction".parse::<Category>(),
            Ok(Category::Physics)
        );
        assert!("nope".parse::<Category>().is_err());
    }

    #[test]
    fn test_difficulty_is_ordered() {
        assert!(Difficulty::Beginner < Difficulty::Intermediate);
        assert!(Difficulty::Intermediate < Difficulty::Advanced);
    }

    #[test]
    fn test_plugin_serializes_runtime_name() {
        assert_eq!(
            serde_json::to_value(Plugin::DrawSvg).unwrap(),
            json!("DrawSVGPlugin")
        );
        assert_eq!(
            serde_json::to_value(Plugin::ScrollTrigger).unwrap(),
            json!("ScrollTrigger")
        );
    }

    #[test]
    fn test_parameter_serializes_flat() {
        let param = Parameter {
            name: "duration".to_string(),
            kind: ParameterKind::Range(NumericBounds {
                min: 0.0,
                max: 100.0,
                step: 1.0,
            }),
            default: Some(json!(1)),
            description: String::new(),
            affects_performance: None,
        };
        let value = serde_json::to_value(&param).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "duration",
                "type": "range",
                "min": 0.0,
                "max": 100.0,
                "step": 1.0,
                "default": 1,
                "description": ""
            })
        );
        let back: Parameter = serde_json::from_value(value).unwrap();
        assert_eq!(back, param);
    }

    #[test]
    fn test_null_default_is_kept_distinct_from_missing() {
        let with_null: ParameterSpec =
            serde_json::from_value(json!({"name": "cb", "type": "string", "default": null}))
                .unwrap();
        assert_eq!(with_null.default, Some(Value::Null));

        let missing: ParameterSpec =
            serde_json::from_value(json!({"name": "cb", "type": "string"})).unwrap();
        assert_eq!(missing.default, None);
    }

    #[test]
    fn test_spec_from_parameter_keeps_type_specific_fields() {
        let param = Parameter {
            name: "ease".to_string(),
            kind: ParameterKind::Select {
                options: vec![SelectOption::new("Power2 Out", "power2.out")],
            },
            default: Some(json!("power2.out")),
            description: "Easing".to_string(),
            affects_performance: None,
        };
        let spec = ParameterSpec::from(&param);
        assert_eq!(spec.param_type, ParameterType::Select);
        assert_eq!(spec.options.as_ref().map(Vec::len), Some(1));
        assert_eq!(spec.min, None);
    }
}
