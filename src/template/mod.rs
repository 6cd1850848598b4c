//! Template system for parameterized animation presets
//!
//! This module provides the infrastructure for defining, validating, storing and
//! looking up templates. A template bundles a code skeleton with placeholders, a
//! parameter schema, preview markup and search metadata.
//!
//! # Example
//!
//! ```rust
//! use motion_catalog::template::{Category, TemplateConfig, TemplateRegistry};
//!
//! let mut registry = TemplateRegistry::new();
//! let template = registry
//!     .create_template(TemplateConfig::new(
//!         "Fade In",
//!         Category::Core,
//!         "fade",
//!         "Smoothly fade in an element",
//!         "gsap.from(\"[data-element-id='{{elementId}}']\", { opacity: 0 })",
//!         "<div class=\"preview-container\"></div>",
//!     ))
//!     .unwrap();
//!
//! assert_eq!(template.id.to_string(), "ID-t1");
//! assert!(template.code.contains("${params.elementId}"));
//! ```

mod ids;
mod lookup;
mod metadata;
mod normalize;
mod preprocess;
mod registry;
mod types;
mod validate;
mod variation;

pub use ids::{IdAllocator, IdRange, InvalidTemplateId, RangeExhausted, TemplateId};
pub use lookup::{matches_query, TemplateIndex};
pub use metadata::{default_prompts, extract_keywords};
pub use normalize::{normalize_parameter, normalize_parameters};
pub use preprocess::{interpolation, preprocess_code, referenced_parameters};
pub use registry::{
    build_template, default_thumbnail, RegistryError, TemplateRegistry, DEFAULT_BROWSER_SUPPORT,
    DEFAULT_PERFORMANCE_SCORE, DEFAULT_PREVIEW_CSS,
};
pub use types::{
    Category, CodeVariation, Difficulty, NumericBounds, Parameter, ParameterKind, ParameterSpec,
    ParameterType, Plugin, Preview, PreviewConfig, SelectOption, Template, TemplateConfig,
};
pub use validate::{check, validate, ValidationError, Violation};
pub use variation::{apply_to_code, derive_config, VariationSpec};
