//! Integration tests for author-written preset files

use std::fs;

use motion_catalog::presets::{load_preset_file, PresetDirectory, PresetSource};
use motion_catalog::template::{Category, ParameterKind, TemplateRegistry, Violation};
use motion_catalog::{generate, BatchError, GenerateError, GeneratorConfig};

const GLOW: &str = r##"
[[template]]
name = "Neon Glow"
category = "advanced"
subcategory = "glow"
description = "Pulsing neon glow around an element"
code = "gsap.to('{{elementId}}', { boxShadow: '0 0 {{blur}}px {{color}}', repeat: -1, yoyo: true })"
examplePrompts = ["neon glow", "glowing outline", "pulsing light"]

[template.preview]
html = "<div class=\"preview-container\"></div>"

[[template.parameters]]
name = "color"
type = "color"
default = "#ff00aa"

[[template.parameters]]
name = "blur"
type = "number"
default = 20
max = 60
"##;

const BROKEN_JSON: &str = r#"[
  {
    "name": "Zz",
    "category": "Text Effects",
    "subcategory": "broken",
    "description": "Not enough of anything",
    "code": "x()",
    "preview": { "html": "" }
  }
]"#;

#[test]
fn test_toml_preset_category_accepts_label_only() {
    // Category labels are the serialized form; slugs are for config and CLI.
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("glow.toml");
    fs::write(&path, GLOW).unwrap();
    assert!(load_preset_file(&path).is_err());

    fs::write(&path, GLOW.replace("\"advanced\"", "\"Advanced Effects\"")).unwrap();
    let configs = load_preset_file(&path).unwrap();
    assert_eq!(configs.len(), 1);
    assert_eq!(configs[0].category, Category::Advanced);
}

#[test]
fn test_preset_directory_feeds_the_batch() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("glow.toml"),
        GLOW.replace("\"advanced\"", "\"Advanced Effects\""),
    )
    .unwrap();

    let config = GeneratorConfig::default()
        .with_builtin_presets(false)
        .with_fill_ranges(false)
        .with_preset_dir(dir.path());
    let catalog = generate(&config).unwrap();

    assert_eq!(catalog.len(), 1);
    let template = catalog.templates()[0];
    assert_eq!(template.id.to_string(), "ID-t451");
    assert_eq!(
        template.code,
        "gsap.to('${params.elementId}', { boxShadow: '0 0 ${params.blur}px ${params.color}', repeat: -1, yoyo: true })"
    );

    let blur = template.parameter("blur").unwrap();
    match &blur.kind {
        ParameterKind::Number(bounds) => {
            assert_eq!((bounds.min, bounds.max, bounds.step), (0.0, 60.0, 1.0));
        }
        other => panic!("unexpected kind: {other:?}"),
    }
}

#[test]
fn test_invalid_json_preset_fails_the_run() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("broken.json"), BROKEN_JSON).unwrap();

    let config = GeneratorConfig::default().with_preset_dir(dir.path());
    match generate(&config) {
        Err(GenerateError::Batch(BatchError::InvalidPresets(failures))) => {
            assert_eq!(failures.len(), 1);
            assert_eq!(failures[0].template, "Zz");
            assert_eq!(failures[0].violations.len(), 2);
        }
        other => panic!("expected invalid presets, got {other:?}"),
    }
}

#[test]
fn test_directory_presets_register_against_scratch_registry() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("a.toml"),
        GLOW.replace("\"advanced\"", "\"Advanced Effects\""),
    )
    .unwrap();
    let presets = PresetDirectory::load(dir.path()).unwrap();

    let mut registry = TemplateRegistry::new();
    for config in presets.configs(Category::Advanced) {
        registry.create_template(config).unwrap();
    }
    assert_eq!(registry.len(), 1);
    assert!(presets.configs(Category::Core).is_empty());
}

#[test]
fn test_infinite_bound_in_toml_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("glow.toml");
    fs::write(
        &path,
        GLOW.replace("\"advanced\"", "\"Advanced Effects\"")
            .replace("max = 60", "max = inf"),
    )
    .unwrap();

    let configs = load_preset_file(&path).unwrap();
    let mut registry = TemplateRegistry::new();
    let err = registry.create_template(configs[0].clone()).unwrap_err();
    let violations = &err.validation().expect("validation failure").violations;
    assert!(matches!(
        violations.as_slice(),
        [Violation::ParameterNonFiniteBounds { name, .. }] if name == "blur"
    ));
    assert!(registry.is_empty());
}
