//! End-to-end tests: generation, export, and reading the artifacts back

use std::fs;

use chrono::{TimeZone, Utc};
use motion_catalog::export::{parse_templates, Manifest};
use motion_catalog::template::{Category, TemplateIndex};
use motion_catalog::{generate, generate_and_export, GenerateError, GeneratorConfig};
use pretty_assertions::assert_eq;

#[test]
fn test_full_run_writes_consistent_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    let config = GeneratorConfig::default().with_output_dir(dir.path());
    let generated_at = Utc.with_ymd_and_hms(2024, 6, 1, 8, 30, 0).unwrap();

    let (catalog, report) = generate_and_export(&config, generated_at).unwrap();
    assert!(report.is_success());
    assert_eq!(report.written.len(), 6 + 4);

    for category in Category::ALL {
        let path = dir.path().join(format!("{}-templates.json", category.slug()));
        let parsed = parse_templates(&fs::read_to_string(&path).unwrap()).unwrap();
        let expected: Vec<_> = catalog
            .templates_by_category(category)
            .into_iter()
            .cloned()
            .collect();
        assert_eq!(parsed, expected, "{}", path.display());
    }

    let all = parse_templates(&fs::read_to_string(dir.path().join("all-templates.json")).unwrap())
        .unwrap();
    assert_eq!(all.len(), catalog.len());

    let manifest: Manifest = serde_json::from_str(
        &fs::read_to_string(dir.path().join("template-manifest.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(manifest.version, "1.0.0");
    assert_eq!(manifest.total_templates, catalog.len());
    let counted: usize = manifest.categories.values().map(|c| c.count).sum();
    assert_eq!(counted, catalog.len());
    for batch in catalog.batches() {
        assert_eq!(manifest.categories[batch.category.label()].count, batch.total());
    }

    let sql = fs::read_to_string(dir.path().join("templates-insert.sql")).unwrap();
    assert_eq!(sql.matches("INSERT INTO templates").count(), catalog.len());

    let module = fs::read_to_string(dir.path().join("template-constants.ts")).unwrap();
    assert!(module.contains("// Generated on 2024-06-01T08:30:00.000Z"));
    assert!(module.contains("  FADE_IN: 'ID-t1'"));
    assert_eq!(module.matches("\n  ['ID-t").count(), catalog.len());
}

#[test]
fn test_every_template_is_in_its_category_range() {
    let catalog = generate(&GeneratorConfig::default()).unwrap();
    let mut seen = std::collections::HashSet::new();
    for template in catalog.templates() {
        assert!(template.category.id_range().contains(template.id));
        assert!(seen.insert(template.id), "duplicate id {}", template.id);
        assert!(template.example_prompts.len() >= 3);
        assert!(template.code.len() >= 10);
    }
}

#[test]
fn test_generation_is_deterministic() {
    let a = generate(&GeneratorConfig::default()).unwrap();
    let b = generate(&GeneratorConfig::default()).unwrap();
    assert_eq!(a.templates(), b.templates());
}

#[test]
fn test_native_index_matches_catalog() {
    let catalog = generate(&GeneratorConfig::default()).unwrap();
    let index = TemplateIndex::new(catalog.templates().into_iter().cloned());

    assert_eq!(index.len(), catalog.len());
    assert_eq!(index.get_by_id("ID-t51").unwrap().name, "Basic Parallax");
    assert_eq!(
        index.by_category(Category::Text).len(),
        catalog.templates_by_category(Category::Text).len()
    );
    assert!(index
        .search("PARALLAX")
        .iter()
        .all(|t| t.category == Category::ScrollTrigger));
    assert!(!index.search("parallax").is_empty());
}

#[test]
fn test_export_failure_surfaces_as_error() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("not-a-dir");
    fs::write(&blocker, "x").unwrap();

    let config = GeneratorConfig::default()
        .with_categories(vec![Category::Core])
        .with_output_dir(&blocker);
    let err = generate_and_export(&config, Utc::now()).unwrap_err();
    assert!(matches!(err, GenerateError::Export(_)));
}
