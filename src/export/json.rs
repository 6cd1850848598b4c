//! JSON template arrays

use crate::template::Template;

/// Pretty-printed JSON array of full template records
pub fn render_templates(templates: &[&Template]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(templates)
}

/// Parse a JSON array written by [`render_templates`]
pub fn parse_templates(json: &str) -> Result<Vec<Template>, serde_json::Error> {
    serde_json::from_str(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::{Category, ParameterSpec, TemplateConfig, TemplateRegistry};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parsed_array_equals_registered_templates() {
        let mut registry = TemplateRegistry::new();
        let mut config = TemplateConfig::new(
            "Fade In",
            Category::Core,
            "fade",
            "Fade an element into view",
            "gsap.from(\"{{elementId}}\", { opacity: 0, duration: {{duration}} })",
            "<div></div>",
        )
        .with_parameters(vec![
            ParameterSpec::range("duration", 0.3, 0.1, 5.0, 0.1),
            ParameterSpec::text("callback", "").with_default(serde_json::Value::Null),
        ]);
        config.popularity_score = Some(42);
        config.dependencies = Some(vec!["gsap@3".to_string()]);
        registry.create_template(config).unwrap();

        let templates: Vec<&Template> = registry.all_templates().collect();
        let json = render_templates(&templates).unwrap();
        let parsed = parse_templates(&json).unwrap();

        assert_eq!(parsed.len(), 1);
        assert_eq!(&parsed[0], templates[0]);
    }

    #[test]
    fn test_empty_set_renders_empty_array() {
        assert_eq!(render_templates(&[]).unwrap(), "[]");
    }
}
