//! In-memory template lookup: id access, category filter and free-text search

use indexmap::IndexMap;

use super::ids::TemplateId;
use super::types::{Category, Template};

/// Case-insensitive substring match across name, description, keywords and prompts.
///
/// `query` is lower-cased here, so callers may pass it as typed.
pub fn matches_query(template: &Template, query: &str) -> bool {
    let query = query.to_lowercase();
    let hit = |text: &str| text.to_lowercase().contains(&query);

    hit(&template.name)
        || hit(&template.description)
        || template.keywords.iter().any(|k| hit(k))
        || template.example_prompts.iter().any(|p| hit(p))
}

/// Read-only id -> template map over a finished template set
#[derive(Debug, Clone, Default)]
pub struct TemplateIndex {
    templates: IndexMap<TemplateId, Template>,
}

impl TemplateIndex {
    pub fn new(templates: impl IntoIterator<Item = Template>) -> Self {
        Self {
            templates: templates.into_iter().map(|t| (t.id, t)).collect(),
        }
    }

    /// Exact lookup by `ID-t<N>`
    pub fn get_by_id(&self, id: &str) -> Option<&Template> {
        let id: TemplateId = id.parse().ok()?;
        self.templates.get(&id)
    }

    pub fn by_category(&self, category: Category) -> Vec<&Template> {
        self.templates
            .values()
            .filter(|t| t.category == category)
            .collect()
    }

    pub fn search(&self, query: &str) -> Vec<&Template> {
        self.templates
            .values()
            .filter(|t| matches_query(t, query))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::{TemplateConfig, TemplateRegistry};

    fn index() -> TemplateIndex {
        let mut registry = TemplateRegistry::new();
        registry
            .create_template(
                TemplateConfig::new(
                    "Fade In",
                    Category::Core,
                    "fade",
                    "Smoothly reveal an element",
                    "gsap.from(el, { opacity: 0 })",
                    "<div></div>",
                )
                .with_prompts(["make it appear", "gentle entrance", "opacity reveal"]),
            )
            .unwrap();
        registry
            .create_template(
                TemplateConfig::new(
                    "Basic Parallax",
                    Category::ScrollTrigger,
                    "parallax",
                    "Simple parallax scrolling effect",
                    "gsap.to(el, { yPercent: -50 })",
                    "<div></div>",
                )
                .with_prompts(["depth scrolling", "background parallax", "layered scroll"]),
            )
            .unwrap();
        TemplateIndex::new(registry.all_templates().cloned())
    }

    #[test]
    fn test_get_by_id() {
        let index = index();
        assert_eq!(index.get_by_id("ID-t51").map(|t| t.name.as_str()), Some("Basic Parallax"));
        assert!(index.get_by_id("ID-t2").is_none());
        assert!(index.get_by_id("garbage").is_none());
        assert!(index.get_by_id("ID-t051").is_none());
    }

    #[test]
    fn test_search_is_case_insensitive_across_fields() {
        let index = index();
        let names = |q: &str| -> Vec<String> {
            index.search(q).iter().map(|t| t.name.clone()).collect()
        };
        assert_eq!(names("FADE"), vec!["Fade In"]);
        assert_eq!(names("Depth"), vec!["Basic Parallax"]);
        assert_eq!(names("reveal"), vec!["Fade In"]);
        assert_eq!(names("e"), vec!["Fade In", "Basic Parallax"]);
        assert!(names("zzz").is_empty());
    }

    #[test]
    fn test_by_category() {
        let index = index();
        assert_eq!(index.by_category(Category::Core).len(), 1);
        assert_eq!(index.by_category(Category::Text).len(), 0);
        assert_eq!(index.len(), 2);
    }
}
