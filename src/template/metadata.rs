//! Best-effort search metadata for templates that omit prompts or keywords
//!
//! The output is heuristic. Authors override it by supplying `examplePrompts`
//! or `keywords` explicitly.

use indexmap::IndexSet;

use super::types::Category;

/// Extra prompts appended when the template name contains the given word
const ACTION_PROMPTS: &[(&str, &[&str])] = &[
    ("Fade", &["make it fade in", "fade animation", "opacity animation"]),
    ("Slide", &["slide in", "move in from side", "sliding animation"]),
    ("Scale", &["grow animation", "shrink animation", "size animation"]),
    ("Rotate", &["spin animation", "rotation effect", "turning animation"]),
];

/// Derive example prompts from a template name.
///
/// Always yields at least three prompts.
pub fn default_prompts(name: &str) -> Vec<String> {
    let lower = name.to_lowercase();
    let mut prompts = vec![
        lower.clone(),
        format!("{} animation", lower),
        format!("animate with {}", lower),
    ];

    for (word, extra) in ACTION_PROMPTS {
        if name.contains(word) {
            prompts.extend(extra.iter().map(|p| p.to_string()));
        }
    }

    prompts
}

/// Derive a deduplicated keyword list, in first-seen order
pub fn extract_keywords(
    name: &str,
    description: &str,
    category: Category,
    subcategory: &str,
) -> Vec<String> {
    let mut keywords = IndexSet::new();

    for word in split_camel(name) {
        keywords.insert(word.to_lowercase());
    }

    for word in description.split_whitespace() {
        if word.chars().count() > 3 {
            keywords.insert(word.to_lowercase());
        }
    }

    keywords.insert(category.label().to_lowercase());
    keywords.insert(subcategory.to_lowercase());

    keywords.into_iter().filter(|k| !k.is_empty()).collect()
}

/// Split a name before every uppercase letter, dropping blank pieces
fn split_camel(name: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();

    for ch in name.chars() {
        if ch.is_uppercase() && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        current.push(ch);
    }
    words.push(current);

    words
        .into_iter()
        .map(|w| w.trim().to_string())
        .filter(|w| !w.is_empty())
        .collect()
}
