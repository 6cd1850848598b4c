//! Code preprocessing: rewrites `{{name}}` placeholders into `${params.name}`
//!
//! Authors may write placeholders in the double-brace form, directly in the
//! interpolation form, or mix them. The rewrite is a single pass and is
//! idempotent: output never contains a double-brace placeholder, and an
//! interpolation wrapped around a double-brace placeholder (`${{{name}}}`)
//! collapses to one interpolation instead of nesting.

use std::sync::OnceLock;

use regex::{Captures, Regex};

fn placeholder_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\$\{\{\{\s*(?:params\.)?(\w+)\s*\}\}\}|\{\{\s*(?:params\.)?(\w+)\s*\}\}")
            .expect("placeholder pattern is a valid regex")
    })
}

fn interpolation_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\$\{params\.(\w+)\}").expect("interpolation pattern is a valid regex")
    })
}

/// Interpolation form of a parameter reference
pub fn interpolation(name: &str) -> String {
    format!("${{params.{}}}", name)
}

/// Rewrite placeholders and trim surrounding whitespace
pub fn preprocess_code(code: &str) -> String {
    placeholder_pattern()
        .replace_all(code, |caps: &Captures| {
            let name = caps
                .get(1)
                .or_else(|| caps.get(2))
                .map(|m| m.as_str())
                .unwrap_or_default();
            interpolation(name)
        })
        .trim()
        .to_string()
}

/// Parameter names referenced through `${params.name}`, in first-use order
pub fn referenced_parameters(code: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for caps in interpolation_pattern().captures_iter(code) {
        let name = &caps[1];
        if !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }
    names
}
