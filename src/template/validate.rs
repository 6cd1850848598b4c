//! Structural validation of assembled templates
//!
//! All rules run on every template; violations are collected, never
//! short-circuited, and reported together.

use std::collections::HashSet;

use serde_json::Value;
use thiserror::Error;

use super::ids::TemplateId;
use super::types::{Category, ParameterKind, Template};

pub const MIN_NAME_LEN: usize = 3;
pub const MIN_CODE_LEN: usize = 10;
pub const MIN_EXAMPLE_PROMPTS: usize = 3;

/// A single broken rule
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Violation {
    #[error("template id {id} is outside the {category} range {start}..={end}")]
    IdOutOfRange {
        id: TemplateId,
        category: Category,
        start: u32,
        end: u32,
    },

    #[error("template name too short ({len} characters, need at least {})", MIN_NAME_LEN)]
    NameTooShort { len: usize },

    #[error("template code too short ({len} characters, need at least {})", MIN_CODE_LEN)]
    CodeTooShort { len: usize },

    #[error("parameter {index} missing name")]
    ParameterMissingName { index: usize },

    #[error("parameter {index} ('{name}') missing default")]
    ParameterMissingDefault { index: usize, name: String },

    #[error("parameter '{name}' default {default} does not match type {expected}")]
    ParameterDefaultType {
        name: String,
        expected: &'static str,
        default: Value,
    },

    #[error("parameter '{name}' default {default} outside bounds {min}..={max}")]
    ParameterDefaultOutOfBounds {
        name: String,
        default: f64,
        min: f64,
        max: f64,
    },

    #[error("parameter '{name}' has min {min} greater than max {max}")]
    ParameterInvertedBounds { name: String, min: f64, max: f64 },

    #[error("parameter '{name}' has non-finite bounds (min {min}, max {max}, step {step})")]
    ParameterNonFiniteBounds {
        name: String,
        min: f64,
        max: f64,
        step: f64,
    },

    #[error("duplicate parameter name '{name}'")]
    DuplicateParameter { name: String },

    #[error("need at least {} example prompts, found {count}", MIN_EXAMPLE_PROMPTS)]
    TooFewPrompts { count: usize },
}

/// Every violation found on one template
#[derive(Debug, Clone, PartialEq, Error)]
#[error("template '{template}' failed validation: {}", format_violations(.violations))]
pub struct ValidationError {
    pub template: String,
    pub violations: Vec<Violation>,
}

fn format_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Run every rule and return what failed (empty when valid)
pub fn check(template: &Template) -> Vec<Violation> {
    let mut violations = Vec::new();

    let range = template.category.id_range();
    if !range.contains(template.id) {
        violations.push(Violation::IdOutOfRange {
            id: template.id,
            category: template.category,
            start: range.start,
            end: range.end,
        });
    }

    let name_len = template.name.chars().count();
    if name_len < MIN_NAME_LEN {
        violations.push(Violation::NameTooShort { len: name_len });
    }

    let code_len = template.code.chars().count();
    if code_len < MIN_CODE_LEN {
        violations.push(Violation::CodeTooShort { len: code_len });
    }

    check_parameters(template, &mut violations);

    if template.example_prompts.len() < MIN_EXAMPLE_PROMPTS {
        violations.push(Violation::TooFewPrompts {
            count: template.example_prompts.len(),
        });
    }

    violations
}

fn check_parameters(template: &Template, violations: &mut Vec<Violation>) {
    let mut seen = HashSet::new();

    for (index, param) in template.parameters.iter().enumerate() {
        if param.name.is_empty() {
            violations.push(Violation::ParameterMissingName { index });
        } else if !seen.insert(param.name.as_str()) {
            violations.push(Violation::DuplicateParameter {
                name: param.name.clone(),
            });
        }

        if let Some(bounds) = param.kind.bounds() {
            // JSON has no encoding for inf or NaN
            if !bounds.is_finite() {
                violations.push(Violation::ParameterNonFiniteBounds {
                    name: param.name.clone(),
                    min: bounds.min,
                    max: bounds.max,
                    step: bounds.step,
                });
            } else if bounds.min > bounds.max {
                violations.push(Violation::ParameterInvertedBounds {
                    name: param.name.clone(),
                    min: bounds.min,
                    max: bounds.max,
                });
            }
        }

        let Some(default) = &param.default else {
            violations.push(Violation::ParameterMissingDefault {
                index,
                name: param.name.clone(),
            });
            continue;
        };

        // null is an accepted "no value" default for every type
        if default.is_null() {
            continue;
        }

        let expected = match &param.kind {
            ParameterKind::Number(_) | ParameterKind::Range(_) if !default.is_number() => {
                Some("number")
            }
            ParameterKind::Boolean if !default.is_boolean() => Some("boolean"),
            ParameterKind::String | ParameterKind::Color if !default.is_string() => {
                Some("string")
            }
            _ => None,
        };
        if let Some(expected) = expected {
            violations.push(Violation::ParameterDefaultType {
                name: param.name.clone(),
                expected,
                default: default.clone(),
            });
            continue;
        }

        if let (Some(bounds), Some(value)) = (param.kind.bounds(), default.as_f64()) {
            if bounds.is_finite()
                && bounds.min <= bounds.max
                && (value < bounds.min || value > bounds.max) {
                violations.push(Violation::ParameterDefaultOutOfBounds {
                    name: param.name.clone(),
                    default: value,
                    min: bounds.min,
                    max: bounds.max,
                });
            }
        }
    }
}

/// Validate a template, aggregating every violation into one error
pub fn validate(template: &Template) -> Result<(), ValidationError> {
    let violations = check(template);
    if violations.is_empty() {
        Ok(())
    } else {
        Err(ValidationError {
            template: template.name.clone(),
            violations,
        })
    }
}
