//! Parameter normalization: back-fills type-specific defaults onto authored parameters

use super::types::{NumericBounds, Parameter, ParameterKind, ParameterSpec, ParameterType};

/// Lower bound used when a numeric parameter omits `min`
pub const DEFAULT_MIN: f64 = 0.0;
/// Upper bound used when a numeric parameter omits `max`
pub const DEFAULT_MAX: f64 = 100.0;
/// Step used when a numeric parameter omits `step`
pub const DEFAULT_STEP: f64 = 1.0;

/// Normalize a list of authored parameters, preserving order
pub fn normalize_parameters(specs: &[ParameterSpec]) -> Vec<Parameter> {
    specs.iter().map(normalize_parameter).collect()
}

/// Normalize a single parameter.
///
/// Author-supplied bounds and options are never overwritten. Fields that do not
/// belong to the parameter's type are dropped.
pub fn normalize_parameter(spec: &ParameterSpec) -> Parameter {
    let bounds = || NumericBounds {
        min: spec.min.unwrap_or(DEFAULT_MIN),
        max: spec.max.unwrap_or(DEFAULT_MAX),
        step: spec.step.unwrap_or(DEFAULT_STEP),
    };

    let kind = match spec.param_type {
        ParameterType::Number => ParameterKind::Number(bounds()),
        ParameterType::Range => ParameterKind::Range(bounds()),
        ParameterType::String => ParameterKind::String,
        ParameterType::Boolean => ParameterKind::Boolean,
        ParameterType::Select => ParameterKind::Select {
            options: spec.options.clone().unwrap_or_default(),
        },
        ParameterType::Color => ParameterKind::Color,
    };

    Parameter {
        name: spec.name.clone(),
        kind,
        default: spec.default.clone(),
        description: spec.description.clone().unwrap_or_default(),
        affects_performance: spec.affects_performance,
    }
}
