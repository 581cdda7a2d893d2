//! Error types for ADM metadata

use thiserror::Error;

/// ADM metadata error types
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AdmError {
    /// A value lies outside the legal range of its parameter
    #[error("Invalid value for {parameter}: {reason}")]
    InvalidValue {
        parameter: &'static str,
        reason: String,
    },

    /// Parameter has no value and no default
    #[error("Parameter not set: {0}")]
    NotSet(&'static str),
}

impl AdmError {
    pub(crate) fn invalid(parameter: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            parameter,
            reason: reason.into(),
        }
    }
}

/// Result type for ADM operations
pub type AdmResult<T> = Result<T, AdmError>;

/// Check that `value` is finite and inside `[min, max]`
pub(crate) fn check_range(
    parameter: &'static str,
    value: f32,
    min: f32,
    max: f32,
) -> AdmResult<f32> {
    if !value.is_finite() {
        return Err(AdmError::invalid(parameter, format!("{value} is not finite")));
    }
    if value < min || value > max {
        return Err(AdmError::invalid(
            parameter,
            format!("{value} outside [{min}, {max}]"),
        ));
    }
    Ok(value)
}
