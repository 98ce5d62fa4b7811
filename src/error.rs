//! Error types for the estimation core
//!
//! Calculators never fail. Every error here is raised at the input boundary
//! when a form is converted into a typed `LifestyleInput`.

use thiserror::Error;

/// Errors raised while validating lifestyle inputs
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EstimateError {
    /// A key or enum value outside the closed sets (unknown food, mode, fuel...)
    #[error("unrecognized {category} category: '{key}'")]
    UnrecognizedCategory { category: &'static str, key: String },

    #[error("quantity '{field}' must be non-negative, got {value}")]
    NegativeQuantity { field: String, value: f64 },

    #[error("quantity '{field}' must be a finite number")]
    NonFiniteQuantity { field: String },
}

impl EstimateError {
    pub fn unrecognized(category: &'static str, key: impl Into<String>) -> Self {
        EstimateError::UnrecognizedCategory {
            category,
            key: key.into(),
        }
    }
}

/// Reject negative or non-finite quantities
pub(crate) fn check_quantity(field: &str, value: f64) -> Result<(), EstimateError> {
    if !value.is_finite() {
        return Err(EstimateError::NonFiniteQuantity {
            field: field.to_string(),
        });
    }
    if value < 0.0 {
        return Err(EstimateError::NegativeQuantity {
            field: field.to_string(),
            value,
        });
    }
    Ok(())
}
