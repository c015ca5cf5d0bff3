//! Error types for the advisory engine.
//!
//! Two failure categories exist: invalid input (a named field is out of range)
//! and sequencing (a stage was invoked before its dependencies completed, or
//! after the wizard was short-circuited by a prohibited classification).
//!
//! Degenerate arithmetic is deliberately *not* an error: a zero implementation
//! cost or non-positive savings produce the tagged [`RoiProjection::NoInvestment`]
//! and [`BreakEven::Never`](crate::core::BreakEven) outputs instead.
//!
//! [`RoiProjection::NoInvestment`]: crate::core::RoiProjection

use crate::core::Stage;
use serde::Serialize;
use thiserror::Error;

/// Result alias used across the engine.
pub type Result<T> = std::result::Result<T, AdvisorError>;

/// Main error type for advisory engine operations.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum AdvisorError {
    /// A single input field is out of range or otherwise invalid.
    ///
    /// `field` names the offending field so callers can surface a
    /// field-level message; the engine never silently clamps.
    #[error("invalid value for `{field}`: {message}")]
    Validation { field: String, message: String },

    /// A stage was invoked out of dependency order.
    #[error("stage `{stage}` cannot run: {requires}")]
    Sequencing { stage: Stage, requires: String },
}

impl AdvisorError {
    /// Create a validation error naming the offending field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a sequencing error for a stage whose dependencies are unmet.
    pub fn sequencing(stage: Stage, requires: impl Into<String>) -> Self {
        Self::Sequencing {
            stage,
            requires: requires.into(),
        }
    }

    /// The field named by a validation error, if any.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Validation { field, .. } => Some(field),
            Self::Sequencing { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_names_the_field() {
        let err = AdvisorError::validation("labor_cost_per_hour", "must not be negative");
        assert_eq!(err.field(), Some("labor_cost_per_hour"));
        assert_eq!(
            err.to_string(),
            "invalid value for `labor_cost_per_hour`: must not be negative"
        );
    }

    #[test]
    fn sequencing_error_names_the_stage() {
        let err = AdvisorError::sequencing(Stage::Deployment, "readiness outputs missing");
        assert_eq!(err.field(), None);
        assert!(err.to_string().contains("deployment"));
    }
}
