//! Field-level input validation, run by the wizard before each calculator.
//!
//! The calculators themselves are total functions; rejecting bad input with a
//! field-named error is this module's job so callers can attach the message to
//! the form field that caused it.

use crate::architecture::ArchitectureInputs;
use crate::errors::{AdvisorError, Result};
use crate::roi::RoiInputs;

/// Validate the ROI stage inputs: money and counts must be non-negative,
/// percentages within 0-100.
pub fn validate_roi_inputs(inputs: &RoiInputs) -> Result<()> {
    require_non_negative("tasks_per_month", inputs.tasks_per_month)?;
    require_non_negative("minutes_per_task", inputs.minutes_per_task)?;
    require_non_negative("labor_cost_per_hour", inputs.labor_cost_per_hour)?;
    require_percent("error_rate", inputs.error_rate)?;
    require_non_negative("error_cost_per_incident", inputs.error_cost_per_incident)?;
    require_percent("ai_success_rate", inputs.ai_success_rate)?;
    require_non_negative("ai_cost_per_task", inputs.ai_cost_per_task)?;
    require_percent("human_review_percent", inputs.human_review_percent)?;
    require_non_negative("implementation_cost", inputs.implementation_cost)
}

/// Validate the architecture stage inputs.
pub fn validate_architecture_inputs(inputs: &ArchitectureInputs) -> Result<()> {
    require_non_negative("budget_per_month", inputs.budget_per_month)?;
    for skill in &inputs.team_skills {
        if skill.trim().is_empty() {
            return Err(AdvisorError::validation(
                "team_skills",
                "skill tags must not be blank",
            ));
        }
    }
    Ok(())
}

fn require_non_negative(field: &str, value: f64) -> Result<()> {
    if value.is_nan() {
        return Err(AdvisorError::validation(field, "must be a number"));
    }
    if value < 0.0 {
        return Err(AdvisorError::validation(field, "must not be negative"));
    }
    Ok(())
}

fn require_percent(field: &str, value: f64) -> Result<()> {
    if value.is_nan() {
        return Err(AdvisorError::validation(field, "must be a number"));
    }
    if !(0.0..=100.0).contains(&value) {
        return Err(AdvisorError::validation(field, "must be between 0 and 100"));
    }
    Ok(())
}
