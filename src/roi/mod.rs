//! Manual-versus-AI process cost comparison.
//!
//! All money values are per month unless the field name says otherwise.
//! Degenerate arithmetic is tagged, never approximated: a zero implementation
//! cost yields [`RoiProjection::NoInvestment`] and non-positive savings yield
//! [`BreakEven::Never`].

use serde::{Deserialize, Serialize};

use crate::config::RoiThresholds;
use crate::core::{BreakEven, ConfidenceLevel, RoiProjection};

/// Manual-process and AI-process cost parameters.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RoiInputs {
    pub tasks_per_month: f64,
    pub minutes_per_task: f64,
    pub labor_cost_per_hour: f64,
    /// Share of manual tasks that produce a costly error, in percent.
    pub error_rate: f64,
    pub error_cost_per_incident: f64,
    /// Share of tasks the AI completes without escalation, in percent.
    pub ai_success_rate: f64,
    pub ai_cost_per_task: f64,
    /// Share of AI output routed to a human reviewer, in percent.
    pub human_review_percent: f64,
    /// One-time cost of building and rolling out the AI process.
    pub implementation_cost: f64,
}

/// Savings projection with its confidence rating and caveats.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoiOutputs {
    pub current_monthly_cost: f64,
    pub ai_monthly_cost: f64,
    /// May be negative when the AI process costs more; surfaced as-is.
    pub monthly_savings: f64,
    pub annual_savings: f64,
    pub roi_percentage: RoiProjection,
    pub break_even: BreakEven,
    pub confidence_level: ConfidenceLevel,
    pub risks: Vec<String>,
}

/// Project the savings of replacing a manual process with an AI process.
///
/// Total over validated inputs; see [`crate::validation::validate_roi_inputs`]
/// for the range requirements.
pub fn calculate(inputs: &RoiInputs, thresholds: &RoiThresholds) -> RoiOutputs {
    let labor_cost = inputs.tasks_per_month * inputs.minutes_per_task / 60.0
        * inputs.labor_cost_per_hour;
    let error_cost =
        inputs.tasks_per_month * inputs.error_rate / 100.0 * inputs.error_cost_per_incident;
    let current_monthly_cost = labor_cost + error_cost;

    let ai_task_cost = inputs.tasks_per_month * inputs.ai_cost_per_task;
    let review_cost = inputs.tasks_per_month * inputs.human_review_percent / 100.0
        * inputs.minutes_per_task
        / 60.0
        * inputs.labor_cost_per_hour;
    let ai_monthly_cost = ai_task_cost + review_cost;

    let monthly_savings = current_monthly_cost - ai_monthly_cost;
    let annual_savings = monthly_savings * 12.0;

    let roi_percentage = if inputs.implementation_cost > 0.0 {
        RoiProjection::Percent(
            (annual_savings - inputs.implementation_cost) / inputs.implementation_cost * 100.0,
        )
    } else {
        RoiProjection::NoInvestment
    };

    let break_even = if monthly_savings > 0.0 {
        BreakEven::Months(inputs.implementation_cost / monthly_savings)
    } else {
        BreakEven::Never
    };

    RoiOutputs {
        current_monthly_cost,
        ai_monthly_cost,
        monthly_savings,
        annual_savings,
        roi_percentage,
        break_even,
        confidence_level: confidence_for(inputs, thresholds),
        risks: collect_risks(inputs, monthly_savings, break_even, thresholds),
    }
}

fn confidence_for(inputs: &RoiInputs, thresholds: &RoiThresholds) -> ConfidenceLevel {
    if inputs.ai_success_rate < thresholds.low_confidence_success_rate
        || inputs.human_review_percent > thresholds.low_confidence_review_percent
    {
        ConfidenceLevel::Low
    } else if inputs.ai_success_rate >= thresholds.high_confidence_success_rate
        && inputs.human_review_percent <= thresholds.high_confidence_review_percent
    {
        ConfidenceLevel::High
    } else {
        ConfidenceLevel::Medium
    }
}

fn collect_risks(
    inputs: &RoiInputs,
    monthly_savings: f64,
    break_even: BreakEven,
    thresholds: &RoiThresholds,
) -> Vec<String> {
    let mut risks = Vec::new();

    if inputs.ai_success_rate < thresholds.accuracy_warning_success_rate {
        risks.push(format!(
            "AI success rate of {:.0}% is below {:.0}%; rework on failed tasks will eat into the projected savings",
            inputs.ai_success_rate, thresholds.accuracy_warning_success_rate
        ));
    }
    if inputs.human_review_percent > thresholds.review_warning_percent {
        risks.push(format!(
            "Human review of {:.0}% of output keeps much of the manual labor cost in place",
            inputs.human_review_percent
        ));
    }
    match break_even {
        BreakEven::Never => {
            risks.push(
                "The implementation cost is never recovered at the projected savings rate"
                    .to_string(),
            );
        }
        BreakEven::Months(months) if months > thresholds.break_even_warning_months => {
            risks.push(format!(
                "Break-even of {months:.1} months exceeds the {:.0}-month planning horizon",
                thresholds.break_even_warning_months
            ));
        }
        BreakEven::Months(_) => {}
    }
    if monthly_savings < 0.0 {
        risks.push(format!(
            "The AI process costs {:.2} more per month than the manual process",
            -monthly_savings
        ));
    }

    risks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn thresholds() -> RoiThresholds {
        RoiThresholds::default()
    }

    fn baseline_inputs() -> RoiInputs {
        RoiInputs {
            tasks_per_month: 1000.0,
            minutes_per_task: 15.0,
            labor_cost_per_hour: 25.0,
            error_rate: 5.0,
            error_cost_per_incident: 100.0,
            ai_success_rate: 92.0,
            ai_cost_per_task: 0.05,
            human_review_percent: 15.0,
            implementation_cost: 40_000.0,
        }
    }

    #[test]
    fn current_monthly_cost_matches_hand_calculation() {
        // 1000 * 0.25h * 25 + 1000 * 0.05 * 100 = 6250 + 5000
        let outputs = calculate(&baseline_inputs(), &thresholds());
        assert_eq!(outputs.current_monthly_cost, 11_250.0);
    }

    #[test]
    fn ai_monthly_cost_includes_review_labor() {
        // 1000 * 0.05 + 1000 * 0.15 * 0.25h * 25 = 50 + 937.5
        let outputs = calculate(&baseline_inputs(), &thresholds());
        assert_eq!(outputs.ai_monthly_cost, 987.5);
        assert_eq!(outputs.monthly_savings, 10_262.5);
        assert_eq!(outputs.annual_savings, 123_150.0);
    }

    #[test]
    fn roi_percentage_relates_annual_savings_to_implementation_cost() {
        let outputs = calculate(&baseline_inputs(), &thresholds());
        let expected = (123_150.0 - 40_000.0) / 40_000.0 * 100.0;
        assert_eq!(outputs.roi_percentage, RoiProjection::Percent(expected));
    }

    #[test]
    fn zero_implementation_cost_is_tagged_not_zeroed() {
        let inputs = RoiInputs {
            implementation_cost: 0.0,
            ..baseline_inputs()
        };
        let outputs = calculate(&inputs, &thresholds());
        assert_eq!(outputs.roi_percentage, RoiProjection::NoInvestment);
        // With nothing to recover, break-even is immediate.
        assert_eq!(outputs.break_even, BreakEven::Months(0.0));
    }

    #[test]
    fn negative_savings_never_break_even() {
        let inputs = RoiInputs {
            ai_cost_per_task: 50.0,
            ..baseline_inputs()
        };
        let outputs = calculate(&inputs, &thresholds());
        assert!(outputs.monthly_savings < 0.0);
        assert!(outputs.break_even.is_never());
        assert!(outputs
            .risks
            .iter()
            .any(|r| r.contains("never recovered") || r.contains("more per month")));
    }

    #[test]
    fn negative_roi_is_surfaced() {
        let inputs = RoiInputs {
            ai_cost_per_task: 50.0,
            implementation_cost: 10_000.0,
            ..baseline_inputs()
        };
        let outputs = calculate(&inputs, &thresholds());
        let pct = outputs.roi_percentage.percent().unwrap();
        assert!(pct < 0.0);
    }

    #[test]
    fn confidence_bands() {
        let high = baseline_inputs(); // 92% success, 15% review
        assert_eq!(
            calculate(&high, &thresholds()).confidence_level,
            ConfidenceLevel::High
        );

        let medium = RoiInputs {
            ai_success_rate: 85.0,
            human_review_percent: 25.0,
            ..baseline_inputs()
        };
        assert_eq!(
            calculate(&medium, &thresholds()).confidence_level,
            ConfidenceLevel::Medium
        );

        let low_success = RoiInputs {
            ai_success_rate: 65.0,
            ..baseline_inputs()
        };
        assert_eq!(
            calculate(&low_success, &thresholds()).confidence_level,
            ConfidenceLevel::Low
        );

        let heavy_review = RoiInputs {
            human_review_percent: 60.0,
            ..baseline_inputs()
        };
        assert_eq!(
            calculate(&heavy_review, &thresholds()).confidence_level,
            ConfidenceLevel::Low
        );
    }

    #[test]
    fn warnings_fire_on_threshold_breaches() {
        let inputs = RoiInputs {
            ai_success_rate: 75.0,
            human_review_percent: 40.0,
            implementation_cost: 500_000.0,
            ..baseline_inputs()
        };
        let outputs = calculate(&inputs, &thresholds());
        assert!(outputs.risks.iter().any(|r| r.contains("success rate")));
        assert!(outputs.risks.iter().any(|r| r.contains("Human review")));
        assert!(outputs.risks.iter().any(|r| r.contains("Break-even")));
    }

    #[test]
    fn clean_projection_has_no_risks() {
        let outputs = calculate(&baseline_inputs(), &thresholds());
        assert!(outputs.risks.is_empty());
    }
}
