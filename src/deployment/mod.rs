//! Phased deployment plan synthesis.
//!
//! The only stage that reads every upstream output. Phases are appended by an
//! ordered builder so the plan order is explicit; which phases appear depends
//! on the risk classification and the readiness gap count.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::architecture::ArchitectureRecommendation;
use crate::core::{BreakEven, ReadinessLevel, RiskLevel, Stage};
use crate::errors::{AdvisorError, Result};
use crate::readiness::ReadinessOutputs;
use crate::risk::RiskOutputs;
use crate::roi::RoiOutputs;
use crate::wizard::WizardState;

/// Gap count above which a dedicated preparation phase is prepended.
const PREPARATION_GAP_THRESHOLD: usize = 3;

/// Cap on the next-steps list; critical factors are uncapped.
const MAX_NEXT_STEPS: usize = 6;

/// One implementation phase.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phase {
    pub name: String,
    pub description: String,
    /// Zero means ongoing (the monitoring phase has no end date).
    pub duration_weeks: u32,
    pub tasks: Vec<String>,
    pub deliverables: Vec<String>,
}

/// Headline figures collected from the four upstream stages.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlanSummary {
    pub annual_savings: f64,
    pub total_weeks: u32,
    pub compliance_level: RiskLevel,
    pub readiness_score: u32,
    /// Top-ranked architecture, or a placeholder when nothing fit the constraints.
    pub architecture: String,
}

/// Ordered phases plus the success factors and immediate next steps.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeploymentPlan {
    pub phases: Vector<Phase>,
    pub critical_factors: Vec<String>,
    pub next_steps: Vec<String>,
    pub summary: PlanSummary,
}

/// Synthesize the deployment plan from a completed wizard state.
///
/// Fails with a sequencing error unless risk (non-prohibited), ROI,
/// architecture and readiness outputs are all present.
pub fn generate(state: &WizardState) -> Result<DeploymentPlan> {
    let risk = upstream(state.risk_outputs(), "risk outputs missing")?;
    if risk.classification == RiskLevel::Prohibited {
        return Err(AdvisorError::sequencing(
            Stage::Deployment,
            "the system is prohibited; no deployment can be planned",
        ));
    }
    let roi = upstream(state.roi_outputs(), "roi outputs missing")?;
    let architecture = upstream(state.architecture_outputs(), "architecture outputs missing")?;
    let readiness = upstream(state.readiness_outputs(), "readiness outputs missing")?;

    let top_architecture = architecture.front();
    let phases = build_phases(risk, readiness, top_architecture);
    let total_weeks = phases.iter().map(|p| p.duration_weeks).sum();

    Ok(DeploymentPlan {
        critical_factors: collect_critical_factors(risk, roi, readiness, top_architecture),
        next_steps: collect_next_steps(risk, roi, readiness, top_architecture),
        summary: PlanSummary {
            annual_savings: roi.annual_savings,
            total_weeks,
            compliance_level: risk.classification,
            readiness_score: readiness.overall_score,
            architecture: top_architecture
                .map(|a| a.name.clone())
                .unwrap_or_else(|| "No architecture fit the constraints".to_string()),
        },
        phases,
    })
}

fn upstream<'a, T>(outputs: Option<&'a T>, message: &str) -> Result<&'a T> {
    outputs.ok_or_else(|| AdvisorError::sequencing(Stage::Deployment, message))
}

fn build_phases(
    risk: &RiskOutputs,
    readiness: &ReadinessOutputs,
    top_architecture: Option<&ArchitectureRecommendation>,
) -> Vector<Phase> {
    let mut phases = Vector::new();

    if readiness.gaps.len() > PREPARATION_GAP_THRESHOLD {
        phases.push_back(preparation_phase(readiness));
    }
    phases.push_back(planning_phase(top_architecture));
    phases.push_back(development_phase(readiness));
    if risk.classification == RiskLevel::HighRisk {
        phases.push_back(compliance_phase(risk));
    }
    phases.push_back(launch_phase());
    phases.push_back(monitoring_phase());

    phases
}

fn preparation_phase(readiness: &ReadinessOutputs) -> Phase {
    // Roughly two gaps closed per week, bounded to keep the phase plannable.
    let duration_weeks = ((readiness.gaps.len() as f64 / 2.0).ceil() as u32).clamp(2, 8);
    Phase {
        name: "Preparation & Foundation".to_string(),
        description: "Close the readiness gaps that would otherwise surface mid-project"
            .to_string(),
        duration_weeks,
        tasks: readiness.gaps.iter().take(6).cloned().collect(),
        deliverables: vec![
            "Readiness gaps closed or consciously accepted".to_string(),
            "Updated readiness assessment".to_string(),
        ],
    }
}

fn planning_phase(top_architecture: Option<&ArchitectureRecommendation>) -> Phase {
    let architecture_task = match top_architecture {
        Some(arch) => format!("Confirm the {} architecture against procurement policy", arch.name),
        None => "Re-scope constraints until a reference architecture fits".to_string(),
    };
    Phase {
        name: "Planning & Architecture".to_string(),
        description: "Turn the recommendation into a concrete technical design".to_string(),
        duration_weeks: 3,
        tasks: vec![
            architecture_task,
            "Design data flows and integration points".to_string(),
            "Define success metrics and an evaluation set".to_string(),
            "Write the project plan and staffing map".to_string(),
        ],
        deliverables: vec![
            "Architecture design document".to_string(),
            "Project plan with milestones".to_string(),
        ],
    }
}

fn development_phase(readiness: &ReadinessOutputs) -> Phase {
    // 40% of the adjusted readiness timeline, rounded up.
    let duration_weeks = (readiness.estimated_timeline_weeks as f64 * 0.4).ceil() as u32;
    Phase {
        name: "Development & Testing".to_string(),
        description: "Build the integration, tune retrieval and prompts, and evaluate \
                      against the success metrics"
            .to_string(),
        duration_weeks: duration_weeks.max(1),
        tasks: vec![
            "Implement ingestion and retrieval pipeline".to_string(),
            "Integrate the model behind the agreed interface".to_string(),
            "Evaluate output quality on the evaluation set".to_string(),
            "Load-test at the projected query volume".to_string(),
        ],
        deliverables: vec![
            "Working system in a staging environment".to_string(),
            "Evaluation report against success metrics".to_string(),
        ],
    }
}

fn compliance_phase(risk: &RiskOutputs) -> Phase {
    Phase {
        name: "Compliance & Documentation".to_string(),
        description: "Work through the high-risk obligations before any production \
                      exposure"
            .to_string(),
        duration_weeks: 4,
        tasks: risk.compliance_requirements.clone(),
        deliverables: vec![
            "Technical documentation pack".to_string(),
            "Conformity assessment file".to_string(),
        ],
    }
}

fn launch_phase() -> Phase {
    Phase {
        name: "Deployment & Launch".to_string(),
        description: "Roll out to production behind a staged ramp-up".to_string(),
        duration_weeks: 2,
        tasks: vec![
            "Deploy to production".to_string(),
            "Ramp traffic in stages with rollback points".to_string(),
            "Train the operating team on runbooks".to_string(),
        ],
        deliverables: vec!["System live at full traffic".to_string()],
    }
}

fn monitoring_phase() -> Phase {
    Phase {
        name: "Monitor & Optimize".to_string(),
        description: "Ongoing: watch quality, cost and drift; feed findings back into \
                      prompts and retrieval"
            .to_string(),
        duration_weeks: 0,
        tasks: vec![
            "Review quality and cost dashboards weekly".to_string(),
            "Re-run the evaluation set after every model or prompt change".to_string(),
        ],
        deliverables: vec!["Monthly operations report".to_string()],
    }
}

fn collect_critical_factors(
    risk: &RiskOutputs,
    roi: &RoiOutputs,
    readiness: &ReadinessOutputs,
    top_architecture: Option<&ArchitectureRecommendation>,
) -> Vec<String> {
    let mut factors = Vec::new();

    if risk.classification == RiskLevel::HighRisk {
        factors.push(
            "High-risk classification: compliance work must run alongside development, \
             not after it"
                .to_string(),
        );
    }
    if readiness.readiness_level != ReadinessLevel::Ready {
        factors.push(format!(
            "Readiness is {}/100; the preparation work is on the critical path",
            readiness.overall_score
        ));
    }
    match roi.break_even {
        BreakEven::Never => factors.push(
            "The projected savings never recover the implementation cost; the business \
             case rests on non-financial benefits"
                .to_string(),
        ),
        BreakEven::Months(months) if months > 12.0 => factors.push(format!(
            "Break-even of {months:.0} months requires sustained sponsorship beyond year one"
        )),
        BreakEven::Months(_) => {}
    }
    match top_architecture {
        None => factors.push(
            "No reference architecture fit the stated constraints; budget or residency \
             must move before planning can finish"
                .to_string(),
        ),
        Some(arch) if arch.complexity == crate::core::ComplexityLevel::High => {
            factors.push(format!(
                "{} is a high-complexity stack; operating capability must be in place \
                 before launch",
                arch.name
            ));
        }
        Some(_) => {}
    }
    for factor in &readiness.risk_factors {
        factors.push(factor.clone());
    }

    factors
}

fn collect_next_steps(
    risk: &RiskOutputs,
    roi: &RoiOutputs,
    readiness: &ReadinessOutputs,
    top_architecture: Option<&ArchitectureRecommendation>,
) -> Vec<String> {
    let mut steps = Vec::new();

    match risk.classification {
        RiskLevel::HighRisk => steps.push(
            "Validate the high-risk classification and obligations with legal counsel".to_string(),
        ),
        RiskLevel::LimitedRisk => steps
            .push("Draft the user-facing transparency notice required at limited risk".to_string()),
        RiskLevel::MinimalRisk | RiskLevel::Prohibited => {}
    }
    steps.push(format!(
        "Present the {:.0} EUR annual savings case to the budget owner",
        roi.annual_savings
    ));
    for recommendation in readiness.recommendations.iter().take(2) {
        steps.push(recommendation.clone());
    }
    if let Some(arch) = top_architecture {
        steps.push(format!("Stand up a proof of concept on {}", arch.name));
    }
    steps.push("Schedule the phase 1 kick-off with the delivery team".to_string());

    steps.truncate(MAX_NEXT_STEPS);
    steps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ComplexityLevel;

    fn minimal_risk_outputs() -> RiskOutputs {
        RiskOutputs {
            classification: RiskLevel::MinimalRisk,
            prohibition_reason: None,
            triggered_criteria: vec![],
            compliance_requirements: vec![],
            estimated_compliance_cost: crate::core::CostRange::ZERO,
            estimated_time_months: crate::core::MonthRange::ZERO,
        }
    }

    fn ready_outputs(gaps: usize) -> ReadinessOutputs {
        ReadinessOutputs {
            category_scores: crate::readiness::CategoryScores {
                data: 90.0,
                technical: 90.0,
                organizational: 90.0,
                compliance: 90.0,
            },
            overall_score: 90,
            readiness_level: ReadinessLevel::Ready,
            gaps: (0..gaps).map(|i| format!("Close gap {i}")).collect(),
            recommendations: vec!["Run a data readiness audit".to_string()],
            risk_factors: vec![],
            estimated_timeline_weeks: 10,
        }
    }

    fn sample_recommendation(complexity: ComplexityLevel) -> ArchitectureRecommendation {
        ArchitectureRecommendation {
            name: "Test Stack".to_string(),
            description: "A stack".to_string(),
            complexity,
            components: crate::architecture::Components {
                llm: "llm".to_string(),
                vector_db: "vdb".to_string(),
                orchestration: "orch".to_string(),
            },
            pros: vec![],
            cons: vec![],
            code_example: String::new(),
            cost_model: crate::architecture::CostModel {
                base_per_month: 100.0,
                per_query: 0.01,
            },
            estimated_monthly_cost: 200.0,
        }
    }

    fn roi_outputs() -> RoiOutputs {
        RoiOutputs {
            current_monthly_cost: 10_000.0,
            ai_monthly_cost: 2_000.0,
            monthly_savings: 8_000.0,
            annual_savings: 96_000.0,
            roi_percentage: crate::core::RoiProjection::Percent(140.0),
            break_even: BreakEven::Months(5.0),
            confidence_level: crate::core::ConfidenceLevel::High,
            risks: vec![],
        }
    }

    #[test]
    fn few_gaps_skip_the_preparation_phase() {
        let phases = build_phases(
            &minimal_risk_outputs(),
            &ready_outputs(3),
            Some(&sample_recommendation(ComplexityLevel::Low)),
        );
        assert_eq!(phases[0].name, "Planning & Architecture");
    }

    #[test]
    fn many_gaps_prepend_preparation() {
        let phases = build_phases(
            &minimal_risk_outputs(),
            &ready_outputs(4),
            Some(&sample_recommendation(ComplexityLevel::Low)),
        );
        assert_eq!(phases[0].name, "Preparation & Foundation");
        assert_eq!(phases[0].duration_weeks, 2);
    }

    #[test]
    fn high_risk_inserts_compliance_phase_with_exact_requirements() {
        let mut risk = minimal_risk_outputs();
        risk.classification = RiskLevel::HighRisk;
        risk.compliance_requirements = vec!["Do the paperwork".to_string()];

        let phases = build_phases(
            &risk,
            &ready_outputs(0),
            Some(&sample_recommendation(ComplexityLevel::Low)),
        );
        let compliance = phases
            .iter()
            .find(|p| p.name == "Compliance & Documentation")
            .unwrap();
        assert_eq!(compliance.duration_weeks, 4);
        assert_eq!(compliance.tasks, risk.compliance_requirements);
    }

    #[test]
    fn development_duration_scales_with_readiness_timeline() {
        let phases = build_phases(
            &minimal_risk_outputs(),
            &ready_outputs(0), // estimated_timeline_weeks: 10
            None,
        );
        let development = phases
            .iter()
            .find(|p| p.name == "Development & Testing")
            .unwrap();
        assert_eq!(development.duration_weeks, 4); // ceil(10 * 0.4)
    }

    #[test]
    fn monitoring_phase_is_always_last_and_open_ended() {
        let phases = build_phases(&minimal_risk_outputs(), &ready_outputs(10), None);
        let last = phases.last().unwrap();
        assert_eq!(last.name, "Monitor & Optimize");
        assert_eq!(last.duration_weeks, 0);
    }

    #[test]
    fn next_steps_are_capped() {
        let mut readiness = ready_outputs(0);
        readiness.recommendations = (0..10).map(|i| format!("Recommendation {i}")).collect();
        let mut risk = minimal_risk_outputs();
        risk.classification = RiskLevel::HighRisk;

        let steps = collect_next_steps(
            &risk,
            &roi_outputs(),
            &readiness,
            Some(&sample_recommendation(ComplexityLevel::Low)),
        );
        assert!(steps.len() <= MAX_NEXT_STEPS);
    }

    #[test]
    fn critical_factors_flag_never_breaking_even() {
        let mut roi = roi_outputs();
        roi.break_even = BreakEven::Never;
        let factors = collect_critical_factors(
            &minimal_risk_outputs(),
            &roi,
            &ready_outputs(0),
            Some(&sample_recommendation(ComplexityLevel::High)),
        );
        assert!(factors.iter().any(|f| f.contains("never recover")));
        assert!(factors.iter().any(|f| f.contains("high-complexity")));
    }
}
