//! Organizational readiness scoring.
//!
//! Four weighted category scores (data, technical, organizational, compliance)
//! blend a boolean checklist share with one band contribution each; the
//! overall score is their equal-weight average. Every unchecked item becomes
//! an actionable gap, and known-bad combinations are flagged as compounding
//! risk factors.

use serde::{Deserialize, Serialize};

use crate::config::ReadinessWeights;
use crate::core::{DataQuality, ReadinessLevel};

/// Data estate checklist.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataChecklist {
    pub sources_identified: bool,
    pub volume_sufficient: bool,
    pub documentation_exists: bool,
    pub governance_defined: bool,
}

/// Technical platform checklist.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechnicalChecklist {
    pub api_integration_ready: bool,
    pub cloud_infrastructure: bool,
    pub ml_experience: bool,
    pub monitoring_in_place: bool,
}

/// Organizational buy-in checklist.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationalChecklist {
    pub executive_sponsor: bool,
    pub budget_allocated: bool,
    pub change_management_plan: bool,
    pub training_plan: bool,
}

/// Compliance groundwork checklist.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceChecklist {
    pub gdpr_baseline: bool,
    pub risk_assessment_done: bool,
    pub audit_trail: bool,
    pub legal_review: bool,
}

/// Full readiness questionnaire.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadinessInputs {
    pub data: DataChecklist,
    pub technical: TechnicalChecklist,
    pub organizational: OrganizationalChecklist,
    pub compliance: ComplianceChecklist,
    pub data_quality: DataQuality,
    pub team_size: u32,
    pub timeline_weeks: u32,
}

/// Per-category scores, each clamped to 0-100.
///
/// The four categories carry equal weight (25% each) in the overall score.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CategoryScores {
    pub data: f64,
    pub technical: f64,
    pub organizational: f64,
    pub compliance: f64,
}

/// Scoring result with gaps, recommendations and compounding risk factors.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReadinessOutputs {
    pub category_scores: CategoryScores,
    pub overall_score: u32,
    pub readiness_level: ReadinessLevel,
    /// Every unchecked item, phrased as the action that closes it.
    pub gaps: Vec<String>,
    pub recommendations: Vec<String>,
    pub risk_factors: Vec<String>,
    /// User-supplied timeline plus the per-gap penalty.
    pub estimated_timeline_weeks: u32,
}

impl DataChecklist {
    fn items(&self) -> [(bool, &'static str); 4] {
        [
            (
                self.sources_identified,
                "Identify and catalogue the data sources the system will draw on",
            ),
            (
                self.volume_sufficient,
                "Collect enough historical data to cover the task's variety",
            ),
            (
                self.documentation_exists,
                "Document schemas, lineage and meaning of the source data",
            ),
            (
                self.governance_defined,
                "Define data ownership and access governance",
            ),
        ]
    }
}

impl TechnicalChecklist {
    fn items(&self) -> [(bool, &'static str); 4] {
        [
            (
                self.api_integration_ready,
                "Expose the systems the AI must read and write through APIs",
            ),
            (
                self.cloud_infrastructure,
                "Provision cloud (or equivalent) infrastructure for model workloads",
            ),
            (
                self.ml_experience,
                "Build or hire hands-on machine-learning experience",
            ),
            (
                self.monitoring_in_place,
                "Stand up monitoring for quality and drift in production",
            ),
        ]
    }
}

impl OrganizationalChecklist {
    fn items(&self) -> [(bool, &'static str); 4] {
        [
            (
                self.executive_sponsor,
                "Secure an executive sponsor accountable for the initiative",
            ),
            (
                self.budget_allocated,
                "Allocate budget for implementation and operations",
            ),
            (
                self.change_management_plan,
                "Plan how affected teams' workflows will change",
            ),
            (
                self.training_plan,
                "Prepare training for the people who will work with the system",
            ),
        ]
    }
}

impl ComplianceChecklist {
    fn items(&self) -> [(bool, &'static str); 4] {
        [
            (
                self.gdpr_baseline,
                "Establish a GDPR baseline for the personal data involved",
            ),
            (
                self.risk_assessment_done,
                "Run an AI risk assessment for the intended use",
            ),
            (
                self.audit_trail,
                "Ensure decisions are logged to an auditable trail",
            ),
            (
                self.legal_review,
                "Have legal review the intended deployment",
            ),
        ]
    }
}

/// Score a readiness questionnaire.
pub fn score(inputs: &ReadinessInputs, weights: &ReadinessWeights) -> ReadinessOutputs {
    let category_scores = CategoryScores {
        data: blend(
            checklist_share(&inputs.data.items()),
            weights.data_checklist,
            quality_band(inputs.data_quality),
            weights.data_quality_band,
        ),
        technical: blend(
            checklist_share(&inputs.technical.items()),
            weights.technical_checklist,
            team_band(inputs.team_size),
            weights.team_band,
        ),
        organizational: blend(
            checklist_share(&inputs.organizational.items()),
            weights.organizational_checklist,
            timeline_band(inputs.timeline_weeks),
            weights.timeline_band,
        ),
        compliance: checklist_share(&inputs.compliance.items()),
    };

    let overall = (category_scores.data
        + category_scores.technical
        + category_scores.organizational
        + category_scores.compliance)
        / 4.0;
    let overall_score = overall.round().clamp(0.0, 100.0) as u32;

    let gaps = collect_gaps(inputs);
    let readiness_level = level_for(overall_score, weights);
    log::debug!("readiness {overall_score}/100, {} gaps", gaps.len());

    let penalty_weeks = (gaps.len() as f64 * weights.penalty_weeks_per_gap).round() as u32;

    ReadinessOutputs {
        category_scores,
        overall_score,
        readiness_level,
        recommendations: collect_recommendations(inputs),
        risk_factors: collect_risk_factors(inputs, &gaps),
        estimated_timeline_weeks: inputs.timeline_weeks + penalty_weeks,
        gaps,
    }
}

/// Share of checked items, normalized to 0-100.
fn checklist_share(items: &[(bool, &'static str)]) -> f64 {
    let done = items.iter().filter(|(checked, _)| *checked).count();
    100.0 * done as f64 / items.len() as f64
}

fn blend(checklist: f64, checklist_weight: f64, band: f64, band_weight: f64) -> f64 {
    (checklist * checklist_weight + band * band_weight).clamp(0.0, 100.0)
}

fn quality_band(quality: DataQuality) -> f64 {
    match quality {
        DataQuality::High => 100.0,
        DataQuality::Medium => 60.0,
        DataQuality::Low => 20.0,
    }
}

fn team_band(team_size: u32) -> f64 {
    match team_size {
        0 => 0.0,
        1..=2 => 50.0,
        _ => 100.0, // 3+ is full credit
    }
}

fn timeline_band(weeks: u32) -> f64 {
    match weeks {
        0 => 0.0,
        1..=5 => 30.0,
        6..=11 => 60.0,
        _ => 100.0,
    }
}

fn level_for(overall_score: u32, weights: &ReadinessWeights) -> ReadinessLevel {
    if overall_score >= weights.ready_threshold {
        ReadinessLevel::Ready
    } else if overall_score >= weights.preparation_threshold {
        ReadinessLevel::NeedsPreparation
    } else {
        ReadinessLevel::NotReady
    }
}

fn collect_gaps(inputs: &ReadinessInputs) -> Vec<String> {
    inputs
        .data
        .items()
        .iter()
        .chain(inputs.technical.items().iter())
        .chain(inputs.organizational.items().iter())
        .chain(inputs.compliance.items().iter())
        .filter(|(checked, _)| !checked)
        .map(|(_, action)| (*action).to_string())
        .collect()
}

fn collect_recommendations(inputs: &ReadinessInputs) -> Vec<String> {
    let mut recommendations = Vec::new();

    let data_missing = inputs.data.items().iter().filter(|(c, _)| !c).count();
    if data_missing > 0 || inputs.data_quality == DataQuality::Low {
        recommendations.push(format!(
            "Run a data readiness audit before development starts ({data_missing} checklist items open)"
        ));
    }
    let technical_missing = inputs.technical.items().iter().filter(|(c, _)| !c).count();
    if technical_missing > 0 {
        recommendations.push(
            "Close the platform gaps with a short infrastructure sprint before the pilot"
                .to_string(),
        );
    }
    if !inputs.technical.ml_experience {
        recommendations
            .push("Pair the team with an experienced ML engineer for the first phase".to_string());
    }
    let organizational_missing = inputs
        .organizational
        .items()
        .iter()
        .filter(|(c, _)| !c)
        .count();
    if organizational_missing > 0 {
        recommendations.push(
            "Line up sponsorship, budget and change planning before committing dates".to_string(),
        );
    }
    let compliance_missing = inputs.compliance.items().iter().filter(|(c, _)| !c).count();
    if compliance_missing > 0 {
        recommendations.push(format!(
            "Bring compliance groundwork current ({compliance_missing} items) in parallel with planning"
        ));
    }

    recommendations
}

/// Combinations that compound beyond the sum of their individual gaps.
fn collect_risk_factors(inputs: &ReadinessInputs, gaps: &[String]) -> Vec<String> {
    let mut factors = Vec::new();

    if inputs.data_quality == DataQuality::Low && !inputs.technical.ml_experience {
        factors.push(
            "Low data quality with no in-house ML experience: quality problems will not be \
             caught before they reach production"
                .to_string(),
        );
    }
    if !inputs.organizational.executive_sponsor && !inputs.organizational.budget_allocated {
        factors.push(
            "No sponsor and no budget: the initiative has no owner when priorities collide"
                .to_string(),
        );
    }
    if !inputs.compliance.gdpr_baseline && !inputs.compliance.legal_review {
        factors.push(
            "Neither a GDPR baseline nor legal review: compliance exposure is unquantified"
                .to_string(),
        );
    }
    if inputs.timeline_weeks < 6 && gaps.len() > 4 {
        factors.push(format!(
            "A {}-week timeline with {} open gaps is not realistic",
            inputs.timeline_weeks,
            gaps.len()
        ));
    }

    factors
}
