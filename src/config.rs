//! Threshold and weight configuration for the advisory calculators.
//!
//! Every cutoff the engine applies lives here with a named `default_*`
//! function, so no stage carries inline magic numbers. All structs are
//! serde-backed: a caller can deserialize a partial override and every
//! omitted field falls back to its documented default.

use serde::{Deserialize, Serialize};

use crate::errors::{AdvisorError, Result};

/// Complete engine configuration, one section per calculator that is tunable.
///
/// The risk classifier's static requirement lists and the architecture
/// catalog are fixed content, not configuration, and live with their stages.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdvisorConfig {
    #[serde(default)]
    pub risk: RiskThresholds,
    #[serde(default)]
    pub roi: RoiThresholds,
    #[serde(default)]
    pub readiness: ReadinessWeights,
}

impl AdvisorConfig {
    /// Validate every section, reporting the first offending field.
    pub fn validate(&self) -> Result<()> {
        self.roi.validate()?;
        self.readiness.validate()
    }
}

/// Scale cutoffs used by the risk classifier when no Annex III trigger fires.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskThresholds {
    /// Affected individuals above which a system is limited-risk rather than
    /// minimal-risk.
    #[serde(default = "default_limited_risk_individuals")]
    pub limited_risk_individuals: u64,

    /// Automated decisions per year above which a system is limited-risk
    /// rather than minimal-risk.
    #[serde(default = "default_limited_risk_decisions")]
    pub limited_risk_decisions: u64,
}

fn default_limited_risk_individuals() -> u64 {
    10_000
}

fn default_limited_risk_decisions() -> u64 {
    50_000
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            limited_risk_individuals: default_limited_risk_individuals(),
            limited_risk_decisions: default_limited_risk_decisions(),
        }
    }
}

/// Confidence bands and warning cutoffs for the ROI calculator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoiThresholds {
    /// Minimum AI success rate (%) for a high-confidence projection.
    #[serde(default = "default_high_confidence_success_rate")]
    pub high_confidence_success_rate: f64,

    /// Maximum human review share (%) for a high-confidence projection.
    #[serde(default = "default_high_confidence_review_percent")]
    pub high_confidence_review_percent: f64,

    /// Success rate (%) below which confidence drops to low.
    #[serde(default = "default_low_confidence_success_rate")]
    pub low_confidence_success_rate: f64,

    /// Human review share (%) above which confidence drops to low.
    #[serde(default = "default_low_confidence_review_percent")]
    pub low_confidence_review_percent: f64,

    /// Success rate (%) below which an accuracy warning is attached.
    #[serde(default = "default_accuracy_warning_success_rate")]
    pub accuracy_warning_success_rate: f64,

    /// Human review share (%) above which a savings-erosion warning is attached.
    #[serde(default = "default_review_warning_percent")]
    pub review_warning_percent: f64,

    /// Break-even horizon (months) beyond which a payback warning is attached.
    #[serde(default = "default_break_even_warning_months")]
    pub break_even_warning_months: f64,
}

fn default_high_confidence_success_rate() -> f64 {
    90.0
}

fn default_high_confidence_review_percent() -> f64 {
    20.0
}

fn default_low_confidence_success_rate() -> f64 {
    70.0
}

fn default_low_confidence_review_percent() -> f64 {
    50.0
}

fn default_accuracy_warning_success_rate() -> f64 {
    80.0
}

fn default_review_warning_percent() -> f64 {
    30.0
}

fn default_break_even_warning_months() -> f64 {
    18.0
}

impl Default for RoiThresholds {
    fn default() -> Self {
        Self {
            high_confidence_success_rate: default_high_confidence_success_rate(),
            high_confidence_review_percent: default_high_confidence_review_percent(),
            low_confidence_success_rate: default_low_confidence_success_rate(),
            low_confidence_review_percent: default_low_confidence_review_percent(),
            accuracy_warning_success_rate: default_accuracy_warning_success_rate(),
            review_warning_percent: default_review_warning_percent(),
            break_even_warning_months: default_break_even_warning_months(),
        }
    }
}

impl RoiThresholds {
    fn validate(&self) -> Result<()> {
        if !is_percent(self.high_confidence_success_rate) {
            return Err(AdvisorError::validation(
                "roi.high_confidence_success_rate",
                "must be between 0 and 100",
            ));
        }
        if !is_percent(self.low_confidence_success_rate) {
            return Err(AdvisorError::validation(
                "roi.low_confidence_success_rate",
                "must be between 0 and 100",
            ));
        }
        if self.low_confidence_success_rate > self.high_confidence_success_rate {
            return Err(AdvisorError::validation(
                "roi.low_confidence_success_rate",
                "must not exceed high_confidence_success_rate",
            ));
        }
        if self.high_confidence_review_percent > self.low_confidence_review_percent {
            return Err(AdvisorError::validation(
                "roi.high_confidence_review_percent",
                "must not exceed low_confidence_review_percent",
            ));
        }
        if self.break_even_warning_months <= 0.0 {
            return Err(AdvisorError::validation(
                "roi.break_even_warning_months",
                "must be positive",
            ));
        }
        Ok(())
    }
}

/// Category blend weights, level cutoffs and the gap penalty used by the
/// readiness scorer.
///
/// Each category blends its checklist share with one band contribution; the
/// two weights must sum to 1.0. The four categories themselves are averaged
/// with equal weight (25% each).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadinessWeights {
    /// Checklist share weight within the data category (band gets the rest).
    #[serde(default = "default_data_checklist_weight")]
    pub data_checklist: f64,

    /// Data-quality band weight within the data category.
    #[serde(default = "default_data_quality_weight")]
    pub data_quality_band: f64,

    /// Checklist share weight within the technical category.
    #[serde(default = "default_technical_checklist_weight")]
    pub technical_checklist: f64,

    /// Team-size band weight within the technical category.
    #[serde(default = "default_team_band_weight")]
    pub team_band: f64,

    /// Checklist share weight within the organizational category.
    #[serde(default = "default_organizational_checklist_weight")]
    pub organizational_checklist: f64,

    /// Timeline band weight within the organizational category.
    #[serde(default = "default_timeline_band_weight")]
    pub timeline_band: f64,

    /// Overall score at or above which the verdict is `ready`.
    #[serde(default = "default_ready_threshold")]
    pub ready_threshold: u32,

    /// Overall score at or above which the verdict is `needs-preparation`.
    #[serde(default = "default_preparation_threshold")]
    pub preparation_threshold: u32,

    /// Weeks added to the user-supplied timeline per open gap.
    #[serde(default = "default_penalty_weeks_per_gap")]
    pub penalty_weeks_per_gap: f64,
}

fn default_data_checklist_weight() -> f64 {
    0.6
}

fn default_data_quality_weight() -> f64 {
    0.4
}

fn default_technical_checklist_weight() -> f64 {
    0.7
}

fn default_team_band_weight() -> f64 {
    0.3
}

fn default_organizational_checklist_weight() -> f64 {
    0.7
}

fn default_timeline_band_weight() -> f64 {
    0.3
}

fn default_ready_threshold() -> u32 {
    70
}

fn default_preparation_threshold() -> u32 {
    40
}

fn default_penalty_weeks_per_gap() -> f64 {
    1.5
}

impl Default for ReadinessWeights {
    fn default() -> Self {
        Self {
            data_checklist: default_data_checklist_weight(),
            data_quality_band: default_data_quality_weight(),
            technical_checklist: default_technical_checklist_weight(),
            team_band: default_team_band_weight(),
            organizational_checklist: default_organizational_checklist_weight(),
            timeline_band: default_timeline_band_weight(),
            ready_threshold: default_ready_threshold(),
            preparation_threshold: default_preparation_threshold(),
            penalty_weeks_per_gap: default_penalty_weeks_per_gap(),
        }
    }
}

impl ReadinessWeights {
    fn validate(&self) -> Result<()> {
        let pairs = [
            ("readiness.data_checklist", self.data_checklist, self.data_quality_band),
            ("readiness.technical_checklist", self.technical_checklist, self.team_band),
            (
                "readiness.organizational_checklist",
                self.organizational_checklist,
                self.timeline_band,
            ),
        ];
        for (field, checklist, band) in pairs {
            if !is_weight(checklist) || !is_weight(band) {
                return Err(AdvisorError::validation(field, "weights must be within 0.0-1.0"));
            }
            if !weights_sum_to_one(checklist, band) {
                return Err(AdvisorError::validation(
                    field,
                    "checklist and band weights must sum to 1.0",
                ));
            }
        }
        if self.preparation_threshold > self.ready_threshold {
            return Err(AdvisorError::validation(
                "readiness.preparation_threshold",
                "must not exceed ready_threshold",
            ));
        }
        if self.ready_threshold > 100 {
            return Err(AdvisorError::validation(
                "readiness.ready_threshold",
                "must be at most 100",
            ));
        }
        if self.penalty_weeks_per_gap < 0.0 {
            return Err(AdvisorError::validation(
                "readiness.penalty_weeks_per_gap",
                "must not be negative",
            ));
        }
        Ok(())
    }
}

// Pure predicates shared by the validators.
fn is_percent(value: f64) -> bool {
    (0.0..=100.0).contains(&value)
}

fn is_weight(value: f64) -> bool {
    (0.0..=1.0).contains(&value)
}

fn weights_sum_to_one(a: f64, b: f64) -> bool {
    ((a + b) - 1.0).abs() < 1e-9
}
