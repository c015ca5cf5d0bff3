//! Shared value types for the advisory pipeline.
//!
//! Every type here crosses the engine boundary and is serializable as JSON;
//! all of them are immutable value types with no behavior beyond accessors.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Pipeline stage identifier, in invocation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Stage {
    Risk,
    Roi,
    Architecture,
    Readiness,
    Deployment,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Risk => "risk",
            Stage::Roi => "roi",
            Stage::Architecture => "architecture",
            Stage::Readiness => "readiness",
            Stage::Deployment => "deployment",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// EU AI Act risk classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    /// Article 5 prohibited practice - the system cannot be deployed
    #[serde(rename = "prohibited")]
    Prohibited,
    /// Annex III high-risk domain - full conformity obligations apply
    #[serde(rename = "high-risk")]
    HighRisk,
    /// Scale triggers transparency obligations only
    #[serde(rename = "limited-risk")]
    LimitedRisk,
    /// No specific obligations
    #[serde(rename = "minimal-risk")]
    MinimalRisk,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Prohibited => "prohibited",
            RiskLevel::HighRisk => "high-risk",
            RiskLevel::LimitedRisk => "limited-risk",
            RiskLevel::MinimalRisk => "minimal-risk",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Confidence rating attached to an ROI projection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
}

/// Operational complexity of a reference architecture.
///
/// Ordering is `Low < Medium < High`; the selector uses it as a tie-breaker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComplexityLevel {
    Low,
    Medium,
    High,
}

/// Where query data is allowed to be processed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataResidency {
    Eu,
    Us,
    Any,
}

impl DataResidency {
    /// Whether an architecture tagged `self` satisfies the requirement `required`.
    ///
    /// Self-hosted templates carry `Any` and satisfy every requirement, since
    /// the deployer chooses the region.
    pub fn satisfies(&self, required: DataResidency) -> bool {
        matches!(required, DataResidency::Any)
            || matches!(self, DataResidency::Any)
            || *self == required
    }
}

/// Self-assessed quality of the data estate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataQuality {
    High,
    Medium,
    Low,
}

/// Overall organizational readiness verdict.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReadinessLevel {
    Ready,
    NeedsPreparation,
    NotReady,
}

impl ReadinessLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReadinessLevel::Ready => "ready",
            ReadinessLevel::NeedsPreparation => "needs-preparation",
            ReadinessLevel::NotReady => "not-ready",
        }
    }
}

/// Break-even point for the implementation cost.
///
/// A tagged type rather than a large-float sentinel: `Never` means monthly
/// savings are zero or negative and the cost is never recovered.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BreakEven {
    Months(f64),
    Never,
}

impl BreakEven {
    pub fn months(&self) -> Option<f64> {
        match self {
            BreakEven::Months(m) => Some(*m),
            BreakEven::Never => None,
        }
    }

    pub fn is_never(&self) -> bool {
        matches!(self, BreakEven::Never)
    }
}

/// First-year return on the implementation cost.
///
/// `NoInvestment` tags the zero-implementation-cost case where the percentage
/// is undefined; it is never reported as zero or NaN.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoiProjection {
    Percent(f64),
    NoInvestment,
}

impl RoiProjection {
    pub fn percent(&self) -> Option<f64> {
        match self {
            RoiProjection::Percent(p) => Some(*p),
            RoiProjection::NoInvestment => None,
        }
    }
}

/// Inclusive low/high money range, in euro.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CostRange {
    pub low: f64,
    pub high: f64,
}

impl CostRange {
    pub const ZERO: CostRange = CostRange {
        low: 0.0,
        high: 0.0,
    };

    pub const fn new(low: f64, high: f64) -> Self {
        CostRange { low, high }
    }
}

/// Inclusive low/high duration range, in months.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthRange {
    pub low: u32,
    pub high: u32,
}

impl MonthRange {
    pub const ZERO: MonthRange = MonthRange { low: 0, high: 0 };

    pub const fn new(low: u32, high: u32) -> Self {
        MonthRange { low, high }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_order_matches_invocation_contract() {
        assert!(Stage::Risk < Stage::Roi);
        assert!(Stage::Roi < Stage::Architecture);
        assert!(Stage::Architecture < Stage::Readiness);
        assert!(Stage::Readiness < Stage::Deployment);
    }

    #[test]
    fn complexity_orders_low_to_high() {
        assert!(ComplexityLevel::Low < ComplexityLevel::Medium);
        assert!(ComplexityLevel::Medium < ComplexityLevel::High);
    }

    #[test]
    fn any_residency_satisfies_all_requirements() {
        assert!(DataResidency::Any.satisfies(DataResidency::Eu));
        assert!(DataResidency::Eu.satisfies(DataResidency::Any));
        assert!(DataResidency::Eu.satisfies(DataResidency::Eu));
        assert!(!DataResidency::Us.satisfies(DataResidency::Eu));
    }

    #[test]
    fn break_even_never_has_no_months() {
        assert_eq!(BreakEven::Never.months(), None);
        assert_eq!(BreakEven::Months(4.5).months(), Some(4.5));
    }

    #[test]
    fn risk_level_serializes_kebab_case() {
        let json = serde_json::to_string(&RiskLevel::HighRisk).unwrap();
        assert_eq!(json, "\"high-risk\"");
        let json = serde_json::to_string(&RiskLevel::MinimalRisk).unwrap();
        assert_eq!(json, "\"minimal-risk\"");
    }
}
