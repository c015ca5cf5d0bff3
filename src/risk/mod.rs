//! EU AI Act risk classification.
//!
//! Article 5 prohibited practices are checked first, in fixed priority order;
//! the first hit short-circuits everything downstream. Otherwise all eight
//! Annex III high-risk triggers are collected, and systems with none fall to
//! limited- or minimal-risk on the scale cutoffs in
//! [`RiskThresholds`](crate::config::RiskThresholds).

pub mod requirements;

use serde::{Deserialize, Serialize};

use crate::config::RiskThresholds;
use crate::core::{CostRange, MonthRange, RiskLevel};

/// Checklist answers and scale figures for one AI system.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskInputs {
    // Article 5 prohibited practices, in classification priority order.
    pub biometric_identification: bool,
    pub social_scoring: bool,
    pub manipulative_techniques: bool,
    pub exploits_vulnerabilities: bool,

    // Annex III high-risk domains.
    pub critical_infrastructure: bool,
    pub education_scoring: bool,
    pub employment_decisions: bool,
    pub essential_services: bool,
    pub law_enforcement: bool,
    pub migration_control: bool,
    pub justice_administration: bool,
    pub democratic_processes: bool,

    // Scale of use.
    pub decisions_per_year: u64,
    pub affected_individuals: u64,
}

/// Classification result with the obligations that follow from it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RiskOutputs {
    pub classification: RiskLevel,
    /// Set only for prohibited systems; names the first Article 5 practice hit.
    pub prohibition_reason: Option<String>,
    /// Every Annex III criterion that fired, in declaration order.
    pub triggered_criteria: Vec<String>,
    pub compliance_requirements: Vec<String>,
    pub estimated_compliance_cost: CostRange,
    pub estimated_time_months: MonthRange,
}

/// Article 5 practices in priority order. The first true flag wins.
fn prohibited_practices(inputs: &RiskInputs) -> [(bool, &'static str); 4] {
    [
        (
            inputs.biometric_identification,
            "Real-time remote biometric identification in public spaces",
        ),
        (inputs.social_scoring, "Social scoring of natural persons"),
        (
            inputs.manipulative_techniques,
            "Subliminal or purposefully manipulative techniques",
        ),
        (
            inputs.exploits_vulnerabilities,
            "Exploitation of vulnerabilities of specific groups",
        ),
    ]
}

/// Annex III criteria, each paired with its canonical label.
fn high_risk_criteria(inputs: &RiskInputs) -> [(bool, &'static str); 8] {
    [
        (
            inputs.critical_infrastructure,
            "Critical infrastructure safety component",
        ),
        (
            inputs.education_scoring,
            "Education or vocational training assessment",
        ),
        (
            inputs.employment_decisions,
            "Employment, worker management or self-employment access",
        ),
        (
            inputs.essential_services,
            "Access to essential private or public services",
        ),
        (inputs.law_enforcement, "Law enforcement use"),
        (
            inputs.migration_control,
            "Migration, asylum or border control management",
        ),
        (
            inputs.justice_administration,
            "Administration of justice support",
        ),
        (
            inputs.democratic_processes,
            "Influence on elections or voting behaviour",
        ),
    ]
}

/// Classify an AI system under the EU AI Act. Total function, no errors.
pub fn classify(inputs: &RiskInputs, thresholds: &RiskThresholds) -> RiskOutputs {
    if let Some((_, reason)) = prohibited_practices(inputs).iter().find(|(hit, _)| *hit) {
        log::debug!("prohibited practice detected: {reason}");
        return RiskOutputs {
            classification: RiskLevel::Prohibited,
            prohibition_reason: Some((*reason).to_string()),
            triggered_criteria: Vec::new(),
            compliance_requirements: requirements::for_level(RiskLevel::Prohibited),
            estimated_compliance_cost: CostRange::ZERO,
            estimated_time_months: MonthRange::ZERO,
        };
    }

    let triggered: Vec<String> = high_risk_criteria(inputs)
        .iter()
        .filter(|(hit, _)| *hit)
        .map(|(_, label)| (*label).to_string())
        .collect();

    let classification = if !triggered.is_empty() {
        RiskLevel::HighRisk
    } else if inputs.affected_individuals > thresholds.limited_risk_individuals
        || inputs.decisions_per_year > thresholds.limited_risk_decisions
    {
        RiskLevel::LimitedRisk
    } else {
        RiskLevel::MinimalRisk
    };
    log::debug!(
        "classified as {classification} ({} Annex III triggers)",
        triggered.len()
    );

    let (cost, time) = requirements::cost_table(classification);
    RiskOutputs {
        classification,
        prohibition_reason: None,
        triggered_criteria: triggered,
        compliance_requirements: requirements::for_level(classification),
        estimated_compliance_cost: cost,
        estimated_time_months: time,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn thresholds() -> RiskThresholds {
        RiskThresholds::default()
    }

    #[test]
    fn biometric_identification_is_prohibited() {
        let inputs = RiskInputs {
            biometric_identification: true,
            ..Default::default()
        };
        let outputs = classify(&inputs, &thresholds());
        assert_eq!(outputs.classification, RiskLevel::Prohibited);
        assert!(outputs
            .prohibition_reason
            .as_deref()
            .unwrap()
            .contains("biometric"));
    }

    #[test]
    fn prohibition_reason_uses_priority_order() {
        // All four flags set: the reason names the highest-priority practice.
        let inputs = RiskInputs {
            biometric_identification: true,
            social_scoring: true,
            manipulative_techniques: true,
            exploits_vulnerabilities: true,
            ..Default::default()
        };
        let outputs = classify(&inputs, &thresholds());
        assert_eq!(
            outputs.prohibition_reason.as_deref(),
            Some("Real-time remote biometric identification in public spaces")
        );
    }

    #[test]
    fn prohibited_skips_high_risk_scoring() {
        let inputs = RiskInputs {
            social_scoring: true,
            critical_infrastructure: true,
            law_enforcement: true,
            ..Default::default()
        };
        let outputs = classify(&inputs, &thresholds());
        assert_eq!(outputs.classification, RiskLevel::Prohibited);
        assert!(outputs.triggered_criteria.is_empty());
        assert_eq!(outputs.estimated_compliance_cost, CostRange::ZERO);
    }

    #[test]
    fn critical_infrastructure_alone_is_high_risk() {
        let inputs = RiskInputs {
            critical_infrastructure: true,
            ..Default::default()
        };
        let outputs = classify(&inputs, &thresholds());
        assert_eq!(outputs.classification, RiskLevel::HighRisk);
        assert_eq!(
            outputs.triggered_criteria,
            vec!["Critical infrastructure safety component".to_string()]
        );
    }

    #[test]
    fn every_true_annex_trigger_is_listed() {
        let inputs = RiskInputs {
            education_scoring: true,
            employment_decisions: true,
            migration_control: true,
            ..Default::default()
        };
        let outputs = classify(&inputs, &thresholds());
        assert_eq!(outputs.classification, RiskLevel::HighRisk);
        assert_eq!(outputs.triggered_criteria.len(), 3);
    }

    #[test]
    fn scale_pushes_minimal_to_limited() {
        let base = RiskInputs {
            affected_individuals: 10_000,
            decisions_per_year: 50_000,
            ..Default::default()
        };
        // At the cutoffs: still minimal.
        assert_eq!(
            classify(&base, &thresholds()).classification,
            RiskLevel::MinimalRisk
        );

        let over_individuals = RiskInputs {
            affected_individuals: 10_001,
            ..base.clone()
        };
        assert_eq!(
            classify(&over_individuals, &thresholds()).classification,
            RiskLevel::LimitedRisk
        );

        let over_decisions = RiskInputs {
            decisions_per_year: 50_001,
            ..base
        };
        assert_eq!(
            classify(&over_decisions, &thresholds()).classification,
            RiskLevel::LimitedRisk
        );
    }

    #[test]
    fn high_risk_carries_cost_and_time_ranges() {
        let inputs = RiskInputs {
            essential_services: true,
            ..Default::default()
        };
        let outputs = classify(&inputs, &thresholds());
        assert!(outputs.estimated_compliance_cost.low > 0.0);
        assert!(outputs.estimated_compliance_cost.high > outputs.estimated_compliance_cost.low);
        assert!(outputs.estimated_time_months.high >= outputs.estimated_time_months.low);
        assert!(!outputs.compliance_requirements.is_empty());
    }

    #[test]
    fn minimal_risk_has_no_requirements() {
        let outputs = classify(&RiskInputs::default(), &thresholds());
        assert_eq!(outputs.classification, RiskLevel::MinimalRisk);
        assert!(outputs.compliance_requirements.is_empty());
        assert_eq!(outputs.estimated_compliance_cost, CostRange::ZERO);
    }
}
