//! Static compliance obligations and effort tables per risk level.

use crate::core::{CostRange, MonthRange, RiskLevel};

/// Articles 9-15 obligations for high-risk systems.
const HIGH_RISK_REQUIREMENTS: &[&str] = &[
    "Establish and maintain a risk management system (Article 9)",
    "Prepare technical documentation before market placement (Article 11)",
    "Implement automatic event logging across the system lifetime (Article 12)",
    "Provide instructions for use and transparency to deployers (Article 13)",
    "Design for effective human oversight (Article 14)",
    "Ensure accuracy, robustness and cybersecurity (Article 15)",
    "Complete a conformity assessment before deployment",
    "Register the system in the EU database",
];

const LIMITED_RISK_REQUIREMENTS: &[&str] =
    &["Inform users that they are interacting with an AI system (Article 50 transparency notice)"];

const PROHIBITED_NOTICE: &[&str] =
    &["This system falls under an Article 5 prohibited practice and cannot be deployed in the EU"];

/// Compliance requirement list for a classification level.
pub fn for_level(level: RiskLevel) -> Vec<String> {
    let items: &[&str] = match level {
        RiskLevel::Prohibited => PROHIBITED_NOTICE,
        RiskLevel::HighRisk => HIGH_RISK_REQUIREMENTS,
        RiskLevel::LimitedRisk => LIMITED_RISK_REQUIREMENTS,
        RiskLevel::MinimalRisk => &[],
    };
    items.iter().map(|s| (*s).to_string()).collect()
}

/// Fixed compliance cost and calendar effort ranges per level.
///
/// Prohibited systems get zero ranges: there is nothing to budget for.
pub fn cost_table(level: RiskLevel) -> (CostRange, MonthRange) {
    match level {
        RiskLevel::Prohibited => (CostRange::ZERO, MonthRange::ZERO),
        RiskLevel::HighRisk => (CostRange::new(50_000.0, 200_000.0), MonthRange::new(6, 12)),
        RiskLevel::LimitedRisk => (CostRange::new(5_000.0, 20_000.0), MonthRange::new(1, 3)),
        RiskLevel::MinimalRisk => (CostRange::ZERO, MonthRange::ZERO),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn high_risk_list_covers_oversight_and_documentation() {
        let reqs = for_level(RiskLevel::HighRisk);
        assert!(reqs.iter().any(|r| r.contains("human oversight")));
        assert!(reqs.iter().any(|r| r.contains("technical documentation")));
        assert!(reqs.iter().any(|r| r.contains("risk management")));
    }

    #[test]
    fn limited_risk_gets_transparency_only() {
        let reqs = for_level(RiskLevel::LimitedRisk);
        assert_eq!(reqs.len(), 1);
        assert!(reqs[0].contains("transparency"));
    }

    #[test]
    fn cost_ranges_are_ordered() {
        for level in [
            RiskLevel::Prohibited,
            RiskLevel::HighRisk,
            RiskLevel::LimitedRisk,
            RiskLevel::MinimalRisk,
        ] {
            let (cost, time) = cost_table(level);
            assert!(cost.low <= cost.high);
            assert!(time.low <= time.high);
        }
    }
}
