//! Reference-architecture selection.
//!
//! A fixed catalog of LLM/vector-store/orchestration combinations is filtered
//! against budget, data-residency and team-skill constraints, then ranked
//! cheapest-first. An empty result is returned as-is: relaxing constraints is
//! a presentation decision, not engine behavior.

pub mod catalog;

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{ComplexityLevel, DataResidency};

/// Constraints the candidate architectures are filtered against.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArchitectureInputs {
    pub budget_per_month: f64,
    pub volume_queries_per_month: u64,
    pub data_residency: DataResidency,
    /// Skill tags present on the team. Empty means "no constraint".
    pub team_skills: Vec<String>,
}

/// The moving parts of one reference architecture.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Components {
    pub llm: String,
    pub vector_db: String,
    pub orchestration: String,
}

/// Linear cost model: a fixed platform fee plus a per-query rate.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CostModel {
    pub base_per_month: f64,
    pub per_query: f64,
}

impl CostModel {
    /// Estimated monthly cost at the given query volume.
    pub fn monthly_cost(&self, volume_queries_per_month: u64) -> f64 {
        self.base_per_month + self.per_query * volume_queries_per_month as f64
    }
}

/// One catalog entry: a predefined stack with its constraints and cost model.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArchitectureTemplate {
    pub name: String,
    pub description: String,
    pub complexity: ComplexityLevel,
    pub components: Components,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    pub code_example: String,
    /// Residency the stack can guarantee. `Any` means deployer-chosen region.
    pub residency: DataResidency,
    /// Skills a team needs to run this stack. Matching is case-insensitive.
    pub required_skills: Vec<String>,
    pub cost_model: CostModel,
}

impl ArchitectureTemplate {
    /// Estimated monthly cost of this template at the given volume.
    pub fn monthly_cost(&self, volume_queries_per_month: u64) -> f64 {
        self.cost_model.monthly_cost(volume_queries_per_month)
    }

    fn matches_skills(&self, team_skills: &[String]) -> bool {
        team_skills.is_empty()
            || self.required_skills.iter().any(|required| {
                team_skills
                    .iter()
                    .any(|have| have.eq_ignore_ascii_case(required))
            })
    }

    fn recommend(&self, volume_queries_per_month: u64) -> ArchitectureRecommendation {
        ArchitectureRecommendation {
            name: self.name.clone(),
            description: self.description.clone(),
            complexity: self.complexity,
            components: self.components.clone(),
            pros: self.pros.clone(),
            cons: self.cons.clone(),
            code_example: self.code_example.clone(),
            cost_model: self.cost_model,
            estimated_monthly_cost: self.monthly_cost(volume_queries_per_month),
        }
    }
}

/// A catalog entry that survived filtering, with its cost at the input volume.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArchitectureRecommendation {
    pub name: String,
    pub description: String,
    pub complexity: ComplexityLevel,
    pub components: Components,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    pub code_example: String,
    pub cost_model: CostModel,
    pub estimated_monthly_cost: f64,
}

/// Filter and rank the catalog against the given constraints.
///
/// Survivors are sorted ascending by estimated cost, ties broken by ascending
/// complexity. The result may be empty.
pub fn select(inputs: &ArchitectureInputs) -> Vector<ArchitectureRecommendation> {
    let mut survivors: Vec<ArchitectureRecommendation> = catalog::templates()
        .iter()
        .filter(|template| {
            template.monthly_cost(inputs.volume_queries_per_month) <= inputs.budget_per_month
                && template.residency.satisfies(inputs.data_residency)
                && template.matches_skills(&inputs.team_skills)
        })
        .map(|template| template.recommend(inputs.volume_queries_per_month))
        .collect();

    survivors.sort_by(|a, b| {
        a.estimated_monthly_cost
            .total_cmp(&b.estimated_monthly_cost)
            .then(a.complexity.cmp(&b.complexity))
    });
    log::debug!(
        "{} of {} catalog templates fit the constraints",
        survivors.len(),
        catalog::templates().len()
    );
    Vector::from(survivors)
}
