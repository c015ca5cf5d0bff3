//! adoptmap: an AI-adoption advisory engine.
//!
//! Five pure, deterministic calculators behind a user-advanced wizard:
//! EU AI Act risk classification, ROI projection, reference-architecture
//! selection, organizational readiness scoring, and deployment planning.
//! No I/O, no persistence, no side effects; the input/output structs are
//! the entire boundary and serialize as JSON.

// Export modules for library usage
pub mod architecture;
pub mod config;
pub mod core;
pub mod deployment;
pub mod errors;
pub mod readiness;
pub mod risk;
pub mod roi;
pub mod validation;
pub mod wizard;

// Re-export commonly used types
pub use crate::core::{
    BreakEven, ComplexityLevel, ConfidenceLevel, CostRange, DataQuality, DataResidency,
    MonthRange, ReadinessLevel, RiskLevel, RoiProjection, Stage,
};

pub use crate::config::{AdvisorConfig, ReadinessWeights, RiskThresholds, RoiThresholds};

pub use crate::errors::{AdvisorError, Result};

pub use crate::risk::{classify, RiskInputs, RiskOutputs};

pub use crate::roi::{calculate, RoiInputs, RoiOutputs};

pub use crate::architecture::{
    select, ArchitectureInputs, ArchitectureRecommendation, ArchitectureTemplate, Components,
    CostModel,
};

pub use crate::readiness::{
    score, CategoryScores, ComplianceChecklist, DataChecklist, OrganizationalChecklist,
    ReadinessInputs, ReadinessOutputs, TechnicalChecklist,
};

pub use crate::deployment::{generate, DeploymentPlan, Phase, PlanSummary};

pub use crate::wizard::{StageSlot, Wizard, WizardState};
