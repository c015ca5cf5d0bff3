//! The user-advanced wizard pipeline.
//!
//! [`WizardState`] holds one `{inputs, outputs}` slot per stage and is the
//! JSON session boundary. [`Wizard`] wraps it with the sequencing contract:
//! stages run in `risk -> roi -> architecture -> readiness -> deployment`
//! order, each slot is populated exactly once per session, and a prohibited
//! classification short-circuits everything downstream. `reset()` discards
//! the state; nothing here persists it.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::architecture::{ArchitectureInputs, ArchitectureRecommendation};
use crate::config::AdvisorConfig;
use crate::core::{RiskLevel, Stage};
use crate::deployment::{self, DeploymentPlan};
use crate::errors::{AdvisorError, Result};
use crate::readiness::{ReadinessInputs, ReadinessOutputs};
use crate::risk::{RiskInputs, RiskOutputs};
use crate::roi::{RoiInputs, RoiOutputs};
use crate::validation;

/// A completed stage: the inputs the user confirmed and the outputs computed
/// from them in the same submit call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StageSlot<I, O> {
    pub inputs: I,
    pub outputs: O,
}

/// Everything the wizard has computed so far. Serializable as JSON; discarded
/// on reset or session end.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WizardState {
    pub risk: Option<StageSlot<RiskInputs, RiskOutputs>>,
    pub roi: Option<StageSlot<RoiInputs, RoiOutputs>>,
    pub architecture: Option<StageSlot<ArchitectureInputs, Vector<ArchitectureRecommendation>>>,
    pub readiness: Option<StageSlot<ReadinessInputs, ReadinessOutputs>>,
    pub deployment: Option<DeploymentPlan>,
}

impl WizardState {
    pub fn risk_outputs(&self) -> Option<&RiskOutputs> {
        self.risk.as_ref().map(|slot| &slot.outputs)
    }

    pub fn roi_outputs(&self) -> Option<&RoiOutputs> {
        self.roi.as_ref().map(|slot| &slot.outputs)
    }

    pub fn architecture_outputs(&self) -> Option<&Vector<ArchitectureRecommendation>> {
        self.architecture.as_ref().map(|slot| &slot.outputs)
    }

    pub fn readiness_outputs(&self) -> Option<&ReadinessOutputs> {
        self.readiness.as_ref().map(|slot| &slot.outputs)
    }

    /// Whether the risk stage classified the system as prohibited.
    pub fn is_prohibited(&self) -> bool {
        self.risk_outputs()
            .is_some_and(|outputs| outputs.classification == RiskLevel::Prohibited)
    }
}

/// Stateful driver for one advisory session.
pub struct Wizard {
    config: AdvisorConfig,
    state: WizardState,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

impl Wizard {
    /// Start a session with the default thresholds.
    pub fn new() -> Self {
        Self {
            config: AdvisorConfig::default(),
            state: WizardState::default(),
        }
    }

    /// Start a session with custom thresholds; the configuration is validated
    /// up front so a bad override cannot skew a later stage silently.
    pub fn with_config(config: AdvisorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            state: WizardState::default(),
        })
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    /// Discard all stage slots and start over.
    pub fn reset(&mut self) {
        self.state = WizardState::default();
    }

    /// Submit the risk questionnaire and classify the system.
    pub fn submit_risk(&mut self, inputs: RiskInputs) -> Result<&RiskOutputs> {
        self.ensure_unsubmitted(Stage::Risk, self.state.risk.is_some())?;
        let outputs = crate::risk::classify(&inputs, &self.config.risk);
        let slot = self.state.risk.insert(StageSlot { inputs, outputs });
        Ok(&slot.outputs)
    }

    /// Submit the cost parameters and project the ROI.
    pub fn submit_roi(&mut self, inputs: RoiInputs) -> Result<&RoiOutputs> {
        self.ensure_unsubmitted(Stage::Roi, self.state.roi.is_some())?;
        self.ensure_upstream(Stage::Roi, self.state.risk.is_some(), "risk")?;
        self.ensure_not_prohibited(Stage::Roi)?;
        validation::validate_roi_inputs(&inputs)?;
        let outputs = crate::roi::calculate(&inputs, &self.config.roi);
        let slot = self.state.roi.insert(StageSlot { inputs, outputs });
        Ok(&slot.outputs)
    }

    /// Submit the constraints and rank the architecture catalog.
    pub fn submit_architecture(
        &mut self,
        inputs: ArchitectureInputs,
    ) -> Result<&Vector<ArchitectureRecommendation>> {
        self.ensure_unsubmitted(Stage::Architecture, self.state.architecture.is_some())?;
        self.ensure_upstream(Stage::Architecture, self.state.roi.is_some(), "roi")?;
        self.ensure_not_prohibited(Stage::Architecture)?;
        validation::validate_architecture_inputs(&inputs)?;
        let outputs = crate::architecture::select(&inputs);
        let slot = self.state.architecture.insert(StageSlot { inputs, outputs });
        Ok(&slot.outputs)
    }

    /// Submit the readiness questionnaire and score it.
    pub fn submit_readiness(&mut self, inputs: ReadinessInputs) -> Result<&ReadinessOutputs> {
        self.ensure_unsubmitted(Stage::Readiness, self.state.readiness.is_some())?;
        self.ensure_upstream(
            Stage::Readiness,
            self.state.architecture.is_some(),
            "architecture",
        )?;
        self.ensure_not_prohibited(Stage::Readiness)?;
        let outputs = crate::readiness::score(&inputs, &self.config.readiness);
        let slot = self.state.readiness.insert(StageSlot { inputs, outputs });
        Ok(&slot.outputs)
    }

    /// Generate the deployment plan from the four completed stages.
    pub fn generate_plan(&mut self) -> Result<&DeploymentPlan> {
        self.ensure_unsubmitted(Stage::Deployment, self.state.deployment.is_some())?;
        let plan = deployment::generate(&self.state)?;
        Ok(self.state.deployment.insert(plan))
    }

    fn ensure_unsubmitted(&self, stage: Stage, already: bool) -> Result<()> {
        if already {
            return Err(AdvisorError::sequencing(
                stage,
                "outputs are populated exactly once per session; reset() to start over",
            ));
        }
        Ok(())
    }

    fn ensure_upstream(&self, stage: Stage, present: bool, upstream: &str) -> Result<()> {
        if !present {
            return Err(AdvisorError::sequencing(
                stage,
                format!("{upstream} outputs missing"),
            ));
        }
        Ok(())
    }

    fn ensure_not_prohibited(&self, stage: Stage) -> Result<()> {
        if self.state.is_prohibited() {
            return Err(AdvisorError::sequencing(
                stage,
                "the system is classified prohibited; the wizard is short-circuited",
            ));
        }
        Ok(())
    }
}
