//! Generated workplan models.
//!
//! A [`Workplan`] exclusively owns its [`PersonaPlan`]s, which exclusively own
//! their [`WorkplanStep`]s. Once generated, none of them refer back to the
//! catalog or the task entries they were derived from.

use serde::{Deserialize, Serialize};

use super::{Objective, StepField};

/// Duration label given to steps appended after generation.
pub const DEFAULT_STEP_DURATION: &str = "1 hour";

/// A single timed step in a persona's plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorkplanStep {
    /// 1-based number assigned when the step was created
    #[serde(rename = "step")]
    pub step_number: u32,

    /// What to do
    pub action: String,

    /// Free-text duration such as "2 hours"
    #[serde(rename = "duration")]
    pub duration_label: String,
}

impl WorkplanStep {
    pub fn new(step_number: u32, action: impl Into<String>, duration: impl Into<String>) -> Self {
        Self {
            step_number,
            action: action.into(),
            duration_label: duration.into(),
        }
    }

    /// Overwrite a single editable field.
    pub fn set(&mut self, field: StepField, value: String) {
        match field {
            StepField::Action => self.action = value,
            StepField::Duration => self.duration_label = value,
        }
    }
}

/// The steps generated for one selected persona.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PersonaPlan {
    #[serde(rename = "persona")]
    pub persona_name: String,

    #[serde(rename = "description")]
    pub persona_description: String,

    pub task: String,

    pub expected_results: String,

    #[serde(rename = "workplan")]
    pub steps: Vec<WorkplanStep>,
}

impl PersonaPlan {
    /// Appends an empty step numbered `len + 1`.
    ///
    /// The number is derived from the current step count, not from the
    /// largest existing step number.
    pub fn push_blank_step(&mut self) -> &WorkplanStep {
        let number = u32::try_from(self.steps.len()).map_or(u32::MAX, |n| n.saturating_add(1));
        self.steps
            .push(WorkplanStep::new(number, String::new(), DEFAULT_STEP_DURATION));
        &self.steps[self.steps.len() - 1]
    }
}

/// The complete generated plan: an objective snapshot and one plan per
/// selected persona, in selection order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Workplan {
    pub objective: Objective,
    pub persona_plans: Vec<PersonaPlan>,
}

impl Workplan {
    /// Total number of steps across all persona plans.
    pub fn total_steps(&self) -> usize {
        self.persona_plans.iter().map(|p| p.steps.len()).sum()
    }
}
