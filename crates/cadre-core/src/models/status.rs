//! Wizard step indicator and field selectors.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The three screens of the wizard.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Default)]
#[serde(rename_all = "lowercase")]
pub enum WizardStep {
    /// Step 1: objective details and persona selection
    #[default]
    Objective,

    /// Step 2: task and expected results per persona
    Tasks,

    /// Step 3: generated workplan review and editing
    Review,
}

impl WizardStep {
    /// 1-based position of the step.
    pub fn number(self) -> u8 {
        match self {
            WizardStep::Objective => 1,
            WizardStep::Tasks => 2,
            WizardStep::Review => 3,
        }
    }

    /// Look a step up by its 1-based position.
    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(WizardStep::Objective),
            2 => Some(WizardStep::Tasks),
            3 => Some(WizardStep::Review),
            _ => None,
        }
    }

    /// The step directly before this one, if any.
    pub fn previous(self) -> Option<Self> {
        match self {
            WizardStep::Objective => None,
            WizardStep::Tasks => Some(WizardStep::Objective),
            WizardStep::Review => Some(WizardStep::Tasks),
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            WizardStep::Objective => "Objective & Personas",
            WizardStep::Tasks => "Tasks & Expected Results",
            WizardStep::Review => "Workplan",
        }
    }
}

impl FromStr for WizardStep {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "1" | "objective" => Ok(WizardStep::Objective),
            "2" | "tasks" => Ok(WizardStep::Tasks),
            "3" | "review" | "workplan" => Ok(WizardStep::Review),
            _ => Err(format!("Invalid wizard step: {s}")),
        }
    }
}

/// Editable fields of a task entry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum TaskField {
    Task,
    ExpectedResults,
}

impl FromStr for TaskField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "task" => Ok(TaskField::Task),
            "results" | "expected_results" | "expectedresults" => Ok(TaskField::ExpectedResults),
            _ => Err(format!("Invalid task field: {s}")),
        }
    }
}

/// Editable fields of a generated workplan step.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum StepField {
    Action,
    Duration,
}

impl FromStr for StepField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "action" => Ok(StepField::Action),
            "duration" | "duration_label" => Ok(StepField::Duration),
            _ => Err(format!("Invalid step field: {s}")),
        }
    }
}
