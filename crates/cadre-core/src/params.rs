//! Parameter structures for wizard intents.
//!
//! These structures are shared by every front end (interactive shell, MCP
//! server) without framework-specific derives. Interface layers wrap or
//! convert into them: the shell builds them from clap arguments, the MCP
//! server deserializes them through a transparent wrapper that adds
//! `JsonSchema` (enabled with the `schema` feature).
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   Shell Args    │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::models::{StepField, TaskField};

/// Parameters for operations requiring just a persona ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Id {
    /// The ID of the persona to operate on
    pub id: u64,
}

/// Parameters for editing the objective. Omitted fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct SetObjective {
    /// New objective name
    pub name: Option<String>,
    /// New objective description
    pub description: Option<String>,
}

/// Parameters for searching the persona catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct SearchPersonas {
    /// Case-insensitive substring matched against names and descriptions
    #[serde(default)]
    pub term: String,
}

/// Parameters for creating a persona. Both fields must be non-empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CreatePersona {
    /// Display name of the persona
    pub name: String,
    /// Role description
    pub description: String,
}

/// Parameters for editing a selected persona's task entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct UpdateTask {
    /// ID of a selected persona
    pub persona_id: u64,
    /// Which field to overwrite (`task` or `expected_results`)
    pub field: TaskField,
    /// New text
    pub value: String,
}

/// Parameters for backward navigation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct GoToStep {
    /// Target wizard step (1, 2 or 3)
    pub step: u8,
}

/// Parameters for editing a generated workplan step in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct EditStep {
    /// 0-based index of the persona plan within the workplan
    pub plan_index: usize,
    /// 0-based index of the step within the persona plan
    pub step_index: usize,
    /// Which field to overwrite (`action` or `duration`)
    pub field: StepField,
    /// New text
    pub value: String,
}

/// Parameters for appending a blank step to a persona plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct AddStep {
    /// 0-based index of the persona plan within the workplan
    pub plan_index: usize,
}
