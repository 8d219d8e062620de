//! Objective and per-persona task entry models.

use serde::{Deserialize, Serialize};

/// The top-level goal being planned.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Objective {
    pub name: String,
    pub description: String,
}

/// What a selected persona should do and how success is judged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TaskEntry {
    pub task: String,
    pub expected_results: String,
}

impl TaskEntry {
    /// Read a single field.
    pub fn get(&self, field: super::TaskField) -> &str {
        match field {
            super::TaskField::Task => &self.task,
            super::TaskField::ExpectedResults => &self.expected_results,
        }
    }

    /// Overwrite a single field.
    pub fn set(&mut self, field: super::TaskField, value: String) {
        match field {
            super::TaskField::Task => self.task = value,
            super::TaskField::ExpectedResults => self.expected_results = value,
        }
    }
}
