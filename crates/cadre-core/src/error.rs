//! Error types for the wizard library.

use std::path::PathBuf;

use thiserror::Error;

use crate::models::WizardStep;

/// Error type for every rejected wizard intent and catalog operation.
#[derive(Error, Debug)]
pub enum WizardError {
    /// Persona id is not present in the catalog
    #[error("Persona with ID {id} not found")]
    PersonaNotFound { id: u64 },
    /// A selected persona has no task entry
    #[error("Persona with ID {id} has no task entry")]
    MissingTaskEntry { id: u64 },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Forward transition refused by a gate
    #[error("Cannot advance: {reason}")]
    StepGate { reason: String },
    /// Navigation that is not a single backward move
    #[error("Cannot move from step {from} to step {to}")]
    InvalidTransition { from: WizardStep, to: WizardStep },
    /// Workplan-editing intent issued before generation
    #[error("No workplan has been generated yet")]
    NoWorkplan,
    /// Persona plan index outside the generated workplan
    #[error("Persona plan index {index} out of range (workplan has {len} plans)")]
    PlanIndexOutOfRange { index: usize, len: usize },
    /// Step index outside a persona plan
    #[error("Step index {index} out of range (plan has {len} steps)")]
    StepIndexOutOfRange { index: usize, len: usize },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> WizardError {
        WizardError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl WizardError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a gate rejection for a forward transition.
    pub fn gate(reason: impl Into<String>) -> Self {
        WizardError::StepGate {
            reason: reason.into(),
        }
    }

    /// Whether the error stems from the caller's request rather than the
    /// environment (files, encoding).
    pub fn is_caller_error(&self) -> bool {
        !matches!(
            self,
            WizardError::FileSystem { .. } | WizardError::Serialization { .. }
        )
    }
}

/// Result type alias for wizard operations
pub type Result<T> = std::result::Result<T, WizardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_builder() {
        let err = WizardError::invalid_input("name").with_reason("must not be empty");
        assert_eq!(
            err.to_string(),
            "Invalid input for field 'name': must not be empty"
        );
        assert!(err.is_caller_error());
    }

    #[test]
    fn test_transition_message_uses_step_numbers() {
        let err = WizardError::InvalidTransition {
            from: WizardStep::Objective,
            to: WizardStep::Review,
        };
        assert_eq!(err.to_string(), "Cannot move from step 1 to step 3");
    }

    #[test]
    fn test_environment_errors_are_not_caller_errors() {
        let err = WizardError::FileSystem {
            path: PathBuf::from("catalog.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(!err.is_caller_error());
    }
}
