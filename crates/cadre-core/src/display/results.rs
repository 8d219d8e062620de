//! Result wrapper types for displaying intent outcomes.

use std::fmt;

use crate::models::{Persona, WorkplanStep};

/// Wrapper type for displaying the result of create operations.
///
/// # Examples
///
/// ```rust
/// use cadre_core::{display::CreateResult, models::Persona};
///
/// let result = CreateResult::new(Persona::new(4, "Auditor", "Checks the books"));
/// println!("{}", result);
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<Persona> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created persona with ID: {} (selected)", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for CreateResult<WorkplanStep> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Added step {}", self.resource.step_number)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of update operations, optionally
/// listing what changed.
///
/// # Examples
///
/// ```rust
/// use cadre_core::{display::UpdateResult, models::WorkplanStep};
///
/// let step = WorkplanStep::new(2, "Pull the 2023 text", "3 hours");
/// let result = UpdateResult::with_changes(step, vec!["Updated action".to_string()]);
/// assert!(result.to_string().contains("Changes made:"));
/// ```
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    /// Create a new UpdateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            changes: Vec::new(),
        }
    }

    /// Create an UpdateResult with specific changes listed.
    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }
}

impl fmt::Display for UpdateResult<WorkplanStep> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated step {}", self.resource.step_number)?;
        writeln!(f)?;

        if !self.changes.is_empty() {
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
            writeln!(f)?;
        }

        write!(f, "{}", self.resource)
    }
}
