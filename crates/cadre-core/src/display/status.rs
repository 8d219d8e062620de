//! Status and confirmation message types for intent feedback.

use std::fmt;

/// Outcome of an intent that does not return a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    /// The intent was valid but left the session as it was
    Unchanged,
    Failure,
}

/// Wrapper type for displaying confirmation messages for intents that do not
/// return a resource (selection changes, navigation, field edits).
pub struct OperationStatus {
    pub message: String,
    pub kind: StatusKind,
}

impl OperationStatus {
    /// Create a new success status.
    pub fn success(message: String) -> Self {
        Self {
            message,
            kind: StatusKind::Success,
        }
    }

    /// Create a status for a tolerated no-op.
    pub fn unchanged(message: String) -> Self {
        Self {
            message,
            kind: StatusKind::Unchanged,
        }
    }

    /// Create a new failure status.
    pub fn failure(message: String) -> Self {
        Self {
            message,
            kind: StatusKind::Failure,
        }
    }

    /// Success if `changed`, otherwise a neutral note carrying `unchanged`.
    pub fn from_change(changed: bool, message: String, unchanged: String) -> Self {
        if changed {
            Self::success(message)
        } else {
            Self::unchanged(unchanged)
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self.kind {
            StatusKind::Success => "Success:",
            StatusKind::Unchanged => "Note:",
            StatusKind::Failure => "Error:",
        };
        writeln!(f, "{label} {}", self.message)
    }
}
