//! Persona model and the built-in persona catalog.

use serde::{Deserialize, Serialize};

/// Name of the built-in research-retrieval persona.
pub const LAW_LIBRARIAN: &str = "Law Librarian";

/// Name of the built-in analysis persona.
pub const LEGAL_ANALYST: &str = "Legal Analyst";

/// Name of the built-in compliance persona.
pub const COMPLIANCE_OFFICER: &str = "Compliance Officer";

/// A named role description that can be assigned to an objective.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Persona {
    /// Unique identifier, never reused within a catalog
    pub id: u64,

    /// Display name; also the key used for template lookup
    pub name: String,

    /// Free-text description of the role
    pub description: String,
}

impl Persona {
    /// Creates a persona from its parts.
    pub fn new(id: u64, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
        }
    }

    /// Case-insensitive substring match against name or description.
    ///
    /// An empty term matches every persona.
    pub fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.name.to_lowercase().contains(&term) || self.description.to_lowercase().contains(&term)
    }

    /// The three personas every catalog starts with unless configured
    /// otherwise.
    pub fn builtin_catalog() -> Vec<Persona> {
        vec![
            Persona::new(
                1,
                LAW_LIBRARIAN,
                "Specializes in legal research and reference. Has deep knowledge of legal \
                 databases and regulatory repositories. Responsibilities: Collects and \
                 organizes the 2023 and latest versions of 12 CFR 614.4165. Maintains updated \
                 legal materials. Approach: Uses precise search strategies to retrieve \
                 authoritative documents. Prioritizes accuracy and completeness.",
            ),
            Persona::new(
                2,
                LEGAL_ANALYST,
                "Trained in interpreting and applying federal regulations. Understands \
                 statutory language and legislative intent. Responsibilities: Compares \
                 different versions of 12 CFR 614.4165 to identify substantive changes. \
                 Approach: Provides clear, structured summaries of regulatory shifts. \
                 Highlights potential impacts on policy.",
            ),
            Persona::new(
                3,
                COMPLIANCE_OFFICER,
                "Skilled in corporate governance and ensuring adherence to federal \
                 requirements. Responsibilities: Reviews the Legal Analyst's findings. \
                 Determines how new or removed rules affect the firm. Approach: Focuses on \
                 risk mitigation by analyzing each identified change. Develops strategies to \
                 maintain compliance.",
            ),
        ]
    }
}
