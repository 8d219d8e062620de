//! Collection wrapper types for displaying groups of personas.

use std::{fmt, ops::Index};

use crate::models::Persona;

/// Newtype wrapper for displaying a list of personas.
///
/// Handles empty collections gracefully.
///
/// # Examples
///
/// ```rust
/// use cadre_core::{display::Personas, models::Persona};
///
/// let personas = Personas(Persona::builtin_catalog());
/// assert_eq!(personas.len(), 3);
/// assert!(personas.to_string().contains("### 2. Legal Analyst"));
///
/// assert_eq!(Personas(vec![]).to_string(), "No personas found.\n");
/// ```
pub struct Personas(pub Vec<Persona>);

impl Personas {
    /// Collect clones of borrowed personas, e.g. search results.
    pub fn from_refs<'a>(personas: impl IntoIterator<Item = &'a Persona>) -> Self {
        Self(personas.into_iter().cloned().collect())
    }

    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of personas in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get a reference to the persona at the given index.
    pub fn get(&self, index: usize) -> Option<&Persona> {
        self.0.get(index)
    }
}

impl Index<usize> for Personas {
    type Output = Persona;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl fmt::Display for Personas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No personas found.");
        }
        for persona in &self.0 {
            write!(f, "{persona}")?;
        }
        Ok(())
    }
}
