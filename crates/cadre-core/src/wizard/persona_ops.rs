//! Objective, persona and task-entry intents.

use log::{debug, warn};

use super::Session;
use crate::{
    error::{Result, WizardError},
    models::{Persona, TaskEntry},
    params::{CreatePersona, SetObjective, UpdateTask},
};

impl Session {
    /// Assigns whichever objective fields are given.
    pub fn set_objective(&mut self, params: &SetObjective) {
        if let Some(name) = &params.name {
            self.objective.name.clone_from(name);
        }
        if let Some(description) = &params.description {
            self.objective.description.clone_from(description);
        }
        debug!("Objective set to {:?}", self.objective.name);
    }

    /// Catalog personas whose name or description contains `term`,
    /// ignoring case. Does not touch the selection.
    pub fn search_personas(&self, term: &str) -> Vec<&Persona> {
        self.catalog.iter().filter(|p| p.matches(term)).collect()
    }

    /// Adds a persona to the catalog and selects it.
    ///
    /// The new id is one more than the largest id in the catalog.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::InvalidInput` if the name or description is
    /// empty, or if the catalog already uses the largest possible id.
    pub fn create_persona(&mut self, params: &CreatePersona) -> Result<Persona> {
        if params.name.is_empty() {
            return Err(WizardError::invalid_input("name").with_reason("Persona name is required"));
        }
        if params.description.is_empty() {
            return Err(WizardError::invalid_input("description")
                .with_reason("Persona description is required"));
        }

        let id = self
            .catalog
            .iter()
            .map(|p| p.id)
            .max()
            .unwrap_or(0)
            .checked_add(1)
            .ok_or_else(|| {
                WizardError::invalid_input("id").with_reason("no persona ids left in the catalog")
            })?;
        let persona = Persona::new(id, params.name.as_str(), params.description.as_str());
        self.catalog.push(persona.clone());
        debug!("Created persona {id} ({})", persona.name);

        self.select_persona(id)?;
        Ok(persona)
    }

    /// Appends a persona to the selection with an empty task entry.
    ///
    /// Returns `false` if the persona was already selected.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::PersonaNotFound` if the id is not in the catalog.
    pub fn select_persona(&mut self, persona_id: u64) -> Result<bool> {
        if self.persona(persona_id).is_none() {
            return Err(WizardError::PersonaNotFound { id: persona_id });
        }
        if self.is_selected(persona_id) {
            debug!("Persona {persona_id} already selected");
            return Ok(false);
        }

        self.selection.push(persona_id);
        self.tasks.insert(persona_id, TaskEntry::default());
        debug!("Selected persona {persona_id}");
        Ok(true)
    }

    /// Removes a persona from the selection and drops its task entry.
    ///
    /// Returns `false` if the persona was not selected. The catalog is left
    /// unchanged.
    pub fn deselect_persona(&mut self, persona_id: u64) -> bool {
        let before = self.selection.len();
        self.selection.retain(|id| *id != persona_id);
        self.tasks.remove(&persona_id);

        let removed = self.selection.len() != before;
        if removed {
            debug!("Deselected persona {persona_id}");
        } else {
            warn!("Ignoring deselect of unselected persona {persona_id}");
        }
        removed
    }

    /// Overwrites one field of a selected persona's task entry.
    ///
    /// Returns `false` if the persona is not selected.
    pub fn update_task_field(&mut self, params: &UpdateTask) -> bool {
        let Some(entry) = self.tasks.get_mut(&params.persona_id) else {
            warn!(
                "Ignoring task update for unselected persona {}",
                params.persona_id
            );
            return false;
        };
        entry.set(params.field, params.value.clone());
        debug!("Updated {:?} for persona {}", params.field, params.persona_id);
        true
    }
}
