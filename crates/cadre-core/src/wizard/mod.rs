//! The wizard state manager.
//!
//! A [`Session`] owns all state for one use of the wizard: the persona
//! catalog, the objective, the ordered selection, one task entry per selected
//! persona, the generated workplan (once there is one), and the current step.
//! Every intent is a synchronous method that runs to completion; the view
//! layer reads state back through accessors or [`Session::snapshot`].
//!
//! # Invariants
//!
//! - Selected ids are distinct and always present in the catalog.
//! - A task entry exists for exactly the selected ids.
//! - When present, the workplan holds one persona plan per selected persona,
//!   in selection order, as of the last generation.
//! - The step only moves 1→2→3 through gated intents, or one step back.
//!
//! # Example
//!
//! ```rust
//! use cadre_core::{Session, TaskField, params::{SetObjective, UpdateTask}};
//!
//! # fn main() -> cadre_core::Result<()> {
//! let mut session = Session::default();
//! session.set_objective(&SetObjective {
//!     name: Some("Track rule changes".to_string()),
//!     description: None,
//! });
//! session.select_persona(1)?;
//! session.advance_to_step2()?;
//! session.update_task_field(&UpdateTask {
//!     persona_id: 1,
//!     field: TaskField::Task,
//!     value: "Collect both versions".to_string(),
//! });
//! let workplan = session.generate_workplan()?;
//! assert_eq!(workplan.persona_plans[0].steps.len(), 5);
//! # Ok(())
//! # }
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

pub mod builder;
pub mod export_ops;
pub mod persona_ops;
pub mod workplan_ops;


pub use builder::SessionBuilder;

use crate::{
    generator::WorkplanGenerator,
    models::{Objective, Persona, TaskEntry, WizardStep, Workplan},
};

/// State of one wizard session.
#[derive(Debug, Clone)]
pub struct Session {
    pub(crate) catalog: Vec<Persona>,
    pub(crate) objective: Objective,
    pub(crate) selection: Vec<u64>,
    pub(crate) tasks: HashMap<u64, TaskEntry>,
    pub(crate) workplan: Option<Workplan>,
    pub(crate) current_step: WizardStep,
    pub(crate) generator: WorkplanGenerator,
}

impl Session {
    /// Creates a session over the given catalog.
    pub(crate) fn new(catalog: Vec<Persona>, generator: WorkplanGenerator) -> Self {
        Self {
            catalog,
            objective: Objective::default(),
            selection: Vec::new(),
            tasks: HashMap::new(),
            workplan: None,
            current_step: WizardStep::Objective,
            generator,
        }
    }

    pub fn catalog(&self) -> &[Persona] {
        &self.catalog
    }

    pub fn objective(&self) -> &Objective {
        &self.objective
    }

    /// Selected persona ids in selection order.
    pub fn selection(&self) -> &[u64] {
        &self.selection
    }

    pub fn is_selected(&self, persona_id: u64) -> bool {
        self.selection.contains(&persona_id)
    }

    /// Task entry of a selected persona.
    pub fn task_entry(&self, persona_id: u64) -> Option<&TaskEntry> {
        self.tasks.get(&persona_id)
    }

    pub fn persona(&self, persona_id: u64) -> Option<&Persona> {
        self.catalog.iter().find(|p| p.id == persona_id)
    }

    /// Selected personas in selection order.
    pub fn selected_personas(&self) -> impl Iterator<Item = &Persona> {
        self.selection.iter().filter_map(|id| self.persona(*id))
    }

    pub fn workplan(&self) -> Option<&Workplan> {
        self.workplan.as_ref()
    }

    pub fn current_step(&self) -> WizardStep {
        self.current_step
    }

    pub fn generator(&self) -> &WorkplanGenerator {
        &self.generator
    }

    /// Whether `advance_to_step2` would currently be accepted.
    pub fn can_advance(&self) -> bool {
        self.current_step == WizardStep::Objective
            && !self.objective.name.is_empty()
            && !self.selection.is_empty()
    }

    /// Owned, read-only copy of everything the view layer displays.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            current_step: self.current_step,
            objective: self.objective.clone(),
            catalog: self.catalog.clone(),
            selected: self
                .selected_personas()
                .map(|persona| SelectedPersona {
                    persona: persona.clone(),
                    entry: self.tasks.get(&persona.id).cloned().unwrap_or_default(),
                })
                .collect(),
            workplan: self.workplan.clone(),
        }
    }
}

impl Default for Session {
    /// A session over the built-in personas and templates.
    fn default() -> Self {
        Self::new(Persona::builtin_catalog(), WorkplanGenerator::default())
    }
}

/// A selected persona together with its task entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SelectedPersona {
    pub persona: Persona,
    pub entry: TaskEntry,
}

/// Point-in-time view of a [`Session`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub current_step: WizardStep,
    pub objective: Objective,
    pub catalog: Vec<Persona>,
    pub selected: Vec<SelectedPersona>,
    pub workplan: Option<Workplan>,
}
