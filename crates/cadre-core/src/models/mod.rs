//! Data models for personas, objectives and generated workplans.
//!
//! Display implementations for these models live in
//! [`crate::display::models`], keeping data structures separate from their
//! markdown presentation.
//!
//! # Examples
//!
//! ```rust
//! use cadre_core::models::{Persona, WorkplanStep};
//!
//! let persona = Persona::new(7, "Archivist", "Keeps the records");
//! assert!(persona.matches("RECORD"));
//!
//! let step = WorkplanStep::new(1, "Review assigned task", "1 hour");
//! println!("{step}");
//! ```

pub mod objective;
pub mod persona;
pub mod status;
pub mod workplan;


pub use objective::{Objective, TaskEntry};
pub use persona::{COMPLIANCE_OFFICER, LAW_LIBRARIAN, LEGAL_ANALYST, Persona};
pub use status::{StepField, TaskField, WizardStep};
pub use workplan::{DEFAULT_STEP_DURATION, PersonaPlan, Workplan, WorkplanStep};
