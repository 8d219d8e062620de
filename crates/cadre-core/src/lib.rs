//! Core library for the Cadre objective planning wizard.
//!
//! Cadre walks a user through three steps: name an objective and pick the
//! personas (named role descriptions) that will work on it, give each persona
//! a task and expected results, then generate a workplan of timed steps per
//! persona from templates keyed on the persona's name. The generated
//! workplan can be edited and the whole structure exported as text.
//!
//! This crate holds the state and logic only. Front ends (the `cadre` CLI
//! shell, its MCP server) issue intents to a [`Session`] and render what it
//! reports back.
//!
//! # Quick Start
//!
//! ```rust
//! use cadre_core::{
//!     JsonEncoder, MemorySink, SessionBuilder, TaskField,
//!     params::{CreatePersona, SetObjective, UpdateTask},
//! };
//!
//! # fn main() -> cadre_core::Result<()> {
//! let mut session = SessionBuilder::new().build()?;
//!
//! session.set_objective(&SetObjective {
//!     name: Some("Track 12 CFR 614.4165".to_string()),
//!     description: Some("Compare the 2023 and latest versions".to_string()),
//! });
//! session.select_persona(1)?; // Law Librarian
//! let reviewer = session.create_persona(&CreatePersona {
//!     name: "Reviewer".to_string(),
//!     description: "Second pair of eyes".to_string(),
//! })?;
//!
//! session.advance_to_step2()?;
//! session.update_task_field(&UpdateTask {
//!     persona_id: reviewer.id,
//!     field: TaskField::Task,
//!     value: "Check the comparison".to_string(),
//! });
//!
//! let workplan = session.generate_workplan()?;
//! assert_eq!(workplan.persona_plans[1].steps.len(), 3);
//!
//! let mut sink = MemorySink::default();
//! let document = session.export(&JsonEncoder, &mut sink)?;
//! assert_eq!(document.personas.len(), 2);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod generator;
pub mod models;
pub mod params;
pub mod wizard;

// Re-export commonly used types
pub use display::{CreateResult, OperationStatus, Personas, StatusKind, UpdateResult};
pub use error::{Result, WizardError};
pub use export::{
    Encoder, ExportDocument, ExportedPersona, FileSink, JsonEncoder, MemorySink, StdoutSink,
    TextSink,
};
pub use generator::{TemplateTable, WorkplanGenerator};
pub use models::{
    Objective, Persona, PersonaPlan, StepField, TaskEntry, TaskField, WizardStep, Workplan,
    WorkplanStep,
};
pub use wizard::{SelectedPersona, Session, SessionBuilder, SessionSnapshot};
