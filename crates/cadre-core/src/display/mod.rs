//! Display formatting for wizard state and operation results.
//!
//! Domain models implement [`std::fmt::Display`] in [`models`]; collection
//! and result wrappers add contextual formatting on top. Everything renders
//! as markdown so the CLI can pass it through its terminal renderer or print
//! it as plain text.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │    Wrappers     │    │    Markdown     │
//! │ (Persona, Plan) │───▶│ (Personas,      │───▶│     Output      │
//! │                 │    │  CreateResult)  │    │  (Terminal/MCP) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrapper types (Personas)
//! - [`results`]: Operation result types (CreateResult, UpdateResult)
//! - [`status`]: Status and confirmation messages (OperationStatus)
//! - [`models`]: Display implementations for domain models
//!
//! # Examples
//!
//! ```rust
//! use cadre_core::{display::{CreateResult, Personas}, models::Persona};
//!
//! let persona = Persona::new(4, "Auditor", "Checks the books");
//! let output = CreateResult::new(persona.clone()).to_string();
//! assert!(output.contains("Created persona with ID: 4"));
//!
//! let listing = Personas(vec![persona]).to_string();
//! assert!(listing.contains("Auditor"));
//! ```

pub mod collections;
pub mod models;
pub mod results;
pub mod status;

pub use collections::Personas;
pub use results::{CreateResult, UpdateResult};
pub use status::{OperationStatus, StatusKind};
