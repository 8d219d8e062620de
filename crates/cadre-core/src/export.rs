//! Export document, encoder and text sink boundary.
//!
//! [`crate::Session::assemble_export`] produces an [`ExportDocument`]; an
//! [`Encoder`] turns it into text and a [`TextSink`] receives that text. The
//! core does not act on the sink's outcome beyond logging it.

use std::{
    fs,
    io::{self, Write},
    path::PathBuf,
};

use serde::{Deserialize, Serialize};

use crate::{
    error::Result,
    models::{PersonaPlan, WorkplanStep},
};

/// Objective plus every selected persona with its task entry and, when a
/// workplan has been generated, its joined persona plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub objective_name: String,
    pub objective_description: String,
    pub personas: Vec<ExportedPersona>,
}

impl ExportDocument {
    /// Decode a document previously produced by [`JsonEncoder`].
    ///
    /// # Errors
    ///
    /// Returns `WizardError::Serialization` if the text is not a valid
    /// export document.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

/// One exported persona.
///
/// `persona` and `workplan` are present only when a generated plan was
/// joined; in that case `description`, `task` and `expected_results` carry
/// the plan's values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExportedPersona {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub task: String,
    pub expected_results: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub persona: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workplan: Option<Vec<WorkplanStep>>,
}

impl ExportedPersona {
    /// Overlay a joined plan's fields.
    pub(crate) fn attach(&mut self, plan: &PersonaPlan) {
        self.persona = Some(plan.persona_name.clone());
        self.description.clone_from(&plan.persona_description);
        self.task.clone_from(&plan.task);
        self.expected_results.clone_from(&plan.expected_results);
        self.workplan = Some(plan.steps.clone());
    }

    pub fn has_plan(&self) -> bool {
        self.workplan.is_some()
    }
}

/// Structured-data to text conversion.
pub trait Encoder {
    /// Encode a document.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::Serialization` if the document cannot be
    /// encoded.
    fn encode(&self, document: &ExportDocument) -> Result<String>;
}

/// Pretty-printed JSON with two-space indentation.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonEncoder;

impl Encoder for JsonEncoder {
    fn encode(&self, document: &ExportDocument) -> Result<String> {
        Ok(serde_json::to_string_pretty(document)?)
    }
}

/// Destination for exported text, such as a clipboard, stdout or a file.
pub trait TextSink {
    fn write_text(&mut self, text: &str) -> io::Result<()>;
}

/// Writes exported text to standard output.
#[derive(Debug, Default)]
pub struct StdoutSink;

impl TextSink for StdoutSink {
    fn write_text(&mut self, text: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{text}")?;
        stdout.flush()
    }
}

/// Writes exported text to a file, replacing its contents.
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TextSink for FileSink {
    fn write_text(&mut self, text: &str) -> io::Result<()> {
        fs::write(&self.path, text)
    }
}

/// Keeps every written text in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub writes: Vec<String>,
}

impl TextSink for MemorySink {
    fn write_text(&mut self, text: &str) -> io::Result<()> {
        self.writes.push(text.to_string());
        Ok(())
    }
}
