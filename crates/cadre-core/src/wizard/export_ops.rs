//! Export assembly.

use log::{info, warn};

use super::Session;
use crate::{
    error::Result,
    export::{Encoder, ExportDocument, ExportedPersona, TextSink},
};

impl Session {
    /// Snapshot of the objective and the selected personas for export.
    ///
    /// Generated plans are joined to personas by name, not id: each plan is
    /// attached to the first persona in selection order with an equal name
    /// that has not already been given a plan. A persona without a match
    /// contributes only its catalog fields and task entry.
    pub fn assemble_export(&self) -> ExportDocument {
        let plans = self
            .workplan
            .as_ref()
            .map_or(&[][..], |w| w.persona_plans.as_slice());
        let mut claimed = vec![false; plans.len()];

        let personas = self
            .selected_personas()
            .map(|persona| {
                let entry = self.tasks.get(&persona.id).cloned().unwrap_or_default();
                let mut exported = ExportedPersona {
                    id: persona.id,
                    name: persona.name.clone(),
                    description: persona.description.clone(),
                    task: entry.task,
                    expected_results: entry.expected_results,
                    persona: None,
                    workplan: None,
                };

                let matched = (0..plans.len())
                    .find(|&i| !claimed[i] && plans[i].persona_name == persona.name);
                if let Some(index) = matched {
                    claimed[index] = true;
                    exported.attach(&plans[index]);
                }
                exported
            })
            .collect();

        ExportDocument {
            objective_name: self.objective.name.clone(),
            objective_description: self.objective.description.clone(),
            personas,
        }
    }

    /// Assembles the export, encodes it and hands the text to `sink`.
    ///
    /// A failing sink is logged and otherwise ignored; the assembled document
    /// is returned either way.
    ///
    /// # Errors
    ///
    /// Returns the encoder's error if the document cannot be encoded.
    pub fn export(&self, encoder: &dyn Encoder, sink: &mut dyn TextSink) -> Result<ExportDocument> {
        let document = self.assemble_export();
        let text = encoder.encode(&document)?;

        match sink.write_text(&text) {
            Ok(()) => info!(
                "Exported {} personas ({} bytes)",
                document.personas.len(),
                text.len()
            ),
            Err(e) => warn!("Export sink failed: {e}"),
        }
        Ok(document)
    }
}
