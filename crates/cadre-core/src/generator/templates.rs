//! Step templates and the name-keyed template table.
//!
//! A template is an ordered list of step skeletons. Each skeleton fixes its
//! duration label and either carries fixed text or marks a slot that is
//! filled from the persona's task entry when the template is rendered.

use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, WizardError},
    models::{COMPLIANCE_OFFICER, LAW_LIBRARIAN, LEGAL_ANALYST, TaskEntry, WorkplanStep},
};

/// What a skeleton step's action text is made of.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StepSlot {
    /// Literal action text
    Fixed(String),
    /// The task text, verbatim
    Task,
    /// The given prefix followed by the expected-results text
    Results(String),
}

impl StepSlot {
    fn render(&self, entry: &TaskEntry) -> String {
        match self {
            StepSlot::Fixed(text) => text.clone(),
            StepSlot::Task => entry.task.clone(),
            StepSlot::Results(prefix) => format!("{prefix}{}", entry.expected_results),
        }
    }
}

/// One step skeleton.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TemplateStep {
    pub slot: StepSlot,
    pub duration: String,
}

impl TemplateStep {
    fn fixed(text: &str, duration: &str) -> Self {
        Self {
            slot: StepSlot::Fixed(text.to_string()),
            duration: duration.to_string(),
        }
    }

    fn task(duration: &str) -> Self {
        Self {
            slot: StepSlot::Task,
            duration: duration.to_string(),
        }
    }

    fn results(prefix: &str, duration: &str) -> Self {
        Self {
            slot: StepSlot::Results(prefix.to_string()),
            duration: duration.to_string(),
        }
    }
}

/// A named, ordered list of step skeletons.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Template {
    /// Short label for listings, e.g. `research-retrieval`
    #[serde(default)]
    pub label: String,
    pub steps: Vec<TemplateStep>,
}

impl Template {
    /// Substitute the task entry into the skeleton, numbering steps from 1.
    pub fn render(&self, entry: &TaskEntry) -> Vec<WorkplanStep> {
        self.steps
            .iter()
            .zip(1u32..)
            .map(|(skeleton, number)| {
                WorkplanStep::new(number, skeleton.slot.render(entry), skeleton.duration.clone())
            })
            .collect()
    }
}

/// The templates shipped with the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinTemplate {
    ResearchRetrieval,
    Analysis,
    Compliance,
    Generic,
}

impl BuiltinTemplate {
    /// The built-in template bound to a persona name, if any.
    pub fn for_persona(name: &str) -> Option<Self> {
        match name {
            LAW_LIBRARIAN => Some(BuiltinTemplate::ResearchRetrieval),
            LEGAL_ANALYST => Some(BuiltinTemplate::Analysis),
            COMPLIANCE_OFFICER => Some(BuiltinTemplate::Compliance),
            _ => None,
        }
    }

    pub fn template(self) -> Template {
        let (label, steps) = match self {
            BuiltinTemplate::ResearchRetrieval => (
                "research-retrieval",
                vec![
                    TemplateStep::fixed("Access legal databases and repositories", "1 hour"),
                    TemplateStep::fixed("Retrieve specified regulatory documents", "2 hours"),
                    TemplateStep::fixed("Organize and catalog findings", "3 hours"),
                    TemplateStep::task("4 hours"),
                    TemplateStep::results("Validate results: ", "2 hours"),
                ],
            ),
            BuiltinTemplate::Analysis => (
                "analysis",
                vec![
                    TemplateStep::fixed("Review provided documentation", "2 hours"),
                    TemplateStep::fixed("Analyze regulatory changes", "4 hours"),
                    TemplateStep::fixed("Draft detailed comparison", "3 hours"),
                    TemplateStep::task("4 hours"),
                    TemplateStep::results("Prepare findings: ", "3 hours"),
                ],
            ),
            BuiltinTemplate::Compliance => (
                "compliance",
                vec![
                    TemplateStep::fixed("Review analysis documentation", "2 hours"),
                    TemplateStep::fixed("Identify compliance implications", "3 hours"),
                    TemplateStep::fixed("Develop mitigation strategies", "4 hours"),
                    TemplateStep::task("4 hours"),
                    TemplateStep::results("Validate outcomes: ", "3 hours"),
                ],
            ),
            BuiltinTemplate::Generic => (
                "generic",
                vec![
                    TemplateStep::fixed("Review assigned task", "1 hour"),
                    TemplateStep::task("4 hours"),
                    TemplateStep::results("Achieve: ", "3 hours"),
                ],
            ),
        };
        Template {
            label: label.to_string(),
            steps,
        }
    }
}

/// A template bound to a persona name, as read from catalog configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NamedTemplate {
    /// Persona name the template applies to (exact match)
    pub persona: String,
    #[serde(flatten)]
    pub template: Template,
}

/// Persona-name to template mapping with an explicit fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateTable {
    entries: Vec<NamedTemplate>,
    fallback: Template,
}

impl TemplateTable {
    /// The three role templates plus the generic fallback.
    pub fn builtin() -> Self {
        let entries = [LAW_LIBRARIAN, LEGAL_ANALYST, COMPLIANCE_OFFICER]
            .into_iter()
            .filter_map(|name| {
                BuiltinTemplate::for_persona(name).map(|kind| NamedTemplate {
                    persona: name.to_string(),
                    template: kind.template(),
                })
            })
            .collect();
        Self {
            entries,
            fallback: BuiltinTemplate::Generic.template(),
        }
    }

    /// Add or replace the template for a persona name.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::InvalidInput` if the persona name is empty or the
    /// template has no steps.
    pub fn insert(&mut self, named: NamedTemplate) -> Result<()> {
        if named.persona.trim().is_empty() {
            return Err(WizardError::invalid_input("templates.persona")
                .with_reason("template persona name must not be empty"));
        }
        if named.template.steps.is_empty() {
            return Err(WizardError::invalid_input("templates.steps").with_reason(format!(
                "template for '{}' must have at least one step",
                named.persona
            )));
        }
        match self.entries.iter_mut().find(|e| e.persona == named.persona) {
            Some(existing) => *existing = named,
            None => self.entries.push(named),
        }
        Ok(())
    }

    /// Template for a persona name, falling back to the default.
    pub fn lookup(&self, persona_name: &str) -> &Template {
        self.entries
            .iter()
            .find(|e| e.persona == persona_name)
            .map_or(&self.fallback, |e| &e.template)
    }

    /// Named entries in insertion order.
    pub fn entries(&self) -> &[NamedTemplate] {
        &self.entries
    }

    pub fn fallback(&self) -> &Template {
        &self.fallback
    }
}

impl Default for TemplateTable {
    fn default() -> Self {
        Self::builtin()
    }
}
