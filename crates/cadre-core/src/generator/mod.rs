//! Workplan generation.
//!
//! Generation is a pure function of the objective, the selected personas in
//! selection order, their task entries, and the [`TemplateTable`]. Each
//! persona's name picks a template; the template's task and results slots are
//! filled from the persona's task entry.

pub mod templates;

use log::debug;

pub use templates::{
    BuiltinTemplate, NamedTemplate, StepSlot, Template, TemplateStep, TemplateTable,
};

use crate::models::{Objective, Persona, PersonaPlan, TaskEntry, Workplan};

/// A selected persona paired with its task entry.
#[derive(Debug, Clone, Copy)]
pub struct Assignment<'a> {
    pub persona: &'a Persona,
    pub entry: &'a TaskEntry,
}

/// Maps assignments to a [`Workplan`] using a template table.
#[derive(Debug, Clone, Default)]
pub struct WorkplanGenerator {
    table: TemplateTable,
}

impl WorkplanGenerator {
    pub fn new(table: TemplateTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &TemplateTable {
        &self.table
    }

    /// Build a workplan with one persona plan per assignment, in order.
    pub fn generate(&self, objective: &Objective, assignments: &[Assignment<'_>]) -> Workplan {
        let persona_plans = assignments
            .iter()
            .map(|assignment| self.plan_for(assignment))
            .collect();

        Workplan {
            objective: objective.clone(),
            persona_plans,
        }
    }

    fn plan_for(&self, assignment: &Assignment<'_>) -> PersonaPlan {
        let template = self.table.lookup(&assignment.persona.name);
        debug!(
            "Rendering template '{}' for persona {} ({})",
            template.label, assignment.persona.id, assignment.persona.name
        );

        PersonaPlan {
            persona_name: assignment.persona.name.clone(),
            persona_description: assignment.persona.description.clone(),
            task: assignment.entry.task.clone(),
            expected_results: assignment.entry.expected_results.clone(),
            steps: template.render(assignment.entry),
        }
    }
}

/// Generate with the built-in template table.
pub fn generate(objective: &Objective, assignments: &[Assignment<'_>]) -> Workplan {
    WorkplanGenerator::default().generate(objective, assignments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LAW_LIBRARIAN, LEGAL_ANALYST};

    fn objective() -> Objective {
        Objective {
            name: "Track 12 CFR 614.4165".to_string(),
            description: "Compare the 2023 and latest versions".to_string(),
        }
    }

    fn entry(task: &str, results: &str) -> TaskEntry {
        TaskEntry {
            task: task.to_string(),
            expected_results: results.to_string(),
        }
    }

    #[test]
    fn test_law_librarian_plan() {
        let persona = Persona::new(1, LAW_LIBRARIAN, "Research");
        let task = entry("T", "R");
        let plan = generate(
            &objective(),
            &[Assignment {
                persona: &persona,
                entry: &task,
            }],
        );

        let steps = &plan.persona_plans[0].steps;
        assert_eq!(steps.len(), 5);
        assert_eq!(steps[3].action, "T");
        assert_eq!(steps[4].action, "Validate results: R");
        assert_eq!(steps[0].action, "Access legal databases and repositories");
        assert_eq!(steps[0].duration_label, "1 hour");
    }

    #[test]
    fn test_unknown_persona_uses_generic_template() {
        let persona = Persona::new(4, "Paralegal", "Supports the team");
        let task = entry("Collect exhibits", "binder ready");
        let plan = generate(
            &objective(),
            &[Assignment {
                persona: &persona,
                entry: &task,
            }],
        );

        let steps = &plan.persona_plans[0].steps;
        assert_eq!(steps.len(), 3);
        assert_eq!(steps[0].action, "Review assigned task");
        assert_eq!(steps[1].action, "Collect exhibits");
        assert_eq!(steps[2].action, "Achieve: binder ready");
        assert_eq!(
            steps.iter().map(|s| s.step_number).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn test_plans_follow_assignment_order_and_copy_fields() {
        let analyst = Persona::new(2, LEGAL_ANALYST, "Analysis");
        let custom = Persona::new(9, "Reviewer", "Second pair of eyes");
        let a = entry("Diff", "Summary");
        let b = entry("", "");
        let plan = generate(
            &objective(),
            &[
                Assignment {
                    persona: &custom,
                    entry: &b,
                },
                Assignment {
                    persona: &analyst,
                    entry: &a,
                },
            ],
        );

        assert_eq!(plan.objective, objective());
        assert_eq!(plan.persona_plans.len(), 2);
        assert_eq!(plan.persona_plans[0].persona_name, "Reviewer");
        assert_eq!(plan.persona_plans[0].persona_description, "Second pair of eyes");
        // Empty entries flow through as empty text
        assert_eq!(plan.persona_plans[0].steps[1].action, "");
        assert_eq!(plan.persona_plans[0].steps[2].action, "Achieve: ");
        assert_eq!(plan.persona_plans[1].task, "Diff");
        assert_eq!(plan.persona_plans[1].expected_results, "Summary");
        assert_eq!(plan.total_steps(), 8);
    }

    #[test]
    fn test_custom_table_overrides_lookup() {
        let mut table = TemplateTable::builtin();
        table
            .insert(NamedTemplate {
                persona: "Reviewer".to_string(),
                template: Template {
                    label: "review".to_string(),
                    steps: vec![TemplateStep {
                        slot: StepSlot::Results("Sign off: ".to_string()),
                        duration: "30 minutes".to_string(),
                    }],
                },
            })
            .expect("insert");
        let generator = WorkplanGenerator::new(table);
        let reviewer = Persona::new(5, "Reviewer", "");
        let task = entry("x", "approved");

        let plan = generator.generate(
            &objective(),
            &[Assignment {
                persona: &reviewer,
                entry: &task,
            }],
        );
        assert_eq!(plan.persona_plans[0].steps.len(), 1);
        assert_eq!(plan.persona_plans[0].steps[0].action, "Sign off: approved");
        assert_eq!(plan.persona_plans[0].steps[0].duration_label, "30 minutes");
    }

    #[test]
    fn test_empty_assignments_yield_empty_plan_list() {
        let plan = generate(&objective(), &[]);
        assert!(plan.persona_plans.is_empty());
    }
}
