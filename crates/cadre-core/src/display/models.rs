//! Display implementations for domain models.
//!
//! Separated from the model definitions so that the models stay plain data.
//! Every implementation emits markdown.

use std::fmt;

use crate::{
    generator::{StepSlot, Template, TemplateTable},
    models::{Objective, Persona, PersonaPlan, WizardStep, Workplan, WorkplanStep},
    wizard::SessionSnapshot,
};

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

impl fmt::Display for Persona {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {}. {}", self.id, self.name)?;
        writeln!(f)?;
        if !self.description.is_empty() {
            writeln!(f, "{}", self.description)?;
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Display for Objective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name.is_empty() {
            writeln!(f, "- **Objective**: _(unnamed)_")?;
        } else {
            writeln!(f, "- **Objective**: {}", self.name)?;
        }
        if !self.description.is_empty() {
            writeln!(f, "- **Description**: {}", self.description)?;
        }
        Ok(())
    }
}

impl fmt::Display for WorkplanStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let action = if self.action.is_empty() {
            "_(no action)_"
        } else {
            self.action.as_str()
        };
        writeln!(f, "{}. {action} ({})", self.step_number, self.duration_label)
    }
}

impl PersonaPlan {
    /// Format the plan under a heading carrying its 1-based position in the
    /// workplan.
    fn fmt_plan(&self, position: usize, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {position}. {}", self.persona_name)?;
        writeln!(f)?;
        writeln!(f, "- **Task**: {}", self.task)?;
        writeln!(f, "- **Expected Results**: {}", self.expected_results)?;
        writeln!(f)?;

        if self.steps.is_empty() {
            writeln!(f, "No steps in this plan.")?;
        } else {
            for step in &self.steps {
                write!(f, "{step}")?;
            }
        }
        writeln!(f)
    }
}

impl fmt::Display for PersonaPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_plan(1, f)
    }
}

impl fmt::Display for Workplan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Workplan: {}", self.objective.name)?;
        writeln!(f)?;
        if !self.objective.description.is_empty() {
            writeln!(f, "{}", self.objective.description)?;
            writeln!(f)?;
        }
        for (index, plan) in self.persona_plans.iter().enumerate() {
            plan.fmt_plan(index + 1, f)?;
        }
        Ok(())
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (number, step) in self.steps.iter().enumerate() {
            let action = match &step.slot {
                StepSlot::Fixed(text) => text.clone(),
                StepSlot::Task => "{task}".to_string(),
                StepSlot::Results(prefix) => format!("{prefix}{{results}}"),
            };
            writeln!(f, "{}. {action} ({})", number + 1, step.duration)?;
        }
        Ok(())
    }
}

impl fmt::Display for TemplateTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in self.entries() {
            writeln!(f, "## {} ({})", entry.persona, entry.template.label)?;
            writeln!(f)?;
            write!(f, "{}", entry.template)?;
            writeln!(f)?;
        }
        writeln!(f, "## Any other persona ({})", self.fallback().label)?;
        writeln!(f)?;
        write!(f, "{}", self.fallback())
    }
}

impl fmt::Display for SessionSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "# Step {} of 3: {}",
            self.current_step,
            self.current_step.title()
        )?;
        writeln!(f)?;
        write!(f, "{}", self.objective)?;
        writeln!(f)?;

        if self.selected.is_empty() {
            writeln!(f, "No personas selected.")?;
        } else {
            writeln!(f, "## Selected Personas")?;
            writeln!(f)?;
            for selected in &self.selected {
                writeln!(f, "- **{}** (ID: {})", selected.persona.name, selected.persona.id)?;
                if self.current_step >= WizardStep::Tasks {
                    writeln!(f, "  - Task: {}", selected.entry.task)?;
                    writeln!(f, "  - Expected Results: {}", selected.entry.expected_results)?;
                }
            }
        }

        if let (WizardStep::Review, Some(workplan)) = (self.current_step, &self.workplan) {
            writeln!(f)?;
            write!(f, "{workplan}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{generator::BuiltinTemplate, models::TaskEntry, wizard::SelectedPersona};

    fn sample_plan() -> PersonaPlan {
        PersonaPlan {
            persona_name: "Legal Analyst".to_string(),
            persona_description: "Interprets rules".to_string(),
            task: "Compare versions".to_string(),
            expected_results: "Summary".to_string(),
            steps: vec![
                WorkplanStep::new(1, "Review provided documentation", "2 hours"),
                WorkplanStep::new(2, "", "1 hour"),
            ],
        }
    }

    #[test]
    fn test_step_display() {
        let step = WorkplanStep::new(4, "Compare versions", "4 hours");
        assert_eq!(step.to_string(), "4. Compare versions (4 hours)\n");

        let blank = WorkplanStep::new(6, "", "1 hour");
        assert_eq!(blank.to_string(), "6. _(no action)_ (1 hour)\n");
    }

    #[test]
    fn test_workplan_display_numbers_plans() {
        let workplan = Workplan {
            objective: Objective {
                name: "Rule tracking".to_string(),
                description: "Track 12 CFR 614.4165".to_string(),
            },
            persona_plans: vec![sample_plan(), sample_plan()],
        };
        let output = workplan.to_string();

        assert!(output.starts_with("# Workplan: Rule tracking"));
        assert!(output.contains("Track 12 CFR 614.4165"));
        assert!(output.contains("## 1. Legal Analyst"));
        assert!(output.contains("## 2. Legal Analyst"));
        assert!(output.contains("- **Task**: Compare versions"));
        assert!(output.contains("1. Review provided documentation (2 hours)"));
    }

    #[test]
    fn test_template_display_marks_slots() {
        let output = BuiltinTemplate::Generic.template().to_string();
        assert_eq!(
            output,
            "1. Review assigned task (1 hour)\n2. {task} (4 hours)\n3. Achieve: {results} (3 hours)\n"
        );
    }

    #[test]
    fn test_table_display_lists_fallback_last() {
        let output = TemplateTable::builtin().to_string();
        let librarian = output.find("## Law Librarian (research-retrieval)");
        let fallback = output.find("## Any other persona (generic)");
        assert!(librarian.is_some());
        assert!(fallback > librarian);
    }

    #[test]
    fn test_snapshot_display_by_step() {
        let mut snapshot = SessionSnapshot {
            current_step: WizardStep::Objective,
            objective: Objective::default(),
            catalog: Persona::builtin_catalog(),
            selected: vec![],
            workplan: None,
        };
        let output = snapshot.to_string();
        assert!(output.starts_with("# Step 1 of 3: Objective & Personas"));
        assert!(output.contains("_(unnamed)_"));
        assert!(output.contains("No personas selected."));

        snapshot.current_step = WizardStep::Tasks;
        snapshot.selected.push(SelectedPersona {
            persona: Persona::new(1, "Law Librarian", ""),
            entry: TaskEntry {
                task: "Find both versions".to_string(),
                expected_results: "Two PDFs".to_string(),
            },
        });
        let output = snapshot.to_string();
        assert!(output.contains("- **Law Librarian** (ID: 1)"));
        assert!(output.contains("  - Task: Find both versions"));
    }
}
