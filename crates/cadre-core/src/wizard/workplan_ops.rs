//! Step navigation, workplan generation and workplan editing intents.

use log::{debug, info};

use super::Session;
use crate::{
    error::{Result, WizardError},
    generator::Assignment,
    models::{PersonaPlan, WizardStep, Workplan, WorkplanStep},
    params::{AddStep, EditStep},
};

impl Session {
    /// Moves from step 1 to step 2.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::StepGate` if the objective name is empty, no
    /// persona is selected, or the wizard is not on step 1.
    pub fn advance_to_step2(&mut self) -> Result<()> {
        if self.current_step != WizardStep::Objective {
            return Err(WizardError::gate(format!(
                "already past step 1 (on step {})",
                self.current_step.number()
            )));
        }
        if self.objective.name.is_empty() {
            return Err(WizardError::gate("objective name is required"));
        }
        if self.selection.is_empty() {
            return Err(WizardError::gate("select at least one persona"));
        }

        self.current_step = WizardStep::Tasks;
        debug!("Advanced to step 2");
        Ok(())
    }

    /// Generates a workplan from the current selection and task entries,
    /// replacing any previous one, and moves to step 3.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::StepGate` unless the wizard is on step 2 with at
    /// least one selected persona, and `WizardError::MissingTaskEntry` or
    /// `WizardError::PersonaNotFound` if the selection invariants are broken.
    pub fn generate_workplan(&mut self) -> Result<&Workplan> {
        if self.current_step != WizardStep::Tasks {
            return Err(WizardError::gate(format!(
                "workplans are generated from step 2 (on step {})",
                self.current_step.number()
            )));
        }
        if self.selection.is_empty() {
            return Err(WizardError::gate("select at least one persona"));
        }

        let assignments = self
            .selection
            .iter()
            .map(|id| {
                let persona = self
                    .catalog
                    .iter()
                    .find(|p| p.id == *id)
                    .ok_or(WizardError::PersonaNotFound { id: *id })?;
                let entry = self
                    .tasks
                    .get(id)
                    .ok_or(WizardError::MissingTaskEntry { id: *id })?;
                Ok(Assignment { persona, entry })
            })
            .collect::<Result<Vec<_>>>()?;

        let workplan = self.generator.generate(&self.objective, &assignments);
        info!(
            "Generated workplan with {} persona plans and {} steps",
            workplan.persona_plans.len(),
            workplan.total_steps()
        );

        self.current_step = WizardStep::Review;
        Ok(&*self.workplan.insert(workplan))
    }

    /// Moves exactly one step back (3→2 or 2→1). The workplan, if any, is
    /// kept until the next generation replaces it.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::InvalidTransition` for any other target.
    pub fn go_to_step(&mut self, target: WizardStep) -> Result<()> {
        if self.current_step.previous() != Some(target) {
            return Err(WizardError::InvalidTransition {
                from: self.current_step,
                to: target,
            });
        }
        debug!(
            "Moved back from step {} to step {}",
            self.current_step.number(),
            target.number()
        );
        self.current_step = target;
        Ok(())
    }

    /// Overwrites a field of a generated step in place.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::NoWorkplan` before generation, and
    /// `WizardError::PlanIndexOutOfRange` / `WizardError::StepIndexOutOfRange`
    /// for indices outside the workplan.
    pub fn edit_generated_step(&mut self, params: &EditStep) -> Result<&WorkplanStep> {
        let plan = self.plan_mut(params.plan_index)?;
        let len = plan.steps.len();
        let step = plan
            .steps
            .get_mut(params.step_index)
            .ok_or(WizardError::StepIndexOutOfRange {
                index: params.step_index,
                len,
            })?;

        step.set(params.field, params.value.clone());
        debug!(
            "Edited {:?} of step {} in plan {}",
            params.field, params.step_index, params.plan_index
        );
        Ok(&*step)
    }

    /// Appends a blank step (numbered step count + 1, duration "1 hour") to
    /// a persona plan.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::NoWorkplan` before generation and
    /// `WizardError::PlanIndexOutOfRange` for an unknown plan index.
    pub fn add_generated_step(&mut self, params: &AddStep) -> Result<&WorkplanStep> {
        let plan = self.plan_mut(params.plan_index)?;
        let step = plan.push_blank_step();
        debug!(
            "Added step {} to plan {}",
            step.step_number, params.plan_index
        );
        Ok(step)
    }

    fn plan_mut(&mut self, index: usize) -> Result<&mut PersonaPlan> {
        let workplan = self.workplan.as_mut().ok_or(WizardError::NoWorkplan)?;
        let len = workplan.persona_plans.len();
        workplan
            .persona_plans
            .get_mut(index)
            .ok_or(WizardError::PlanIndexOutOfRange { index, len })
    }
}
