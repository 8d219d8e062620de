//! Wizard shell command definitions and dispatch
//!
//! Each line typed into the shell is parsed by clap into a [`ShellCommand`],
//! converted into core parameter types, and applied to the session. This
//! keeps clap concerns in the CLI layer while the core stays framework-free:
//!
//! ```text
//! Shell line → ShellCommand (clap) → Core Params → Session intent
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use cadre_core::{
    CreateResult, Encoder, FileSink, JsonEncoder, OperationStatus, Personas, Session, StdoutSink,
    StepField, TaskField, TextSink, UpdateResult, WizardStep, params::*,
};
use clap::{Args, Parser, Subcommand, ValueEnum};
use log::{debug, info};

use crate::renderer::TerminalRenderer;

/// One line of wizard shell input
#[derive(Parser, Debug)]
#[command(
    name = "cadre",
    no_binary_name = true,
    disable_version_flag = true
)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

/// Commands accepted by the wizard shell
#[derive(Subcommand, Debug)]
pub enum ShellCommand {
    /// Set the objective name and/or description
    #[command(alias = "o")]
    Objective(ObjectiveArgs),
    /// Search the persona catalog (all personas without a term)
    #[command(aliases = ["f", "find"])]
    Search(SearchArgs),
    /// Create a persona and select it
    #[command(alias = "c")]
    Create(CreatePersonaArgs),
    /// Select a persona for the objective
    #[command(alias = "s")]
    Select(PersonaIdArgs),
    /// Remove a persona from the selection
    #[command(aliases = ["rm", "remove"])]
    Deselect(PersonaIdArgs),
    /// Set a selected persona's task or expected results
    Task(TaskArgs),
    /// Continue from step 1 to step 2
    #[command(alias = "n")]
    Next,
    /// Go back one step
    #[command(alias = "b")]
    Back(BackArgs),
    /// Generate the workplan (step 2 to step 3)
    #[command(alias = "g")]
    Generate,
    /// Edit a generated workplan step
    #[command(alias = "e")]
    Edit(EditStepArgs),
    /// Append a blank step to a persona's workplan
    #[command(alias = "a")]
    AddStep(AddStepArgs),
    /// Export the objective, personas and workplan as JSON
    #[command(alias = "x")]
    Export(ExportArgs),
    /// Show the current wizard state
    #[command(alias = "ls")]
    Show,
    /// Leave the shell
    #[command(alias = "exit")]
    Quit,
}

#[derive(Args, Debug)]
pub struct ObjectiveArgs {
    #[arg(short, long, help = "Objective name (required before continuing)")]
    pub name: Option<String>,
    #[arg(short, long, help = "Free-text description of the objective")]
    pub description: Option<String>,
}

impl From<ObjectiveArgs> for SetObjective {
    fn from(val: ObjectiveArgs) -> Self {
        SetObjective {
            name: val.name,
            description: val.description,
        }
    }
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    #[arg(help = "Case-insensitive text matched against names and descriptions")]
    pub term: Option<String>,
}

impl From<SearchArgs> for SearchPersonas {
    fn from(val: SearchArgs) -> Self {
        SearchPersonas {
            term: val.term.unwrap_or_default(),
        }
    }
}

#[derive(Args, Debug)]
pub struct CreatePersonaArgs {
    pub name: String,
    pub description: String,
}

impl From<CreatePersonaArgs> for CreatePersona {
    fn from(val: CreatePersonaArgs) -> Self {
        CreatePersona {
            name: val.name,
            description: val.description,
        }
    }
}

#[derive(Args, Debug)]
pub struct PersonaIdArgs {
    #[arg(help = "Persona ID as shown by `search`")]
    pub id: u64,
}

impl From<PersonaIdArgs> for Id {
    fn from(val: PersonaIdArgs) -> Self {
        Id { id: val.id }
    }
}

/// Task entry fields as accepted on the command line
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum TaskFieldArg {
    Task,
    Results,
}

impl From<TaskFieldArg> for TaskField {
    fn from(val: TaskFieldArg) -> Self {
        match val {
            TaskFieldArg::Task => TaskField::Task,
            TaskFieldArg::Results => TaskField::ExpectedResults,
        }
    }
}

#[derive(Args, Debug)]
pub struct TaskArgs {
    #[arg(help = "ID of a selected persona")]
    pub persona_id: u64,
    #[arg(value_enum)]
    pub field: TaskFieldArg,
    pub value: String,
}

impl From<TaskArgs> for UpdateTask {
    fn from(val: TaskArgs) -> Self {
        UpdateTask {
            persona_id: val.persona_id,
            field: val.field.into(),
            value: val.value,
        }
    }
}

/// Workplan step fields as accepted on the command line
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum StepFieldArg {
    Action,
    Duration,
}

impl From<StepFieldArg> for StepField {
    fn from(val: StepFieldArg) -> Self {
        match val {
            StepFieldArg::Action => StepField::Action,
            StepFieldArg::Duration => StepField::Duration,
        }
    }
}

#[derive(Args, Debug)]
pub struct BackArgs {
    #[arg(help = "Step to return to by number or name (default: the previous step)")]
    pub step: Option<WizardStep>,
}

#[derive(Args, Debug)]
pub struct EditStepArgs {
    #[arg(help = "Persona plan number as shown in the workplan (1 = first)")]
    pub plan: usize,
    #[arg(help = "Step position within the plan (1 = first)")]
    pub step: usize,
    #[arg(value_enum)]
    pub field: StepFieldArg,
    pub value: String,
}

impl TryFrom<EditStepArgs> for EditStep {
    type Error = anyhow::Error;

    fn try_from(val: EditStepArgs) -> Result<Self> {
        Ok(EditStep {
            plan_index: to_index(val.plan, "plan")?,
            step_index: to_index(val.step, "step")?,
            field: val.field.into(),
            value: val.value,
        })
    }
}

#[derive(Args, Debug)]
pub struct AddStepArgs {
    #[arg(help = "Persona plan number as shown in the workplan (1 = first)")]
    pub plan: usize,
}

impl TryFrom<AddStepArgs> for AddStep {
    type Error = anyhow::Error;

    fn try_from(val: AddStepArgs) -> Result<Self> {
        Ok(AddStep {
            plan_index: to_index(val.plan, "plan")?,
        })
    }
}

#[derive(Args, Debug)]
pub struct ExportArgs {
    #[arg(short, long, help = "Write to this file instead of standard output")]
    pub output: Option<PathBuf>,
}

/// Converts a 1-based position typed by the user to a 0-based index.
fn to_index(position: usize, what: &str) -> Result<usize> {
    position
        .checked_sub(1)
        .ok_or_else(|| anyhow!("{what} numbers start at 1"))
}

fn task_field_label(field: TaskField) -> &'static str {
    match field {
        TaskField::Task => "task",
        TaskField::ExpectedResults => "expected results",
    }
}

/// Whether the shell should keep reading input after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Applies shell commands to a session and renders the outcome
pub struct Cli {
    session: Session,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(session: Session, renderer: TerminalRenderer) -> Self {
        Self { session, renderer }
    }

    #[cfg(test)]
    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn renderer(&self) -> &TerminalRenderer {
        &self.renderer
    }

    /// Run one command against the session.
    pub fn handle(&mut self, command: ShellCommand) -> Result<Flow> {
        debug!("Shell command: {command:?}");
        match command {
            ShellCommand::Objective(args) => {
                self.session.set_objective(&args.into());
                self.render(&self.session.objective().to_string())?;
            }
            ShellCommand::Search(args) => {
                let params: SearchPersonas = args.into();
                let found = Personas::from_refs(self.session.search_personas(&params.term));
                self.render(&found.to_string())?;
            }
            ShellCommand::Create(args) => {
                let persona = self.session.create_persona(&args.into())?;
                self.render(&CreateResult::new(persona).to_string())?;
            }
            ShellCommand::Select(args) => {
                let Id { id } = args.into();
                let changed = self.session.select_persona(id)?;
                self.status(OperationStatus::from_change(
                    changed,
                    format!("Selected persona {id}"),
                    format!("Persona {id} is already selected"),
                ))?;
            }
            ShellCommand::Deselect(args) => {
                let Id { id } = args.into();
                let changed = self.session.deselect_persona(id);
                self.status(OperationStatus::from_change(
                    changed,
                    format!("Removed persona {id} from the selection"),
                    format!("Persona {id} is not selected"),
                ))?;
            }
            ShellCommand::Task(args) => {
                let params: UpdateTask = args.into();
                let changed = self.session.update_task_field(&params);
                self.status(OperationStatus::from_change(
                    changed,
                    format!(
                        "Updated {} for persona {}",
                        task_field_label(params.field),
                        params.persona_id
                    ),
                    format!("Persona {} is not selected", params.persona_id),
                ))?;
            }
            ShellCommand::Next => {
                self.session.advance_to_step2()?;
                self.show()?;
            }
            ShellCommand::Back(args) => {
                let target = match args.step {
                    Some(step) => step,
                    None => self
                        .session
                        .current_step()
                        .previous()
                        .ok_or_else(|| anyhow!("Already on step 1"))?,
                };
                self.session.go_to_step(target)?;
                self.show()?;
            }
            ShellCommand::Generate => {
                let workplan = self.session.generate_workplan()?.to_string();
                self.render(&workplan)?;
            }
            ShellCommand::Edit(args) => {
                let field = args.field;
                let params = EditStep::try_from(args)?;
                let step = self.session.edit_generated_step(&params)?.clone();
                let change = match field {
                    StepFieldArg::Action => "Updated action",
                    StepFieldArg::Duration => "Updated duration",
                };
                self.render(&UpdateResult::with_changes(step, vec![change.to_string()]).to_string())?;
            }
            ShellCommand::AddStep(args) => {
                let step = self.session.add_generated_step(&AddStep::try_from(args)?)?.clone();
                self.render(&CreateResult::new(step).to_string())?;
            }
            ShellCommand::Export(args) => self.export(args.output)?,
            ShellCommand::Show => self.show()?,
            ShellCommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    /// Render the full session state.
    pub fn show(&self) -> Result<()> {
        self.render(&self.session.snapshot().to_string())
    }

    /// Render a listing of the catalog, optionally filtered.
    pub fn list_personas(&self, search: Option<&str>) -> Result<()> {
        let found = Personas::from_refs(self.session.search_personas(search.unwrap_or_default()));
        self.render(&format!("# Personas\n\n{found}"))
    }

    /// Render the template table.
    pub fn list_templates(&self) -> Result<()> {
        self.render(&format!("# Templates\n\n{}", self.session.generator().table()))
    }

    fn export(&self, output: Option<PathBuf>) -> Result<()> {
        match output {
            Some(path) => {
                // Session::export tolerates sink failures; a file export has
                // to report them.
                let document = self.session.assemble_export();
                let text = JsonEncoder.encode(&document).context("Failed to export")?;
                FileSink::new(&path)
                    .write_text(&text)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                info!(
                    "Exported {} personas to {}",
                    document.personas.len(),
                    path.display()
                );
                self.status(OperationStatus::success(format!(
                    "Exported {} personas to {}",
                    document.personas.len(),
                    path.display()
                )))
            }
            None => {
                self.session
                    .export(&JsonEncoder, &mut StdoutSink)
                    .context("Failed to export")?;
                Ok(())
            }
        }
    }

    fn status(&self, status: OperationStatus) -> Result<()> {
        self.render(&status.to_string())
    }

    fn render(&self, markdown: &str) -> Result<()> {
        self.renderer.render(markdown)
    }

    /// Prompt text reflecting the current wizard step.
    pub fn prompt(&self) -> String {
        format!("cadre[{}/3]> ", self.session.current_step())
    }
}
