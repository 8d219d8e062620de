//! MCP tool handlers implementation

use std::sync::Arc;

use cadre_core::{
    JsonEncoder, MemorySink, Session, WizardError, WizardStep,
    display::{CreateResult, OperationStatus, Personas, UpdateResult},
    params as core,
};
use log::debug;
use rmcp::{
    ErrorData as McpError,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tokio::sync::Mutex;

use super::errors::to_mcp_error;

// The wrapper keeps the core parameter types free of MCP concerns: it is
// transparent for serde and forwards the schema of the wrapped type, so the
// client sees exactly the core type's shape.

/// Generic MCP wrapper for core parameter types with serde integration
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

pub type Id = McpParams<core::Id>;
pub type SetObjective = McpParams<core::SetObjective>;
pub type SearchPersonas = McpParams<core::SearchPersonas>;
pub type CreatePersona = McpParams<core::CreatePersona>;
pub type UpdateTask = McpParams<core::UpdateTask>;
pub type GoToStep = McpParams<core::GoToStep>;
pub type EditStep = McpParams<core::EditStep>;
pub type AddStep = McpParams<core::AddStep>;

pub type McpResult = Result<CallToolResult, McpError>;

fn text(body: impl ToString) -> McpResult {
    Ok(CallToolResult::success(vec![Content::text(body.to_string())]))
}

/// Handler implementations for the MCP server
pub struct McpHandlers {
    session: Arc<Mutex<Session>>,
}

impl McpHandlers {
    pub fn new(session: Arc<Mutex<Session>>) -> Self {
        Self { session }
    }

    pub async fn set_objective(&self, Parameters(params): Parameters<SetObjective>) -> McpResult {
        debug!("set_objective: {params:?}");
        let mut session = self.session.lock().await;
        session.set_objective(params.as_ref());
        text(session.objective())
    }

    pub async fn search_personas(
        &self,
        Parameters(params): Parameters<SearchPersonas>,
    ) -> McpResult {
        debug!("search_personas: {params:?}");
        let session = self.session.lock().await;
        let found = Personas::from_refs(session.search_personas(&params.as_ref().term));
        text(found)
    }

    pub async fn create_persona(&self, Parameters(params): Parameters<CreatePersona>) -> McpResult {
        debug!("create_persona: {params:?}");
        let persona = self
            .session
            .lock()
            .await
            .create_persona(params.as_ref())
            .map_err(|e| to_mcp_error("Failed to create persona", &e))?;
        text(CreateResult::new(persona))
    }

    pub async fn select_persona(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("select_persona: {params:?}");
        let id = params.as_ref().id;
        let changed = self
            .session
            .lock()
            .await
            .select_persona(id)
            .map_err(|e| to_mcp_error("Failed to select persona", &e))?;
        text(OperationStatus::from_change(
            changed,
            format!("Selected persona {id}"),
            format!("Persona {id} is already selected"),
        ))
    }

    pub async fn deselect_persona(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("deselect_persona: {params:?}");
        let id = params.as_ref().id;
        let changed = self.session.lock().await.deselect_persona(id);
        text(OperationStatus::from_change(
            changed,
            format!("Removed persona {id} from the selection"),
            format!("Persona {id} is not selected"),
        ))
    }

    pub async fn update_task(&self, Parameters(params): Parameters<UpdateTask>) -> McpResult {
        debug!("update_task: {params:?}");
        let params = params.as_ref();
        let changed = self.session.lock().await.update_task_field(params);
        text(OperationStatus::from_change(
            changed,
            format!("Updated persona {}", params.persona_id),
            format!("Persona {} is not selected", params.persona_id),
        ))
    }

    pub async fn advance(&self) -> McpResult {
        let mut session = self.session.lock().await;
        session
            .advance_to_step2()
            .map_err(|e| to_mcp_error("Failed to advance", &e))?;
        text(session.snapshot())
    }

    pub async fn go_to_step(&self, Parameters(params): Parameters<GoToStep>) -> McpResult {
        debug!("go_to_step: {params:?}");
        let number = params.as_ref().step;
        let target = WizardStep::from_number(number).ok_or_else(|| {
            to_mcp_error(
                "Failed to change step",
                &WizardError::invalid_input("step").with_reason(format!("{number} is not 1, 2 or 3")),
            )
        })?;

        let mut session = self.session.lock().await;
        session
            .go_to_step(target)
            .map_err(|e| to_mcp_error("Failed to change step", &e))?;
        text(session.snapshot())
    }

    pub async fn generate_workplan(&self) -> McpResult {
        let mut session = self.session.lock().await;
        let workplan = session
            .generate_workplan()
            .map_err(|e| to_mcp_error("Failed to generate workplan", &e))?;
        text(workplan)
    }

    pub async fn edit_step(&self, Parameters(params): Parameters<EditStep>) -> McpResult {
        debug!("edit_step: {params:?}");
        let mut session = self.session.lock().await;
        let step = session
            .edit_generated_step(params.as_ref())
            .map_err(|e| to_mcp_error("Failed to edit step", &e))?;
        text(UpdateResult::new(step.clone()))
    }

    pub async fn add_step(&self, Parameters(params): Parameters<AddStep>) -> McpResult {
        debug!("add_step: {params:?}");
        let mut session = self.session.lock().await;
        let step = session
            .add_generated_step(params.as_ref())
            .map_err(|e| to_mcp_error("Failed to add step", &e))?;
        text(CreateResult::new(step.clone()))
    }

    pub async fn export(&self) -> McpResult {
        let mut sink = MemorySink::default();
        self.session
            .lock()
            .await
            .export(&JsonEncoder, &mut sink)
            .map_err(|e| to_mcp_error("Failed to export", &e))?;
        text(sink.writes.concat())
    }

    pub async fn show_session(&self) -> McpResult {
        text(self.session.lock().await.snapshot())
    }
}

#[cfg(test)]
mod tests {
    use cadre_core::{ExportDocument, StepField, TaskField};
    use rmcp::model::ErrorCode;

    use super::*;

    fn handlers() -> (McpHandlers, Arc<Mutex<Session>>) {
        let session = Arc::new(Mutex::new(Session::default()));
        (McpHandlers::new(session.clone()), session)
    }

    fn params<T: JsonSchema>(inner: T) -> Parameters<McpParams<T>> {
        Parameters(McpParams(inner))
    }

    async fn ready_for_step2(handlers: &McpHandlers) {
        handlers
            .set_objective(params(core::SetObjective {
                name: Some("Rule tracking".to_string()),
                description: None,
            }))
            .await
            .expect("set objective");
        handlers
            .select_persona(params(core::Id { id: 2 }))
            .await
            .expect("select");
    }

    #[tokio::test]
    async fn test_tools_drive_the_wizard() {
        let (handlers, session) = handlers();
        ready_for_step2(&handlers).await;
        handlers.advance().await.expect("advance");
        handlers
            .update_task(params(core::UpdateTask {
                persona_id: 2,
                field: TaskField::Task,
                value: "Compare versions".to_string(),
            }))
            .await
            .expect("update task");
        handlers.generate_workplan().await.expect("generate");
        handlers
            .edit_step(params(core::EditStep {
                plan_index: 0,
                step_index: 0,
                field: StepField::Duration,
                value: "3 hours".to_string(),
            }))
            .await
            .expect("edit");
        handlers
            .add_step(params(core::AddStep { plan_index: 0 }))
            .await
            .expect("add step");

        let session = session.lock().await;
        assert_eq!(session.current_step(), WizardStep::Review);
        let plan = &session.workplan().expect("workplan").persona_plans[0];
        assert_eq!(plan.steps[0].duration_label, "3 hours");
        assert_eq!(plan.steps[3].action, "Compare versions");
        assert_eq!(plan.steps.last().map(|s| s.step_number), Some(6));
    }

    #[tokio::test]
    async fn test_gate_rejection_is_invalid_params() {
        let (handlers, session) = handlers();
        let err = handlers.advance().await.unwrap_err();
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
        assert_eq!(session.lock().await.current_step(), WizardStep::Objective);
    }

    #[tokio::test]
    async fn test_unknown_persona_is_invalid_params() {
        let (handlers, _) = handlers();
        let err = handlers
            .select_persona(params(core::Id { id: 99 }))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
    }

    #[tokio::test]
    async fn test_go_to_step_rejects_out_of_range_numbers() {
        let (handlers, _) = handlers();
        let err = handlers
            .go_to_step(params(core::GoToStep { step: 7 }))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
        assert!(err.message.contains("7 is not 1, 2 or 3"));
    }

    #[tokio::test]
    async fn test_export_leaves_session_unchanged() {
        let (handlers, session) = handlers();
        ready_for_step2(&handlers).await;
        handlers.export().await.expect("export");

        let session = session.lock().await;
        let document: ExportDocument = session.assemble_export();
        assert_eq!(document.objective_name, "Rule tracking");
        assert_eq!(document.personas.len(), 1);
        assert!(!document.personas[0].has_plan());
        assert_eq!(session.current_step(), WizardStep::Objective);
    }
}
