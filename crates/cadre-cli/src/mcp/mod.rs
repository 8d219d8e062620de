//! MCP server for the Cadre wizard
//!
//! Exposes one tool per wizard intent over a single in-memory session, so a
//! model can fill in the objective, pick personas, assign tasks and refine the
//! generated workplan the same way a user would in the shell.

use std::{future::Future, sync::Arc};

use anyhow::Result;
use cadre_core::Session;
use log::{debug, error, info};
use rmcp::{
    ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use tokio::{
    signal::unix::{SignalKind, signal},
    sync::Mutex,
};

pub mod errors;
pub mod handlers;

pub use handlers::{
    AddStep, CreatePersona, EditStep, GoToStep, Id, McpResult, SearchPersonas, SetObjective,
    UpdateTask,
};

/// MCP server for Cadre
#[derive(Clone)]
pub struct CadreMcpServer {
    session: Arc<Mutex<Session>>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl CadreMcpServer {
    /// Create a server around an existing session
    pub fn new(session: Session) -> Self {
        Self {
            session: Arc::new(Mutex::new(session)),
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> handlers::McpHandlers {
        handlers::McpHandlers::new(self.session.clone())
    }

    #[tool(
        name = "set_objective",
        description = "Set the objective name and/or description. Omitted fields keep their current value. A non-empty name is required before advancing to step 2."
    )]
    async fn set_objective(&self, params: Parameters<SetObjective>) -> McpResult {
        self.handlers().set_objective(params).await
    }

    #[tool(
        name = "search_personas",
        description = "Search the persona catalog by case-insensitive substring of name or description. An empty term returns every persona. Returns IDs for select_persona."
    )]
    async fn search_personas(&self, params: Parameters<SearchPersonas>) -> McpResult {
        self.handlers().search_personas(params).await
    }

    #[tool(
        name = "create_persona",
        description = "Add a persona to the catalog and select it. Name and description are both required. Returns the new persona ID."
    )]
    async fn create_persona(&self, params: Parameters<CreatePersona>) -> McpResult {
        self.handlers().create_persona(params).await
    }

    #[tool(
        name = "select_persona",
        description = "Select a catalog persona to work on the objective. Selecting an already selected persona changes nothing."
    )]
    async fn select_persona(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().select_persona(params).await
    }

    #[tool(
        name = "deselect_persona",
        description = "Remove a persona from the selection. Its task and expected results are discarded."
    )]
    async fn deselect_persona(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().deselect_persona(params).await
    }

    #[tool(
        name = "update_task",
        description = "Set the task or expected_results text of a selected persona. Used on step 2 before generating the workplan."
    )]
    async fn update_task(&self, params: Parameters<UpdateTask>) -> McpResult {
        self.handlers().update_task(params).await
    }

    #[tool(
        name = "advance",
        description = "Move from step 1 to step 2. Requires a non-empty objective name and at least one selected persona."
    )]
    async fn advance(&self) -> McpResult {
        self.handlers().advance().await
    }

    #[tool(
        name = "go_to_step",
        description = "Go back exactly one step (3 to 2, or 2 to 1). Entered data and any generated workplan are kept."
    )]
    async fn go_to_step(&self, params: Parameters<GoToStep>) -> McpResult {
        self.handlers().go_to_step(params).await
    }

    #[tool(
        name = "generate_workplan",
        description = "On step 2, build a workplan with one plan per selected persona from the role templates and move to step 3. Regenerating replaces any earlier workplan and its edits."
    )]
    async fn generate_workplan(&self) -> McpResult {
        self.handlers().generate_workplan().await
    }

    #[tool(
        name = "edit_step",
        description = "Overwrite the action or duration of a generated step. plan_index and step_index are 0-based."
    )]
    async fn edit_step(&self, params: Parameters<EditStep>) -> McpResult {
        self.handlers().edit_step(params).await
    }

    #[tool(
        name = "add_step",
        description = "Append a blank step with a default duration of 1 hour to a generated persona plan. plan_index is 0-based."
    )]
    async fn add_step(&self, params: Parameters<AddStep>) -> McpResult {
        self.handlers().add_step(params).await
    }

    #[tool(
        name = "export",
        description = "Export the objective, selected personas with their tasks, and any generated workplan as JSON. Does not change the session."
    )]
    async fn export(&self) -> McpResult {
        self.handlers().export().await
    }

    #[tool(
        name = "show_session",
        description = "Show the current step, objective, selected personas with their tasks, and the workplan once generated."
    )]
    async fn show_session(&self) -> McpResult {
        self.handlers().show_session().await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for CadreMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(r#"Cadre plans an objective across personas (named roles such as Law Librarian or Legal Analyst) and produces a per-persona workplan of timed steps.

## Workflow
1. Step 1: `set_objective` with a name, `search_personas` and `select_persona` (or `create_persona`), then `advance`
2. Step 2: `update_task` for each selected persona (task and expected_results), then `generate_workplan`
3. Step 3: review, `edit_step` and `add_step` as needed, then `export`

Use `show_session` at any point to see the current state and `go_to_step` to go back one step."#.to_string()),
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: CadreMcpServer) -> Result<()> {
    use rmcp::{ServiceExt, transport::stdio};

    info!("Starting Cadre MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
