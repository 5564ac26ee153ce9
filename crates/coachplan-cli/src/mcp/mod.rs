//! MCP server implementation for Coachplan
//!
//! Exposes template listing, answer validation, payload building and prompt
//! building as Model Context Protocol tools, so an AI assistant can run the
//! questionnaire conversationally and hand back checked answers.

use std::{future::Future, sync::Arc};

use anyhow::Result;
use coachplan_core::TemplateRegistry;
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, tool::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use tokio::signal::unix::{signal, SignalKind};

pub mod errors;
pub mod handlers;

pub use handlers::{AnswerSet, McpResult, ShowTemplate};

/// MCP server for Coachplan
#[derive(Clone)]
pub struct CoachplanMcpServer {
    registry: Arc<TemplateRegistry>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl CoachplanMcpServer {
    /// Create a new Coachplan MCP server
    pub fn new(registry: TemplateRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> handlers::McpHandlers {
        handlers::McpHandlers::new(self.registry.clone())
    }

    #[tool(
        name = "list_templates",
        description = "List the available plan templates (latest version of each) with their id, version, plan type (workout or nutrition), number of steps and number of fields. Start here to pick a template id."
    )]
    async fn list_templates(&self) -> McpResult {
        self.handlers().list_templates()
    }

    #[tool(
        name = "show_template",
        description = "Show a plan template with every wizard step and field: key, label, type, whether it is required, options with their values, bounds, default value and the condition under which the field is shown. Omit version for the latest one."
    )]
    async fn show_template(&self, params: Parameters<ShowTemplate>) -> McpResult {
        self.handlers().show_template(params)
    }

    #[tool(
        name = "validate_answers",
        description = "Validate answers (an object keyed by field key, using option values rather than labels) against a template. Only fields that are currently visible are checked. Set step to check a single wizard step. Returns every field that needs attention with its message."
    )]
    async fn validate_answers(&self, params: Parameters<AnswerSet>) -> McpResult {
        self.handlers().validate_answers(params)
    }

    #[tool(
        name = "build_payload",
        description = "Filter answers down to the payload sent for plan creation: unknown keys, empty answers and answers to hidden fields are dropped, and keys follow template order. Returns JSON."
    )]
    async fn build_payload(&self, params: Parameters<AnswerSet>) -> McpResult {
        self.handlers().build_payload(params)
    }

    #[tool(
        name = "build_prompt",
        description = "Build the system prompt and the user prompt for the plan-generating model from a set of answers. The user prompt lists the preferences followed by the coaching guidelines of every answered field."
    )]
    async fn build_prompt(&self, params: Parameters<AnswerSet>) -> McpResult {
        self.handlers().build_prompt(params)
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for CoachplanMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "coachplan".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            instructions: Some(r#"Coachplan turns plan templates into checked answers and prompts for personalized workout and nutrition plans.

## Core Concepts
- **Templates**: versioned multi-step questionnaires, identified by id and version
- **Fields**: typed questions (single_select, multi_select, number, boolean, text, date) keyed by a unique key
- **Visibility**: some fields are only shown when an earlier answer has one of a set of values; hidden fields are neither validated nor sent

## Workflow
1. Use `list_templates` to find the template for the user's goal
2. Use `show_template` to read its steps, options and conditions
3. Ask the user the visible questions step by step and check each step with `validate_answers` (set `step`)
4. Run `validate_answers` without `step` before finishing
5. Use `build_payload` for the answers to store and `build_prompt` for the plan-generating model

## Answer Format
Answers are a JSON object keyed by field key. Select fields take option values, not labels; multi_select fields take a list of option values."#.to_string()),
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: CoachplanMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting Coachplan MCP server on stdio");
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
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
