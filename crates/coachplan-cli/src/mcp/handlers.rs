//! MCP tool handlers implementation

use std::sync::Arc;

use coachplan_core::{display::ValidationReport, params as core, TemplateRegistry};
use log::debug;
use rmcp::{
    handler::server::tool::Parameters,
    model::{CallToolResult, Content},
    ErrorData,
};
use schemars::JsonSchema;
use serde::Deserialize;

use super::errors::to_mcp_error;

/// Generic MCP wrapper for core parameter types.
///
/// `#[serde(transparent)]` passes deserialization straight through to the
/// wrapped core type; the `JsonSchema` impl forwards to it as well, so the
/// tool schema is exactly the core parameter schema.
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

// Type aliases for cleaner usage in function signatures
pub type ShowTemplate = McpParams<core::ShowTemplate>;
pub type AnswerSet = McpParams<core::AnswerSet>;

pub type McpResult = Result<CallToolResult, ErrorData>;

/// Handler implementations for the MCP server
pub struct McpHandlers {
    registry: Arc<TemplateRegistry>,
}

impl McpHandlers {
    pub fn new(registry: Arc<TemplateRegistry>) -> Self {
        Self { registry }
    }

    pub fn list_templates(&self) -> McpResult {
        debug!("list_templates");

        let summaries = self.registry.list_templates();
        let title = if summaries.is_empty() {
            "No templates available"
        } else {
            "Templates"
        };

        Ok(text(format!("# {title}\n\n{summaries}")))
    }

    pub fn show_template(&self, Parameters(params): Parameters<ShowTemplate>) -> McpResult {
        debug!("show_template: {params:?}");

        let template = self
            .registry
            .show_template(params.as_ref())
            .map_err(|e| to_mcp_error("Failed to show template", &e))?;

        Ok(text(template.to_string()))
    }

    pub fn validate_answers(&self, Parameters(params): Parameters<AnswerSet>) -> McpResult {
        debug!("validate_answers: {params:?}");

        let params = params.as_ref();
        let (template, result) = self
            .registry
            .validate_answers(params)
            .map_err(|e| to_mcp_error("Failed to validate answers", &e))?;

        let mut report = ValidationReport::new(template, &result);
        if let Some(step) = params.step {
            report = report.for_step(step);
        }

        // Invalid answers are a normal outcome, reported as tool content.
        Ok(text(report.to_string()))
    }

    pub fn build_payload(&self, Parameters(params): Parameters<AnswerSet>) -> McpResult {
        debug!("build_payload: {params:?}");

        let payload = self
            .registry
            .build_payload(params.as_ref())
            .map_err(|e| to_mcp_error("Failed to build payload", &e))?;

        let json = serde_json::to_string_pretty(&payload)
            .map_err(|e| ErrorData::internal_error(format!("Failed to encode payload: {e}"), None))?;
        Ok(text(json))
    }

    pub fn build_prompt(&self, Parameters(params): Parameters<AnswerSet>) -> McpResult {
        debug!("build_prompt: {params:?}");

        let prompt = self
            .registry
            .build_prompt(params.as_ref())
            .map_err(|e| to_mcp_error("Failed to build prompt", &e))?;

        Ok(text(prompt.to_string()))
    }
}

fn text(body: String) -> CallToolResult {
    CallToolResult::success(vec![Content::text(body)])
}
