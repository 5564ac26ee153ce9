//! Error handling utilities for MCP server

use coachplan_core::TemplateError;
use rmcp::ErrorData;

/// Helper to convert template errors to MCP errors.
///
/// Lookups that miss are the caller's fault and become `invalid_params`;
/// anything else is reported as an internal error.
pub fn to_mcp_error(message: &str, error: &TemplateError) -> ErrorData {
    match error {
        TemplateError::NotFound { .. } => {
            ErrorData::invalid_params(format!("{message}: {error}"), None)
        }
        _ => ErrorData::internal_error(format!("{message}: {error}"), None),
    }
}
