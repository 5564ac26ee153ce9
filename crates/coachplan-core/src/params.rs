//! Parameter structures shared by the CLI and the MCP server.
//!
//! These are plain serde types with no interface-specific derives. Each
//! interface wraps them in its own type: the CLI converts clap `Args` into
//! them with `From`, the MCP server wraps them in a transparent newtype that
//! adds a JSON schema. With the `schema` feature enabled the structures
//! derive `schemars::JsonSchema` themselves.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::models::Values;

/// Parameters for looking up a single template.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ShowTemplate {
    /// Template id, e.g. "workout"
    pub id: String,
    /// Exact version to fetch; the latest version when omitted
    #[serde(default)]
    pub version: Option<u32>,
}

/// A set of answers to run against a template.
///
/// Used by answer validation, payload building and prompt building.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct AnswerSet {
    /// Template id the answers belong to
    pub template_id: String,
    /// Template version; the latest version when omitted
    #[serde(default)]
    pub version: Option<u32>,
    /// Answers keyed by field key
    #[serde(default)]
    pub answers: Values,
    /// Limit validation to one wizard step; every step when omitted
    #[serde(default)]
    pub step: Option<u32>,
}

impl AnswerSet {
    /// Template lookup parameters for this answer set.
    pub fn template(&self) -> ShowTemplate {
        ShowTemplate {
            id: self.template_id.clone(),
            version: self.version,
        }
    }
}
