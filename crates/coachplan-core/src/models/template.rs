//! Plan template model definition and related functionality.

use serde::{Deserialize, Serialize};

use super::{FieldDefinition, PlanType};
use crate::error::Result;

/// Versioned, declarative description of a multi-step questionnaire.
///
/// A published template is never mutated: a new version is a new template
/// instance. Identity is the `(id, version)` pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlanTemplate {
    /// Stable identifier shared by all versions
    pub id: String,

    /// Version number, unique per id
    pub version: u32,

    /// Kind of plan this questionnaire produces
    pub plan_type: PlanType,

    /// Display metadata
    pub meta: TemplateMeta,

    /// Wizard steps in navigation order
    pub steps: Vec<StepDefinition>,
}

/// Display metadata for a template.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TemplateMeta {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// One page of the wizard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StepDefinition {
    /// Ordinal of the step within the template
    pub step: u32,

    /// Title of the step
    pub label: String,

    /// Optional helper text for the step
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Questions in display order
    #[serde(default)]
    pub fields: Vec<FieldDefinition>,
}

impl PlanTemplate {
    /// Parse a template from JSON and run the schema check.
    ///
    /// # Errors
    ///
    /// Returns `TemplateError::Serialization` when the JSON does not match the
    /// template shape, or the schema error reported by [`PlanTemplate::check`].
    pub fn from_json(json: &str) -> Result<Self> {
        let template: PlanTemplate = serde_json::from_str(json)?;
        template.check()?;
        Ok(template)
    }

    /// All fields of the template in step order, then field order.
    pub fn fields(&self) -> impl Iterator<Item = &FieldDefinition> {
        self.steps.iter().flat_map(|step| step.fields.iter())
    }

    /// Look up a field by key.
    pub fn field(&self, key: &str) -> Option<&FieldDefinition> {
        self.fields().find(|field| field.key == key)
    }

    /// Look up a step by its ordinal.
    pub fn step(&self, ordinal: u32) -> Option<&StepDefinition> {
        self.steps.iter().find(|step| step.step == ordinal)
    }

    /// Number of fields across all steps.
    pub fn field_count(&self) -> usize {
        self.steps.iter().map(|step| step.fields.len()).sum()
    }
}
