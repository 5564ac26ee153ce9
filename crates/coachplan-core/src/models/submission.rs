//! Submission and summary types.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{PlanTemplate, PlanType, Values};

/// Everything the plan-creation boundary needs for one finished questionnaire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    /// Id of the template the answers belong to
    pub template_id: String,
    /// Version of the template the answers belong to
    pub template_version: u32,
    /// Kind of plan requested
    pub plan_type: PlanType,
    /// Sanitized, visibility-filtered answers
    pub answers: Values,
    /// User prompt for the plan-generating model
    pub prompt: String,
    /// Timestamp when the submission was built (UTC)
    pub created_at: Timestamp,
}

/// Summary information about a template for listings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TemplateSummary {
    /// Template id
    pub id: String,
    /// Latest published version
    pub version: u32,
    /// Kind of plan produced
    pub plan_type: PlanType,
    /// Display label
    pub label: String,
    /// Optional description
    pub description: Option<String>,
    /// Number of wizard steps
    pub total_steps: u32,
    /// Number of questions across all steps
    pub total_fields: u32,
}

impl From<&PlanTemplate> for TemplateSummary {
    fn from(template: &PlanTemplate) -> Self {
        Self {
            id: template.id.clone(),
            version: template.version,
            plan_type: template.plan_type,
            label: template.meta.label.clone(),
            description: template.meta.description.clone(),
            total_steps: template.steps.len() as u32,
            total_fields: template.field_count() as u32,
        }
    }
}
