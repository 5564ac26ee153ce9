//! Registry operations that take interface parameters.
//!
//! Both the CLI and the MCP server go through these methods, so a set of
//! answers is validated, filtered and turned into a prompt the same way
//! whichever surface it arrives on.

use log::debug;

use super::TemplateRegistry;
use crate::{
    display::TemplateSummaries,
    error::Result,
    form::FormController,
    models::{PlanTemplate, Values},
    params::{AnswerSet, ShowTemplate},
    payload::build_payload,
    prompt::PlanPrompt,
    validator::ValidationResult,
};

impl TemplateRegistry {
    /// Latest version of every template, wrapped for display.
    pub fn list_templates(&self) -> TemplateSummaries {
        TemplateSummaries(self.list())
    }

    /// Fetch the template named by `params`.
    ///
    /// # Errors
    ///
    /// Returns `TemplateError::NotFound` when nothing matches.
    pub fn show_template(&self, params: &ShowTemplate) -> Result<&PlanTemplate> {
        self.get(&params.id, params.version)
    }

    /// Validate an answer set against its template.
    ///
    /// Only visible fields are validated. With `params.step` set, only that
    /// step's fields are considered.
    ///
    /// # Errors
    ///
    /// Returns `TemplateError::NotFound` when the template does not exist.
    pub fn validate_answers(&self, params: &AnswerSet) -> Result<(&PlanTemplate, ValidationResult)> {
        let template = self.show_template(&params.template())?;
        let mut form = FormController::with_values(params.answers.clone());

        let result = match params.step {
            Some(step) => form.validate_step(template, step),
            None => form.validate_all(template),
        };

        debug!(
            "Validated answers for '{}' v{}: {} error(s)",
            template.id,
            template.version,
            result.errors.len()
        );
        Ok((template, result))
    }

    /// Filter an answer set down to the payload sent for plan creation.
    ///
    /// # Errors
    ///
    /// Returns `TemplateError::NotFound` when the template does not exist.
    pub fn build_payload(&self, params: &AnswerSet) -> Result<Values> {
        let template = self.show_template(&params.template())?;
        let form = FormController::with_values(params.answers.clone());
        Ok(build_payload(template, form.get_all_values(), |field| {
            form.is_field_visible(field)
        }))
    }

    /// Build the system and user prompts for an answer set.
    ///
    /// Answers are filtered exactly as in [`TemplateRegistry::build_payload`]
    /// first, so hidden or unknown answers never reach the prompt.
    ///
    /// # Errors
    ///
    /// Returns `TemplateError::NotFound` when the template does not exist.
    pub fn build_prompt(&self, params: &AnswerSet) -> Result<PlanPrompt> {
        let template = self.show_template(&params.template())?;
        let payload = self.build_payload(params)?;
        Ok(PlanPrompt::new(template, &payload))
    }
}
