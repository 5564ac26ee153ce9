//! Report wrappers for answer validation, template checks and prompts.

use std::fmt;

use crate::{models::PlanTemplate, prompt::PlanPrompt, validator::ValidationResult};

/// Validation outcome rendered against the template that produced it, so
/// errors can be listed under their field labels in template order.
pub struct ValidationReport<'a> {
    pub template: &'a PlanTemplate,
    pub result: &'a ValidationResult,
    /// Step the validation was limited to, if any
    pub step: Option<u32>,
}

impl<'a> ValidationReport<'a> {
    /// Create a report for a whole-template validation.
    pub fn new(template: &'a PlanTemplate, result: &'a ValidationResult) -> Self {
        Self {
            template,
            result,
            step: None,
        }
    }

    /// Mark the report as covering a single step.
    pub fn for_step(mut self, step: u32) -> Self {
        self.step = Some(step);
        self
    }
}

impl fmt::Display for ValidationReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scope = match self.step {
            Some(step) => format!("Step {step} of {}", self.template.meta.label),
            None => self.template.meta.label.clone(),
        };

        if self.result.is_valid {
            return writeln!(f, "✓ {scope}: all answers are valid.");
        }

        writeln!(
            f,
            "✗ {scope}: {} field(s) need attention",
            self.result.errors.len()
        )?;
        writeln!(f)?;

        for field in self.template.fields() {
            if let Some(message) = self.result.errors.get(&field.key) {
                writeln!(f, "- **{}** (`{}`): {message}", field.label, field.key)?;
            }
        }

        Ok(())
    }
}

/// Outcome of checking a template file.
pub struct CheckResult<'a> {
    pub template: &'a PlanTemplate,
}

impl<'a> CheckResult<'a> {
    pub fn new(template: &'a PlanTemplate) -> Self {
        Self { template }
    }
}

impl fmt::Display for CheckResult<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "✓ Template '{}' v{} is valid ({} steps, {} fields)",
            self.template.id,
            self.template.version,
            self.template.steps.len(),
            self.template.field_count()
        )
    }
}

impl fmt::Display for PlanPrompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## System prompt")?;
        writeln!(f)?;
        writeln!(f, "{}", self.system)?;
        writeln!(f)?;
        writeln!(f, "## User prompt")?;
        writeln!(f)?;
        writeln!(f, "```text")?;
        write!(f, "{}", self.user)?;
        writeln!(f, "```")
    }
}
