//! Load-time structural checks for plan templates.
//!
//! A template that passes [`PlanTemplate::check`] can be handed to the form
//! controller, validator and builders without any of them meeting a dangling
//! reference or an impossible widget further down the line.

use std::collections::HashSet;

use crate::{
    error::{Result, TemplateError},
    models::{FieldDefinition, PlanTemplate},
};

impl PlanTemplate {
    /// Check the structural invariants of the template.
    ///
    /// Fields are walked in step order, so "defined earlier" for visibility
    /// rules means an earlier step, or an earlier position in the same step.
    ///
    /// # Errors
    ///
    /// * `TemplateError::Invalid` - empty id, no steps, duplicate step
    ///   ordinal, empty `showWhen` or duplicate option values
    /// * `TemplateError::DuplicateKey` - a key is declared twice
    /// * `TemplateError::UnknownDependency` - `dependsOn` names no field
    /// * `TemplateError::ForwardDependency` - `dependsOn` names the field
    ///   itself or a later one
    /// * `TemplateError::MissingOptions` - select field without options
    /// * `TemplateError::IncompatibleComponent` - `ui.component` not valid for
    ///   the field type
    /// * `TemplateError::InvalidBounds` - `ui.min` greater than `ui.max`
    pub fn check(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(TemplateError::invalid("<unnamed>").with_reason("template id is empty"));
        }
        if self.steps.is_empty() {
            return Err(TemplateError::invalid(&self.id).with_reason("template has no steps"));
        }

        let mut ordinals = HashSet::new();
        for step in &self.steps {
            if !ordinals.insert(step.step) {
                return Err(TemplateError::invalid(&self.id)
                    .with_reason(format!("step {} is declared more than once", step.step)));
            }
        }

        let all_keys: HashSet<&str> = self.fields().map(|field| field.key.as_str()).collect();
        let mut seen: HashSet<&str> = HashSet::new();

        for field in self.fields() {
            if !seen.insert(field.key.as_str()) {
                return Err(TemplateError::DuplicateKey {
                    template: self.id.clone(),
                    key: field.key.clone(),
                });
            }
            self.check_visibility(field, &seen, &all_keys)?;
            self.check_options(field)?;
            self.check_ui(field)?;
        }

        Ok(())
    }

    fn check_visibility(
        &self,
        field: &FieldDefinition,
        seen: &HashSet<&str>,
        all_keys: &HashSet<&str>,
    ) -> Result<()> {
        let Some(visibility) = &field.visibility else {
            return Ok(());
        };

        let depends_on = visibility.depends_on.as_str();
        // `seen` already holds the field itself, so a self reference is caught
        // by the explicit equality test rather than the membership test.
        if depends_on == field.key || (all_keys.contains(depends_on) && !seen.contains(depends_on)) {
            return Err(TemplateError::ForwardDependency {
                template: self.id.clone(),
                key: field.key.clone(),
                depends_on: depends_on.to_string(),
            });
        }
        if !all_keys.contains(depends_on) {
            return Err(TemplateError::UnknownDependency {
                template: self.id.clone(),
                key: field.key.clone(),
                depends_on: depends_on.to_string(),
            });
        }
        if visibility.show_when.is_empty() {
            return Err(TemplateError::invalid(&self.id).with_reason(format!(
                "field '{}' has a visibility rule with an empty showWhen list",
                field.key
            )));
        }

        Ok(())
    }

    fn check_options(&self, field: &FieldDefinition) -> Result<()> {
        if field.field_type.has_options() && field.options.is_empty() {
            return Err(TemplateError::MissingOptions {
                template: self.id.clone(),
                key: field.key.clone(),
                field_type: field.field_type.to_string(),
            });
        }

        for (index, option) in field.options.iter().enumerate() {
            if field.options[..index].iter().any(|other| other.value == option.value) {
                return Err(TemplateError::invalid(&self.id).with_reason(format!(
                    "field '{}' declares option value {} more than once",
                    field.key, option.value
                )));
            }
        }

        Ok(())
    }

    fn check_ui(&self, field: &FieldDefinition) -> Result<()> {
        if let Some(component) = field.component() {
            if !component.supports(field.field_type) {
                return Err(TemplateError::IncompatibleComponent {
                    template: self.id.clone(),
                    key: field.key.clone(),
                    component: component.to_string(),
                    field_type: field.field_type.to_string(),
                });
            }
        }

        if let (Some(min), Some(max)) = (field.min(), field.max()) {
            if min > max {
                return Err(TemplateError::InvalidBounds {
                    template: self.id.clone(),
                    key: field.key.clone(),
                    min,
                    max,
                });
            }
        }

        Ok(())
    }
}
