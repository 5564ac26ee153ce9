//! Session state for one plan-creation dialog.
//!
//! A [`FormController`] is created when a creation dialog opens, mutated by
//! user input, and dropped when the dialog closes or the plan is submitted.
//! Nothing in it is persisted.
//!
//! Errors are advisory. Writing a value clears the error that described the
//! old value, and each validation call replaces the whole error map, so the
//! errors on screen always belong to the last validated step.
//!
//! ```rust
//! use coachplan_core::{
//!     form::FormController,
//!     models::{FieldDefinition, FieldType},
//! };
//! use serde_json::json;
//!
//! let name = FieldDefinition::new("name", "Name", FieldType::Text).required();
//! let mut form = FormController::new();
//!
//! let result = form.validate_fields([&name]);
//! assert_eq!(form.get_error("name"), Some("Name is required"));
//! assert!(!result.is_valid);
//!
//! form.set_value("name", json!("Sam"));
//! assert_eq!(form.get_error("name"), None);
//! assert!(form.validate_fields([&name]).is_valid);
//! ```

use serde_json::Value;

use crate::{
    models::{FieldDefinition, PlanTemplate, StepDefinition, Values},
    payload::derive_initial_values,
    validator::{validate, FieldErrors, ValidationResult},
    visibility::is_visible,
};


/// Mutable values and errors for a plan instance being filled in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormController {
    values: Values,
    errors: FieldErrors,
}

impl FormController {
    /// Create an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a form seeded with the given values.
    pub fn with_values(values: Values) -> Self {
        Self {
            values,
            errors: FieldErrors::new(),
        }
    }

    /// Create a form seeded from the template's default values.
    pub fn for_template(template: &PlanTemplate) -> Self {
        Self::with_values(derive_initial_values(template))
    }

    /// Current value of a field; `None` means unanswered.
    pub fn get_value(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// All current values in insertion order.
    pub fn get_all_values(&self) -> &Values {
        &self.values
    }

    /// Write a value and drop any error recorded for that field.
    pub fn set_value(&mut self, key: impl Into<String>, value: Value) {
        let key = key.into();
        self.errors.remove(&key);
        self.values.insert(key, value);
    }

    /// Mark a field as unanswered and drop any error recorded for it.
    pub fn clear_value(&mut self, key: &str) -> Option<Value> {
        self.errors.remove(key);
        self.values.remove(key)
    }

    /// Error message recorded for a field by the last validation.
    pub fn get_error(&self, key: &str) -> Option<&str> {
        self.errors.get(key).map(String::as_str)
    }

    /// All errors recorded by the last validation.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Replace every value and clear every error.
    ///
    /// Used when a creation flow restarts or a different template is loaded.
    pub fn reset(&mut self, next_values: Option<Values>) {
        self.values = next_values.unwrap_or_default();
        self.errors.clear();
    }

    /// Whether the field is shown given the current values.
    pub fn is_field_visible(&self, field: &FieldDefinition) -> bool {
        is_visible(field, &self.values)
    }

    /// Fields of a step that are currently shown.
    pub fn visible_fields<'a>(
        &'a self,
        step: &'a StepDefinition,
    ) -> impl Iterator<Item = &'a FieldDefinition> + 'a {
        step.fields.iter().filter(|field| self.is_field_visible(field))
    }

    /// Validate the visible members of `subset` and replace the error map.
    ///
    /// Errors for fields outside `subset` are discarded, not merged.
    pub fn validate_fields<'a>(
        &mut self,
        subset: impl IntoIterator<Item = &'a FieldDefinition>,
    ) -> ValidationResult {
        let visible: Vec<&FieldDefinition> = subset
            .into_iter()
            .filter(|field| self.is_field_visible(field))
            .collect();

        let result = validate(visible, &self.values);
        self.errors = result.errors.clone();
        result
    }

    /// Validate one wizard step. An unknown ordinal validates nothing and
    /// clears the errors.
    pub fn validate_step(&mut self, template: &PlanTemplate, ordinal: u32) -> ValidationResult {
        let fields = template
            .step(ordinal)
            .map(|step| step.fields.as_slice())
            .unwrap_or_default();
        self.validate_fields(fields)
    }

    /// Validate every step of the template at once, as done before submission.
    pub fn validate_all(&mut self, template: &PlanTemplate) -> ValidationResult {
        self.validate_fields(template.fields())
    }
}
