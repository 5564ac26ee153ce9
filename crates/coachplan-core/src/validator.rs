//! Per-field validation driven by the template schema.
//!
//! The same rules back the interactive form and the server-side re-check of
//! a submitted payload, so nothing is trusted just because a client already
//! validated it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::{FieldDefinition, FieldType, Values};

/// Validation messages keyed by field key.
pub type FieldErrors = BTreeMap<String, String>;

/// Outcome of validating a set of fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: FieldErrors,
}

impl ValidationResult {
    fn from_errors(errors: FieldErrors) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}

/// Validate `values` against exactly the given fields.
///
/// Callers filter by visibility first: hidden fields are never validated
/// nor required. Each invalid field gets one message, from the first rule it
/// violates.
///
/// # Examples
///
/// ```rust
/// use coachplan_core::{
///     models::{FieldDefinition, FieldType, Values},
///     validator::validate,
/// };
/// use serde_json::json;
///
/// let weight = FieldDefinition::new("weight", "Body weight", FieldType::Number)
///     .required()
///     .with_bounds(Some(30.0), Some(250.0));
///
/// let mut values = Values::new();
/// values.insert("weight".into(), json!(20));
///
/// let result = validate([&weight], &values);
/// assert!(!result.is_valid);
/// assert_eq!(result.errors["weight"], "Body weight must be at least 30");
/// ```
pub fn validate<'a>(
    fields: impl IntoIterator<Item = &'a FieldDefinition>,
    values: &Values,
) -> ValidationResult {
    let errors = fields
        .into_iter()
        .filter_map(|field| {
            validate_field(field, values.get(&field.key))
                .map(|message| (field.key.clone(), message))
        })
        .collect();

    ValidationResult::from_errors(errors)
}

/// Validate a single candidate value, returning the first violated rule.
///
/// `None` and JSON `null` both mean "not answered".
pub fn validate_field(field: &FieldDefinition, value: Option<&Value>) -> Option<String> {
    let value = value.filter(|value| !value.is_null());

    match field.field_type {
        FieldType::Text | FieldType::Date => validate_text(field, value),
        FieldType::SingleSelect => validate_single_select(field, value),
        FieldType::Number => validate_number(field, value),
        FieldType::Boolean => validate_boolean(field, value),
        FieldType::MultiSelect => validate_multi_select(field, value),
        FieldType::Unknown => None,
    }
}

fn required(field: &FieldDefinition) -> String {
    format!("{} is required", field.label)
}

/// Text, date and single-select answers must be non-empty trimmed strings
/// to satisfy `required`. Optional fields only treat missing or blank
/// strings as unanswered.
fn is_blank(field: &FieldDefinition, value: Option<&Value>) -> bool {
    match value {
        None => true,
        Some(Value::String(text)) => text.trim().is_empty(),
        Some(_) => field.required,
    }
}

fn validate_text(field: &FieldDefinition, value: Option<&Value>) -> Option<String> {
    if is_blank(field, value) {
        return field.required.then(|| required(field));
    }
    match value {
        Some(Value::String(_)) => None,
        _ => Some(format!("{} must be text", field.label)),
    }
}

fn validate_single_select(field: &FieldDefinition, value: Option<&Value>) -> Option<String> {
    if is_blank(field, value) {
        return field.required.then(|| required(field));
    }
    match value {
        Some(value) if field.has_option(value) => None,
        _ => Some(format!("{} has an invalid selection", field.label)),
    }
}

fn validate_number(field: &FieldDefinition, value: Option<&Value>) -> Option<String> {
    let Some(value) = value else {
        return field.required.then(|| required(field));
    };
    let Some(number) = value.as_f64() else {
        return Some(format!("{} must be a number", field.label));
    };

    if let Some(min) = field.min() {
        if number < min {
            return Some(format!("{} must be at least {}", field.label, min));
        }
    }
    if let Some(max) = field.max() {
        if number > max {
            return Some(format!("{} must be at most {}", field.label, max));
        }
    }

    None
}

fn validate_boolean(field: &FieldDefinition, value: Option<&Value>) -> Option<String> {
    match value {
        None => field.required.then(|| required(field)),
        Some(Value::Bool(_)) => None,
        Some(_) => Some(format!("{} must be true or false", field.label)),
    }
}

fn validate_multi_select(field: &FieldDefinition, value: Option<&Value>) -> Option<String> {
    let selected = match value {
        None => &[][..],
        Some(Value::Array(items)) => items.as_slice(),
        Some(_) => return Some(format!("{} must be a list", field.label)),
    };

    if selected.is_empty() {
        return field.required.then(|| required(field));
    }

    let count = selected.len() as f64;
    if let Some(min) = field.min() {
        if count < min {
            return Some(format!("Select at least {} for {}", min, field.label));
        }
    }
    if let Some(max) = field.max() {
        if count > max {
            return Some(format!("Select at most {} for {}", max, field.label));
        }
    }

    if selected.iter().any(|item| !field.has_option(item)) {
        return Some(format!("{} has an invalid selection", field.label));
    }

    None
}
