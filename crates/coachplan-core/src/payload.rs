//! Answer payload building.
//!
//! These functions are the sanitization boundary in front of persistence and
//! prompt building: only keys the template declares ever leave the form, and
//! [`build_payload`] additionally drops answers to questions the user can no
//! longer see.

use crate::models::{FieldDefinition, PlanTemplate, Values};

/// Collapse form values into the payload sent for plan creation.
///
/// A key is kept when it belongs to the template, `is_visible` accepts its
/// field, and it has a value (absent and `null` values are dropped). Keys
/// come out in template order.
///
/// # Examples
///
/// ```rust
/// use coachplan_core::{
///     models::{FieldDefinition, FieldType, PlanTemplate, PlanType, StepDefinition, TemplateMeta, Values},
///     payload::build_payload,
///     visibility::is_visible,
/// };
/// use serde_json::json;
///
/// let template = PlanTemplate {
///     id: "demo".into(),
///     version: 1,
///     plan_type: PlanType::Workout,
///     meta: TemplateMeta { label: "Demo".into(), description: None },
///     steps: vec![StepDefinition {
///         step: 1,
///         label: "Only step".into(),
///         description: None,
///         fields: vec![
///             FieldDefinition::new("a", "A", FieldType::Text),
///             FieldDefinition::new("b", "B", FieldType::Text).visible_when("a", ["yes"]),
///         ],
///     }],
/// };
///
/// let mut values = Values::new();
/// values.insert("a".into(), json!("no"));
/// values.insert("b".into(), json!("leftover"));
/// values.insert("stray".into(), json!(1));
///
/// let payload = build_payload(&template, &values, |field| is_visible(field, &values));
/// assert_eq!(serde_json::Value::Object(payload), json!({ "a": "no" }));
/// ```
pub fn build_payload<F>(template: &PlanTemplate, values: &Values, is_visible: F) -> Values
where
    F: Fn(&FieldDefinition) -> bool,
{
    template
        .fields()
        .filter(|&field| is_visible(field))
        .filter_map(|field| answered(field, values))
        .collect()
}

/// Default values declared by the template, used to seed a new form.
pub fn derive_initial_values(template: &PlanTemplate) -> Values {
    template
        .fields()
        .filter_map(|field| {
            field
                .default_value
                .as_ref()
                .map(|value| (field.key.clone(), value.clone()))
        })
        .collect()
}

/// Keep only the answers whose keys the template declares.
///
/// Unlike [`build_payload`] this ignores visibility; it guards answers that
/// never passed through a form controller, such as a re-submission.
pub fn sanitize_answers(template: &PlanTemplate, answers: &Values) -> Values {
    template
        .fields()
        .filter_map(|field| answered(field, answers))
        .collect()
}

fn answered(field: &FieldDefinition, values: &Values) -> Option<(String, serde_json::Value)> {
    values
        .get(&field.key)
        .filter(|value| !value.is_null())
        .map(|value| (field.key.clone(), value.clone()))
}
