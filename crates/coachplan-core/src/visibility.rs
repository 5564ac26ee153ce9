//! Conditional visibility of fields.

use serde_json::Value;

use crate::models::{FieldDefinition, Values};

/// Whether `field` is shown given the current answers.
///
/// - A field without a visibility rule is always visible.
/// - A field whose controlling answer is unset (absent or `null`) is hidden.
/// - A list answer (multi-select dependency) reveals the field when any of
///   its elements is in `showWhen`.
/// - A scalar answer reveals the field when it is in `showWhen`.
///
/// # Examples
///
/// ```rust
/// use coachplan_core::{
///     models::{FieldDefinition, FieldType, Values},
///     visibility::is_visible,
/// };
/// use serde_json::json;
///
/// let field = FieldDefinition::new("surplus", "Calorie surplus", FieldType::Number)
///     .visible_when("goal", ["bulk"]);
///
/// let mut values = Values::new();
/// assert!(!is_visible(&field, &values));
///
/// values.insert("goal".into(), json!(["bulk", "cut"]));
/// assert!(is_visible(&field, &values));
///
/// values.insert("goal".into(), json!("cut"));
/// assert!(!is_visible(&field, &values));
/// ```
pub fn is_visible(field: &FieldDefinition, values: &Values) -> bool {
    let Some(rule) = &field.visibility else {
        return true;
    };

    match values.get(&rule.depends_on) {
        None | Some(Value::Null) => false,
        Some(Value::Array(selected)) => selected.iter().any(|item| rule.show_when.contains(item)),
        Some(scalar) => rule.show_when.contains(scalar),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::models::FieldType;

    fn dependent() -> FieldDefinition {
        FieldDefinition::new("b", "B", FieldType::Text).visible_when("a", ["yes"])
    }

    fn values(pairs: &[(&str, Value)]) -> Values {
        pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.clone()))
            .collect()
    }

    #[test]
    fn test_no_rule_is_visible() {
        let field = FieldDefinition::new("a", "A", FieldType::Text);
        assert!(is_visible(&field, &Values::new()));
    }

    #[test]
    fn test_unset_dependency_hides() {
        assert!(!is_visible(&dependent(), &Values::new()));
        assert!(!is_visible(&dependent(), &values(&[("a", Value::Null)])));
    }

    #[test]
    fn test_scalar_membership() {
        assert!(is_visible(&dependent(), &values(&[("a", json!("yes"))])));
        assert!(!is_visible(&dependent(), &values(&[("a", json!("no"))])));
    }

    #[test]
    fn test_list_intersection() {
        let field = FieldDefinition::new("split", "Split", FieldType::MultiSelect)
            .with_options([("Push", "push")])
            .visible_when("goal", ["bulk"]);

        assert!(is_visible(&field, &values(&[("goal", json!(["bulk", "cut"]))])));
        assert!(!is_visible(&field, &values(&[("goal", json!(["cut"]))])));
        assert!(!is_visible(&field, &values(&[("goal", json!([]))])));
    }

    #[test]
    fn test_boolean_dependency() {
        let field = FieldDefinition::new("injury", "Injury details", FieldType::Text)
            .visible_when("has_injury", [true]);

        assert!(is_visible(&field, &values(&[("has_injury", json!(true))])));
        assert!(!is_visible(&field, &values(&[("has_injury", json!(false))])));
    }

    #[test]
    fn test_number_dependency_matches_exact_value() {
        let field = FieldDefinition::new("b", "B", FieldType::Text).visible_when("days", [3]);
        assert!(is_visible(&field, &values(&[("days", json!(3))])));
        assert!(!is_visible(&field, &values(&[("days", json!(4))])));
    }
}
