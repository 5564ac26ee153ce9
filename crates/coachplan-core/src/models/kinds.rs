//! Enumerations for plan types, field types and UI components.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Kind of plan a template produces.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PlanType {
    /// Training program
    Workout,

    /// Meal and macro plan
    Nutrition,
}

impl FromStr for PlanType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "workout" => Ok(PlanType::Workout),
            "nutrition" => Ok(PlanType::Nutrition),
            _ => Err(format!("Invalid plan type: {s}")),
        }
    }
}

impl fmt::Display for PlanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl PlanType {
    /// Wire representation of the plan type
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanType::Workout => "workout",
            PlanType::Nutrition => "nutrition",
        }
    }
}

/// Type of answer a field collects.
///
/// Type names outside the known set deserialize to [`FieldType::Unknown`],
/// which accepts any value and renders as a placeholder.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    SingleSelect,
    MultiSelect,
    Number,
    Boolean,
    Text,
    Date,
    #[serde(other)]
    Unknown,
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FieldType {
    /// Wire representation of the field type
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::SingleSelect => "single_select",
            FieldType::MultiSelect => "multi_select",
            FieldType::Number => "number",
            FieldType::Boolean => "boolean",
            FieldType::Text => "text",
            FieldType::Date => "date",
            FieldType::Unknown => "unknown",
        }
    }

    /// Whether the field chooses from a declared option list.
    pub fn has_options(&self) -> bool {
        matches!(self, FieldType::SingleSelect | FieldType::MultiSelect)
    }
}

/// UI component a template author may request for a field.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum UiComponent {
    Select,
    Radio,
    Cards,
    Chips,
    CheckboxGroup,
    Slider,
    Stepper,
    Input,
    Switch,
    Checkbox,
    Textarea,
    DatePicker,
}

impl fmt::Display for UiComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl UiComponent {
    /// Wire representation of the component
    pub fn as_str(&self) -> &'static str {
        match self {
            UiComponent::Select => "select",
            UiComponent::Radio => "radio",
            UiComponent::Cards => "cards",
            UiComponent::Chips => "chips",
            UiComponent::CheckboxGroup => "checkbox_group",
            UiComponent::Slider => "slider",
            UiComponent::Stepper => "stepper",
            UiComponent::Input => "input",
            UiComponent::Switch => "switch",
            UiComponent::Checkbox => "checkbox",
            UiComponent::Textarea => "textarea",
            UiComponent::DatePicker => "date_picker",
        }
    }

    /// Whether this component can render a field of the given type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use coachplan_core::models::{FieldType, UiComponent};
    ///
    /// assert!(UiComponent::Slider.supports(FieldType::Number));
    /// assert!(!UiComponent::Slider.supports(FieldType::Text));
    /// assert!(UiComponent::DatePicker.supports(FieldType::Date));
    /// ```
    pub fn supports(&self, field_type: FieldType) -> bool {
        use UiComponent::*;

        match field_type {
            FieldType::SingleSelect => matches!(self, Select | Radio | Cards),
            FieldType::MultiSelect => matches!(self, Chips | CheckboxGroup | Cards),
            FieldType::Number => matches!(self, Slider | Stepper | Input),
            FieldType::Boolean => matches!(self, Switch | Checkbox),
            FieldType::Text => matches!(self, Input | Textarea),
            FieldType::Date => matches!(self, DatePicker),
            FieldType::Unknown => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_field_type_deserializes() {
        let field_type: FieldType = serde_json::from_str("\"color_wheel\"").unwrap();
        assert_eq!(field_type, FieldType::Unknown);
    }

    #[test]
    fn test_field_type_wire_names() {
        let field_type: FieldType = serde_json::from_str("\"multi_select\"").unwrap();
        assert_eq!(field_type, FieldType::MultiSelect);
        assert_eq!(field_type.as_str(), "multi_select");
    }

    #[test]
    fn test_plan_type_from_str() {
        assert_eq!("Workout".parse::<PlanType>(), Ok(PlanType::Workout));
        assert_eq!("nutrition".parse::<PlanType>(), Ok(PlanType::Nutrition));
        assert!("cardio".parse::<PlanType>().is_err());
    }

    #[test]
    fn test_component_compatibility() {
        assert!(UiComponent::Stepper.supports(FieldType::Number));
        assert!(UiComponent::Input.supports(FieldType::Text));
        assert!(UiComponent::Input.supports(FieldType::Number));
        assert!(!UiComponent::DatePicker.supports(FieldType::Text));
        assert!(!UiComponent::Chips.supports(FieldType::SingleSelect));
        assert!(UiComponent::Cards.supports(FieldType::MultiSelect));
        assert!(UiComponent::Switch.supports(FieldType::Unknown));
    }
}
