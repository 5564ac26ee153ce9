//! Widget selection for fields.
//!
//! Front ends render one of a closed set of widgets. The widget is chosen
//! from the field's `(type, ui.component)` pair; a field without a component
//! gets the default widget for its type, and any pair outside the
//! compatibility table falls back to [`Widget::Placeholder`].

use std::fmt;

use crate::models::{FieldDefinition, FieldType, UiComponent};

/// Concrete input widget for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Widget {
    Select,
    Radio,
    Cards,
    Chips,
    CheckboxGroup,
    Slider,
    Stepper,
    NumberInput,
    Switch,
    Checkbox,
    TextInput,
    TextArea,
    DatePicker,
    /// Shown for unknown field types and incompatible components
    Placeholder,
}

impl Widget {
    /// Resolve the widget for a field.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use coachplan_core::{
    ///     models::{FieldDefinition, FieldType, UiComponent},
    ///     widget::Widget,
    /// };
    ///
    /// let weight = FieldDefinition::new("weight", "Weight", FieldType::Number)
    ///     .with_component(UiComponent::Slider);
    /// assert_eq!(Widget::for_field(&weight), Widget::Slider);
    ///
    /// let notes = FieldDefinition::new("notes", "Notes", FieldType::Text);
    /// assert_eq!(Widget::for_field(&notes), Widget::TextInput);
    ///
    /// let odd = FieldDefinition::new("odd", "Odd", FieldType::Date)
    ///     .with_component(UiComponent::Chips);
    /// assert_eq!(Widget::for_field(&odd), Widget::Placeholder);
    /// ```
    pub fn for_field(field: &FieldDefinition) -> Self {
        Self::lookup(field.field_type, field.component())
    }

    /// Two-key lookup behind [`Widget::for_field`].
    pub fn lookup(field_type: FieldType, component: Option<UiComponent>) -> Self {
        use FieldType as T;
        use UiComponent as C;

        match (field_type, component) {
            (T::SingleSelect, None | Some(C::Select)) => Widget::Select,
            (T::SingleSelect, Some(C::Radio)) => Widget::Radio,
            (T::SingleSelect | T::MultiSelect, Some(C::Cards)) => Widget::Cards,
            (T::MultiSelect, None | Some(C::Chips)) => Widget::Chips,
            (T::MultiSelect, Some(C::CheckboxGroup)) => Widget::CheckboxGroup,
            (T::Number, Some(C::Slider)) => Widget::Slider,
            (T::Number, Some(C::Stepper)) => Widget::Stepper,
            (T::Number, None | Some(C::Input)) => Widget::NumberInput,
            (T::Boolean, None | Some(C::Switch)) => Widget::Switch,
            (T::Boolean, Some(C::Checkbox)) => Widget::Checkbox,
            (T::Text, None | Some(C::Input)) => Widget::TextInput,
            (T::Text, Some(C::Textarea)) => Widget::TextArea,
            (T::Date, None | Some(C::DatePicker)) => Widget::DatePicker,
            _ => Widget::Placeholder,
        }
    }

    /// Short name used in listings.
    pub fn as_str(&self) -> &'static str {
        match self {
            Widget::Select => "select",
            Widget::Radio => "radio",
            Widget::Cards => "cards",
            Widget::Chips => "chips",
            Widget::CheckboxGroup => "checkbox group",
            Widget::Slider => "slider",
            Widget::Stepper => "stepper",
            Widget::NumberInput => "number input",
            Widget::Switch => "switch",
            Widget::Checkbox => "checkbox",
            Widget::TextInput => "text input",
            Widget::TextArea => "text area",
            Widget::DatePicker => "date picker",
            Widget::Placeholder => "placeholder",
        }
    }
}

impl fmt::Display for Widget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_per_type() {
        assert_eq!(Widget::lookup(FieldType::SingleSelect, None), Widget::Select);
        assert_eq!(Widget::lookup(FieldType::MultiSelect, None), Widget::Chips);
        assert_eq!(Widget::lookup(FieldType::Number, None), Widget::NumberInput);
        assert_eq!(Widget::lookup(FieldType::Boolean, None), Widget::Switch);
        assert_eq!(Widget::lookup(FieldType::Text, None), Widget::TextInput);
        assert_eq!(Widget::lookup(FieldType::Date, None), Widget::DatePicker);
        assert_eq!(Widget::lookup(FieldType::Unknown, None), Widget::Placeholder);
    }

    #[test]
    fn test_lookup_agrees_with_compatibility_table() {
        let types = [
            FieldType::SingleSelect,
            FieldType::MultiSelect,
            FieldType::Number,
            FieldType::Boolean,
            FieldType::Text,
            FieldType::Date,
        ];
        let components = [
            UiComponent::Select,
            UiComponent::Radio,
            UiComponent::Cards,
            UiComponent::Chips,
            UiComponent::CheckboxGroup,
            UiComponent::Slider,
            UiComponent::Stepper,
            UiComponent::Input,
            UiComponent::Switch,
            UiComponent::Checkbox,
            UiComponent::Textarea,
            UiComponent::DatePicker,
        ];

        for field_type in types {
            for component in components {
                let widget = Widget::lookup(field_type, Some(component));
                assert_eq!(
                    widget != Widget::Placeholder,
                    component.supports(field_type),
                    "{field_type} + {component}"
                );
            }
        }
    }

    #[test]
    fn test_unknown_type_always_placeholder() {
        assert_eq!(
            Widget::lookup(FieldType::Unknown, Some(UiComponent::Slider)),
            Widget::Placeholder
        );
    }
}
