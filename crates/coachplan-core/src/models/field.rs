//! Field definition model and related functionality.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{FieldType, UiComponent};

/// A single question within a plan template.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FieldDefinition {
    /// Key of the answer, unique across the whole template
    pub key: String,

    /// Question shown to the user and interpolated into validation messages
    pub label: String,

    /// Optional helper text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Whether a visible field must be answered
    #[serde(default)]
    pub required: bool,

    /// Value the form is seeded with when it opens
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Value>,

    /// Kind of answer collected
    #[serde(rename = "type")]
    pub field_type: FieldType,

    /// Choices for select fields
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<FieldOption>,

    /// Condition under which the field is shown
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,

    /// Coaching constraint injected into the prompt when the field is answered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_hint: Option<String>,

    /// Presentation hints, also the source of numeric and length bounds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ui: Option<UiHints>,
}

/// One selectable choice of a select field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldOption {
    pub label: String,
    pub value: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Makes a field depend on the answer to an earlier field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Visibility {
    /// Key of the controlling field
    pub depends_on: String,

    /// Answers of the controlling field that reveal this one
    pub show_when: Vec<Value>,
}

/// UI hints for a field.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UiHints {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component: Option<UiComponent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
}

impl FieldDefinition {
    /// Create a field with only the mandatory attributes set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use coachplan_core::models::{FieldDefinition, FieldType};
    ///
    /// let field = FieldDefinition::new("age", "Age", FieldType::Number)
    ///     .required()
    ///     .with_bounds(Some(16.0), Some(99.0));
    ///
    /// assert!(field.required);
    /// assert_eq!(field.min(), Some(16.0));
    /// ```
    pub fn new(key: impl Into<String>, label: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            description: None,
            required: false,
            default_value: None,
            field_type,
            options: Vec::new(),
            visibility: None,
            ai_hint: None,
            ui: None,
        }
    }

    /// Mark the field as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Set the default value.
    pub fn with_default(mut self, value: impl Into<Value>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    /// Add options from `(label, value)` pairs.
    pub fn with_options<L, V>(mut self, options: impl IntoIterator<Item = (L, V)>) -> Self
    where
        L: Into<String>,
        V: Into<Value>,
    {
        self.options = options
            .into_iter()
            .map(|(label, value)| FieldOption {
                label: label.into(),
                value: value.into(),
                icon: None,
                description: None,
            })
            .collect();
        self
    }

    /// Show the field only when `depends_on` has one of `show_when`.
    pub fn visible_when<V: Into<Value>>(
        mut self,
        depends_on: impl Into<String>,
        show_when: impl IntoIterator<Item = V>,
    ) -> Self {
        self.visibility = Some(Visibility {
            depends_on: depends_on.into(),
            show_when: show_when.into_iter().map(Into::into).collect(),
        });
        self
    }

    /// Attach a coaching hint.
    pub fn with_ai_hint(mut self, hint: impl Into<String>) -> Self {
        self.ai_hint = Some(hint.into());
        self
    }

    /// Set `ui.min` / `ui.max`.
    pub fn with_bounds(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        let ui = self.ui.get_or_insert_with(UiHints::default);
        ui.min = min;
        ui.max = max;
        self
    }

    /// Set `ui.component`.
    pub fn with_component(mut self, component: UiComponent) -> Self {
        self.ui.get_or_insert_with(UiHints::default).component = Some(component);
        self
    }

    /// Lower bound declared in the UI hints.
    pub fn min(&self) -> Option<f64> {
        self.ui.as_ref().and_then(|ui| ui.min)
    }

    /// Upper bound declared in the UI hints.
    pub fn max(&self) -> Option<f64> {
        self.ui.as_ref().and_then(|ui| ui.max)
    }

    /// Requested UI component, if any.
    pub fn component(&self) -> Option<UiComponent> {
        self.ui.as_ref().and_then(|ui| ui.component)
    }

    /// Whether `value` is one of the declared option values.
    pub fn has_option(&self, value: &Value) -> bool {
        self.options.iter().any(|option| &option.value == value)
    }
}
