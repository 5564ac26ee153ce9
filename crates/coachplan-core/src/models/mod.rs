//! Data models for plan templates.
//!
//! A [`PlanTemplate`] is an ordered list of [`StepDefinition`]s, each holding
//! an ordered list of [`FieldDefinition`]s. Field keys form a single flat
//! namespace across the whole template, which is what lets a visibility rule
//! on step three refer to an answer given on step one.
//!
//! Templates are plain serde types. They deserialize from the camelCase JSON
//! that template authors write:
//!
//! ```rust
//! use coachplan_core::models::{FieldType, PlanTemplate, PlanType};
//!
//! let template = PlanTemplate::from_json(r#"{
//!     "id": "quick-start",
//!     "version": 1,
//!     "planType": "workout",
//!     "meta": { "label": "Quick start" },
//!     "steps": [{
//!         "step": 1,
//!         "label": "Basics",
//!         "fields": [{
//!             "key": "days",
//!             "label": "Training days per week",
//!             "type": "number",
//!             "required": true,
//!             "defaultValue": 3,
//!             "ui": { "component": "stepper", "min": 1, "max": 7 }
//!         }]
//!     }]
//! }"#)?;
//!
//! assert_eq!(template.plan_type, PlanType::Workout);
//! assert_eq!(template.field("days").map(|f| f.field_type), Some(FieldType::Number));
//! # Ok::<(), coachplan_core::TemplateError>(())
//! ```

mod field;
mod kinds;
mod submission;
mod template;


pub use field::{FieldDefinition, FieldOption, UiHints, Visibility};
pub use kinds::{FieldType, PlanType, UiComponent};
pub use submission::{Submission, TemplateSummary};
pub use template::{PlanTemplate, StepDefinition, TemplateMeta};

/// Answer values keyed by field key, in insertion order.
pub type Values = serde_json::Map<String, serde_json::Value>;
