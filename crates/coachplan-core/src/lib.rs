//! Core library for coachplan, a schema-driven questionnaire engine.
//!
//! Plan templates declare a multi-step wizard of typed questions. This crate
//! interprets them: it decides which questions are visible, validates the
//! answers, filters them into the payload sent for plan creation and turns
//! them into the prompt for the plan-generating model.
//!
//! # Pipeline
//!
//! ```text
//! ┌─────────────┐   ┌──────────────┐   ┌─────────────┐   ┌──────────────┐
//! │  Template   │──▶│    Form      │──▶│   Payload   │──▶│    Prompt    │
//! │  Registry   │   │  Controller  │   │   Builder   │   │   Builder    │
//! └─────────────┘   └──────────────┘   └─────────────┘   └──────────────┘
//!   schema check     visibility +        visible keys      preferences +
//!   + versions       validation          only              coaching hints
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use coachplan_core::{
//!     form::FormController,
//!     submit::{submit, RecordingFeedback},
//!     RegistryBuilder,
//! };
//! use serde_json::json;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = RegistryBuilder::new().build().await?;
//! let template = registry.get("nutrition", None)?;
//!
//! let mut form = FormController::for_template(template);
//! form.set_value("goal", json!("maintain"));
//! form.set_value("current_weight", json!(72));
//! form.set_value("activity_level", json!("moderate"));
//!
//! let mut feedback = RecordingFeedback::default();
//! let submission = submit(&mut form, template, &mut feedback, |submission| {
//!     Ok::<_, String>(submission.clone())
//! })?;
//! println!("{}", submission.prompt);
//! # Ok(())
//! # }
//! ```

pub mod display;
pub mod error;
pub mod form;
pub mod models;
pub mod params;
pub mod payload;
pub mod prompt;
pub mod registry;
pub mod schema;
pub mod submit;
pub mod validator;
pub mod visibility;
pub mod widget;

// Re-export commonly used types
pub use display::{CheckResult, LocalDateTime, TemplateSummaries, ValidationReport};
pub use error::{Result, SubmitError, TemplateError};
pub use form::FormController;
pub use models::{
    FieldDefinition, FieldOption, FieldType, PlanTemplate, PlanType, StepDefinition, Submission,
    TemplateMeta, TemplateSummary, UiComponent, UiHints, Values, Visibility,
};
pub use params::{AnswerSet, ShowTemplate};
pub use prompt::PlanPrompt;
pub use registry::{RegistryBuilder, TemplateRegistry};
pub use submit::{FeedbackContext, Notice, NoticeLevel};
pub use validator::{FieldErrors, ValidationResult};
pub use widget::Widget;
