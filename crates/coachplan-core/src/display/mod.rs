//! Markdown formatting for templates, listings and answer reports.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! collections and reports get newtype wrappers so the same data can be
//! shown differently depending on context. Everything renders as markdown,
//! which the CLI pipes through its terminal renderer and the MCP server
//! returns verbatim.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrappers &      │    │   Markdown      │
//! │  (Template,     │───▶│ Display impls   │───▶│  (Terminal/MCP) │
//! │   Submission)   │    │                 │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! - [`collections`]: [`TemplateSummaries`]
//! - [`results`]: [`ValidationReport`], [`CheckResult`]
//! - [`datetime`]: [`LocalDateTime`]
//! - [`models`]: Display implementations for templates and submissions
//!
//! ```rust
//! use coachplan_core::{
//!     display::ValidationReport,
//!     models::{FieldDefinition, FieldType, PlanTemplate, PlanType, StepDefinition, TemplateMeta, Values},
//!     validator::validate,
//! };
//!
//! let template = PlanTemplate {
//!     id: "demo".into(),
//!     version: 1,
//!     plan_type: PlanType::Workout,
//!     meta: TemplateMeta { label: "Demo".into(), description: None },
//!     steps: vec![StepDefinition {
//!         step: 1,
//!         label: "Basics".into(),
//!         description: None,
//!         fields: vec![FieldDefinition::new("days", "Training days", FieldType::Number).required()],
//!     }],
//! };
//!
//! let result = validate(template.fields(), &Values::new());
//! let output = ValidationReport::new(&template, &result).to_string();
//! assert!(output.contains("- **Training days** (`days`): Training days is required"));
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;

pub use collections::TemplateSummaries;
pub use datetime::LocalDateTime;
pub use results::{CheckResult, ValidationReport};
