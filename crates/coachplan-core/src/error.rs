//! Error types for the template engine.
//!
//! Validation failures on user answers are not errors: they are collected in
//! a [`crate::validator::ValidationResult`] and surfaced inline. The types in
//! this module cover everything that is fatal for the caller instead:
//! malformed templates, registry lookups and the submission boundary.

use std::collections::BTreeMap;
use std::path::PathBuf;

use thiserror::Error;

/// Error raised while loading, checking or looking up plan templates.
#[derive(Error, Debug)]
pub enum TemplateError {
    /// Template is structurally invalid
    #[error("Template '{template}' is invalid: {reason}")]
    Invalid { template: String, reason: String },
    /// Two fields share the same key
    #[error("Template '{template}' declares field '{key}' more than once")]
    DuplicateKey { template: String, key: String },
    /// A visibility rule points at a key the template does not define
    #[error("Field '{key}' in template '{template}' depends on unknown field '{depends_on}'")]
    UnknownDependency {
        template: String,
        key: String,
        depends_on: String,
    },
    /// A visibility rule points at a field defined at or after the dependent one
    #[error(
        "Field '{key}' in template '{template}' depends on '{depends_on}', which is not defined before it"
    )]
    ForwardDependency {
        template: String,
        key: String,
        depends_on: String,
    },
    /// A select field has no options to choose from
    #[error("Field '{key}' in template '{template}' is a {field_type} field without options")]
    MissingOptions {
        template: String,
        key: String,
        field_type: String,
    },
    /// The UI component cannot render the declared field type
    #[error(
        "Field '{key}' in template '{template}' uses component '{component}', which is not valid for {field_type} fields"
    )]
    IncompatibleComponent {
        template: String,
        key: String,
        component: String,
        field_type: String,
    },
    /// `ui.min` is greater than `ui.max`
    #[error("Field '{key}' in template '{template}' has min {min} greater than max {max}")]
    InvalidBounds {
        template: String,
        key: String,
        min: f64,
        max: f64,
    },
    /// A template with the same identity is already registered
    #[error("Template '{id}' version {version} is already published")]
    AlreadyPublished { id: String, version: u32 },
    /// Lookup for an unknown template or version
    #[error("Template '{id}'{} not found", .version.map(|v| format!(" version {v}")).unwrap_or_default())]
    NotFound { id: String, version: Option<u32> },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Template file could not be parsed
    #[error("Failed to parse template at '{path}': {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for structural template errors.
pub struct InvalidTemplateBuilder {
    template: String,
}

impl InvalidTemplateBuilder {
    /// Create a new builder for the template with the given id.
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> TemplateError {
        TemplateError::Invalid {
            template: self.template,
            reason: reason.into(),
        }
    }
}

impl TemplateError {
    /// Creates a builder for structural template errors.
    pub fn invalid(template: impl Into<String>) -> InvalidTemplateBuilder {
        InvalidTemplateBuilder::new(template)
    }

    /// Creates a lookup error for a missing template.
    pub fn not_found(id: impl Into<String>, version: Option<u32>) -> Self {
        Self::NotFound {
            id: id.into(),
            version,
        }
    }
}

/// Failure of the plan submission flow.
///
/// In both cases the form controller keeps its values so the user can fix
/// the problem and retry without re-entering anything.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SubmitError {
    /// Answers did not pass validation
    #[error("{} field(s) need attention before the plan can be created", .errors.len())]
    Invalid { errors: BTreeMap<String, String> },
    /// The downstream plan-creation call failed
    #[error("Plan creation failed: {message}")]
    Rejected { message: String },
}

/// Result type alias for template operations
pub type Result<T> = std::result::Result<T, TemplateError>;
