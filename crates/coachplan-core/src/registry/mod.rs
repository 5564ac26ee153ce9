//! Catalogue of published plan templates.
//!
//! Templates are immutable once published. Publishing a new version adds a
//! new entry next to the old ones; the registry never replaces a template in
//! place, so answers collected against `(id, version)` can always be
//! re-validated against exactly the schema they were collected with.
//!
//! # Usage
//!
//! ```rust
//! use coachplan_core::RegistryBuilder;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Built-in templates plus any JSON templates in the default directory
//! let registry = RegistryBuilder::new().build().await?;
//!
//! let workout = registry.get("workout", None)?;
//! println!("{} has {} steps", workout.meta.label, workout.steps.len());
//! # Ok(())
//! # }
//! ```

use std::collections::BTreeMap;

use log::debug;

use crate::{
    error::{Result, TemplateError},
    models::{PlanTemplate, TemplateSummary},
};

pub mod builder;
pub mod builtin;
mod handlers;


pub use builder::RegistryBuilder;

/// Versioned collection of checked templates, keyed by `(id, version)`.
#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    templates: BTreeMap<(String, u32), PlanTemplate>,
}

impl TemplateRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish a template after checking its schema.
    ///
    /// # Errors
    ///
    /// Returns the schema error from [`PlanTemplate::check`], or
    /// `TemplateError::AlreadyPublished` when `(id, version)` is taken.
    pub fn register(&mut self, template: PlanTemplate) -> Result<()> {
        template.check()?;

        let key = (template.id.clone(), template.version);
        if self.templates.contains_key(&key) {
            return Err(TemplateError::AlreadyPublished {
                id: key.0,
                version: key.1,
            });
        }

        debug!("Registered template '{}' v{}", template.id, template.version);
        self.templates.insert(key, template);
        Ok(())
    }

    /// Fetch a template by id, either an exact version or the latest one.
    ///
    /// # Errors
    ///
    /// Returns `TemplateError::NotFound` when nothing matches.
    pub fn get(&self, id: &str, version: Option<u32>) -> Result<&PlanTemplate> {
        let found = match version {
            Some(version) => self.templates.get(&(id.to_string(), version)),
            None => self.latest(id),
        };
        found.ok_or_else(|| TemplateError::not_found(id, version))
    }

    /// Latest version of every template, sorted by id.
    pub fn list(&self) -> Vec<TemplateSummary> {
        let mut latest: BTreeMap<&str, &PlanTemplate> = BTreeMap::new();
        // Keys iterate in (id, version) order, so later entries win.
        for ((id, _), template) in &self.templates {
            latest.insert(id.as_str(), template);
        }
        latest.into_values().map(TemplateSummary::from).collect()
    }

    /// All published versions of a template, oldest first.
    pub fn versions(&self, id: &str) -> Vec<u32> {
        self.templates
            .keys()
            .filter(|(key, _)| key == id)
            .map(|(_, version)| *version)
            .collect()
    }

    /// Number of published template versions.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Whether nothing has been published.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    fn latest(&self, id: &str) -> Option<&PlanTemplate> {
        self.templates
            .iter()
            .filter(|((key, _), _)| key == id)
            .map(|(_, template)| template)
            .last()
    }
}
