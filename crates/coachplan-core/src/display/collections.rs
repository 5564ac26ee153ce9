//! Collection wrapper types for listings.

use std::{fmt, ops::Index};

use crate::models::TemplateSummary;

/// Newtype wrapper for displaying a list of template summaries.
///
/// # Examples
///
/// ```rust
/// use coachplan_core::{
///     display::TemplateSummaries,
///     models::{PlanType, TemplateSummary},
/// };
///
/// let summary = TemplateSummary {
///     id: "workout".to_string(),
///     version: 2,
///     plan_type: PlanType::Workout,
///     label: "Personal workout plan".to_string(),
///     description: None,
///     total_steps: 3,
///     total_fields: 12,
/// };
///
/// let output = TemplateSummaries(vec![summary]).to_string();
/// assert!(output.contains("Personal workout plan"));
/// assert_eq!(TemplateSummaries(vec![]).to_string(), "No templates found.\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct TemplateSummaries(pub Vec<TemplateSummary>);

impl TemplateSummaries {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of summaries in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the summaries.
    pub fn iter(&self) -> std::slice::Iter<'_, TemplateSummary> {
        self.0.iter()
    }
}

impl Index<usize> for TemplateSummaries {
    type Output = TemplateSummary;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for TemplateSummaries {
    type Item = TemplateSummary;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a TemplateSummaries {
    type Item = &'a TemplateSummary;
    type IntoIter = std::slice::Iter<'a, TemplateSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<Vec<TemplateSummary>> for TemplateSummaries {
    fn from(summaries: Vec<TemplateSummary>) -> Self {
        Self(summaries)
    }
}

impl fmt::Display for TemplateSummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No templates found.")
        } else {
            for summary in &self.0 {
                write!(f, "{summary}")?;
            }
            Ok(())
        }
    }
}
