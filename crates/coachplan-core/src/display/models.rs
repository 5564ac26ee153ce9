//! Display implementations for domain models.

use std::fmt;

use serde_json::Value;

use super::datetime::LocalDateTime;
use crate::{
    models::{FieldDefinition, FieldType, PlanTemplate, StepDefinition, Submission, TemplateSummary},
    widget::Widget,
};

impl fmt::Display for PlanTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.meta.label)?;
        writeln!(f)?;

        writeln!(f, "- Id: {}", self.id)?;
        writeln!(f, "- Version: {}", self.version)?;
        writeln!(f, "- Plan type: {}", self.plan_type)?;
        writeln!(f, "- Steps: {}", self.steps.len())?;
        writeln!(f, "- Fields: {}", self.field_count())?;

        if let Some(desc) = &self.meta.description {
            writeln!(f)?;
            writeln!(f, "{desc}")?;
        }

        for step in &self.steps {
            writeln!(f)?;
            write!(f, "{step}")?;
        }

        Ok(())
    }
}

impl fmt::Display for StepDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Step {}. {}", self.step, self.label)?;

        if let Some(desc) = &self.description {
            writeln!(f)?;
            writeln!(f, "{desc}")?;
        }

        if self.fields.is_empty() {
            writeln!(f)?;
            writeln!(f, "No fields in this step.")?;
        }
        for field in &self.fields {
            writeln!(f)?;
            write!(f, "{field}")?;
        }

        Ok(())
    }
}

impl fmt::Display for FieldDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {} (`{}`)", self.label, self.key)?;
        writeln!(f)?;

        if let Some(desc) = &self.description {
            writeln!(f, "{desc}")?;
            writeln!(f)?;
        }

        writeln!(f, "- Type: {} ({})", self.field_type, Widget::for_field(self))?;
        writeln!(f, "- Required: {}", if self.required { "yes" } else { "no" })?;

        if let Some(default) = &self.default_value {
            writeln!(f, "- Default: `{default}`")?;
        }

        if let Some(rule) = &self.visibility {
            writeln!(
                f,
                "- Shown when: `{}` is one of {}",
                rule.depends_on,
                join_values(&rule.show_when)
            )?;
        }

        if let Some(bounds) = self.fmt_bounds() {
            writeln!(f, "- {bounds}")?;
        }

        if !self.options.is_empty() {
            writeln!(f, "- Options:")?;
            for option in &self.options {
                match &option.icon {
                    Some(icon) => writeln!(f, "  - {icon} {} (`{}`)", option.label, option.value)?,
                    None => writeln!(f, "  - {} (`{}`)", option.label, option.value)?,
                }
            }
        }

        if let Some(hint) = &self.ai_hint {
            writeln!(f, "- Coaching hint: {hint}")?;
        }

        Ok(())
    }
}

impl FieldDefinition {
    /// Describe `ui.min` / `ui.max` in the terms the validator applies them.
    fn fmt_bounds(&self) -> Option<String> {
        let suffix = self
            .ui
            .as_ref()
            .and_then(|ui| ui.suffix.as_deref())
            .map(|suffix| format!(" {suffix}"))
            .unwrap_or_default();

        let range = match (self.min(), self.max()) {
            (Some(min), Some(max)) => format!("{min} to {max}{suffix}"),
            (Some(min), None) => format!("at least {min}{suffix}"),
            (None, Some(max)) => format!("at most {max}{suffix}"),
            (None, None) => return None,
        };

        match self.field_type {
            FieldType::Number => Some(format!("Range: {range}")),
            FieldType::MultiSelect => Some(format!("Selections: {range}")),
            _ => None,
        }
    }
}

fn join_values(values: &[Value]) -> String {
    values
        .iter()
        .map(|value| format!("`{value}`"))
        .collect::<Vec<_>>()
        .join(", ")
}

impl fmt::Display for TemplateSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {} v{}: {}", self.id, self.version, self.label)?;
        writeln!(f)?;
        writeln!(
            f,
            "- Plan type: {} ({} steps, {} fields)",
            self.plan_type, self.total_steps, self.total_fields
        )?;

        if let Some(desc) = &self.description {
            writeln!(f, "- {desc}")?;
        }
        writeln!(f)
    }
}

impl fmt::Display for Submission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "# {} plan request from {} v{}",
            capitalize(self.plan_type.as_str()),
            self.template_id,
            self.template_version
        )?;
        writeln!(f)?;
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        writeln!(f)?;

        writeln!(f, "## Answers")?;
        writeln!(f)?;
        if self.answers.is_empty() {
            writeln!(f, "No answers.")?;
        }
        for (key, value) in &self.answers {
            writeln!(f, "- {key}: `{value}`")?;
        }

        writeln!(f)?;
        writeln!(f, "## Prompt")?;
        writeln!(f)?;
        writeln!(f, "```text")?;
        write!(f, "{}", self.prompt)?;
        writeln!(f, "```")
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use serde_json::json;

    use super::*;
    use crate::models::{PlanType, TemplateMeta, UiComponent, Values};

    fn create_test_template() -> PlanTemplate {
        PlanTemplate {
            id: "strength".to_string(),
            version: 2,
            plan_type: PlanType::Workout,
            meta: TemplateMeta {
                label: "Strength block".to_string(),
                description: Some("Six weeks of heavy lifting".to_string()),
            },
            steps: vec![StepDefinition {
                step: 1,
                label: "Basics".to_string(),
                description: None,
                fields: vec![
                    FieldDefinition::new("lifts", "Main lifts", FieldType::MultiSelect)
                        .with_options([("Squat", "squat"), ("Bench", "bench")])
                        .with_bounds(Some(1.0), None)
                        .required(),
                    FieldDefinition::new("weight", "Body weight", FieldType::Number)
                        .with_component(UiComponent::Slider)
                        .with_bounds(Some(40.0), Some(150.5))
                        .visible_when("lifts", ["squat"])
                        .with_ai_hint("Scale loads to body weight"),
                ],
            }],
        }
    }

    #[test]
    fn test_template_display() {
        let output = create_test_template().to_string();

        assert!(output.starts_with("# Strength block\n"));
        assert!(output.contains("- Version: 2"));
        assert!(output.contains("Six weeks of heavy lifting"));
        assert!(output.contains("## Step 1. Basics"));
        assert!(output.contains("### Main lifts (`lifts`)"));
        assert!(output.contains("- Type: multi_select (chips)"));
        assert!(output.contains("- Selections: at least 1"));
        assert!(output.contains("  - Squat (`\"squat\"`)"));
        assert!(output.contains("- Type: number (slider)"));
        assert!(output.contains("- Range: 40 to 150.5"));
        assert!(output.contains("- Shown when: `lifts` is one of `\"squat\"`"));
        assert!(output.contains("- Coaching hint: Scale loads to body weight"));
    }

    #[test]
    fn test_summary_display() {
        let summary = TemplateSummary::from(&create_test_template());
        let output = summary.to_string();

        assert!(output.contains("### strength v2: Strength block"));
        assert!(output.contains("- Plan type: workout (1 steps, 2 fields)"));
    }

    #[test]
    fn test_submission_display() {
        let mut answers = Values::new();
        answers.insert("lifts".to_string(), json!(["squat"]));
        let submission = Submission {
            template_id: "strength".to_string(),
            template_version: 2,
            plan_type: PlanType::Workout,
            answers,
            prompt: "Create a personalized workout plan based on these preferences:\n".to_string(),
            created_at: Timestamp::from_second(1640995200).unwrap(),
        };

        let output = submission.to_string();
        assert!(output.starts_with("# Workout plan request from strength v2\n"));
        assert!(output.contains("- lifts: `[\"squat\"]`"));
        assert!(output.contains("```text\nCreate a personalized workout plan"));
    }
}
