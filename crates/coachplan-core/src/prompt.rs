//! Prompt text for the plan-generating model.
//!
//! The user prompt has two sections: the raw preferences, one line per
//! answer, followed by the coaching guidelines contributed by the `aiHint`s
//! of answered fields. Both sections follow template order (step, then
//! field), whatever order the answers map happens to be in.

use serde::{Deserialize, Serialize};

use crate::models::{PlanTemplate, PlanType, Values};

/// System and user prompt for one plan request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanPrompt {
    pub system: String,
    pub user: String,
}

impl PlanPrompt {
    /// Build both prompts for already-filtered answers.
    pub fn new(template: &PlanTemplate, answers: &Values) -> Self {
        Self {
            system: build_system_prompt(template),
            user: build_user_prompt(template, answers),
        }
    }
}

/// Build the user prompt describing the answers and their coaching hints.
///
/// Answer keys the template does not declare are skipped. The guidelines
/// section is left out entirely when no answered field carries a hint.
///
/// # Examples
///
/// ```rust
/// use coachplan_core::{
///     models::{FieldDefinition, FieldType, PlanTemplate, PlanType, StepDefinition, TemplateMeta, Values},
///     prompt::build_user_prompt,
/// };
/// use serde_json::json;
///
/// let template = PlanTemplate {
///     id: "demo".into(),
///     version: 1,
///     plan_type: PlanType::Workout,
///     meta: TemplateMeta { label: "Demo".into(), description: None },
///     steps: vec![StepDefinition {
///         step: 1,
///         label: "Basics".into(),
///         description: None,
///         fields: vec![
///             FieldDefinition::new("days", "Days", FieldType::Number)
///                 .with_ai_hint("Never schedule more sessions than the requested days"),
///             FieldDefinition::new("focus", "Focus", FieldType::Text),
///         ],
///     }],
/// };
///
/// let mut answers = Values::new();
/// answers.insert("focus".into(), json!("legs"));
/// answers.insert("days".into(), json!(3));
///
/// let prompt = build_user_prompt(&template, &answers);
/// assert_eq!(
///     prompt,
///     "Create a personalized workout plan based on these preferences:\n\
///      - days: 3\n\
///      - focus: \"legs\"\n\
///      \n\
///      Coaching guidelines:\n\
///      - Never schedule more sessions than the requested days\n"
/// );
/// ```
pub fn build_user_prompt(template: &PlanTemplate, answers: &Values) -> String {
    let mut prompt = format!(
        "Create a personalized {} plan based on these preferences:\n",
        template.plan_type
    );

    let answered: Vec<_> = template
        .fields()
        .filter_map(|field| {
            answers
                .get(&field.key)
                .filter(|value| !value.is_null())
                .map(|value| (field, value))
        })
        .collect();

    for (field, value) in &answered {
        // Value's Display is compact JSON.
        prompt.push_str(&format!("- {}: {}\n", field.key, value));
    }

    let hints: Vec<&str> = answered
        .iter()
        .filter_map(|(field, _)| field.ai_hint.as_deref())
        .collect();

    if !hints.is_empty() {
        prompt.push_str("\nCoaching guidelines:\n");
        for hint in hints {
            prompt.push_str(&format!("- {hint}\n"));
        }
    }

    prompt
}

/// Build the system prompt that sets up the coaching persona.
pub fn build_system_prompt(template: &PlanTemplate) -> String {
    let deliverable = match template.plan_type {
        PlanType::Workout => {
            "a weekly training schedule with exercises, sets, reps and rest periods for each session"
        }
        PlanType::Nutrition => {
            "daily calorie and macronutrient targets with a sample meal plan for each day"
        }
    };

    format!(
        "You are an experienced personal trainer and nutrition coach. \
         Using the preferences provided for \"{}\", create {}. \
         Treat every coaching guideline as a binding rule. \
         Keep the plan safe for the user's stated experience level and \
         respond in structured markdown.",
        template.meta.label, deliverable
    )
}
