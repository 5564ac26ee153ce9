#![allow(dead_code)]

use coachplan_core::{
    FieldDefinition, FieldType, PlanTemplate, PlanType, RegistryBuilder, StepDefinition,
    TemplateMeta, TemplateRegistry,
};
use tempfile::TempDir;

/// Helper function to create a registry with the built-in templates and an
/// empty template directory
pub async fn create_test_registry() -> (TempDir, TemplateRegistry) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let registry = RegistryBuilder::new()
        .with_template_dir(Some(temp_dir.path()))
        .build()
        .await
        .expect("Failed to build registry");
    (temp_dir, registry)
}

/// Two steps: a required text field `a`, then a bounded number field `b`
pub fn two_step_template() -> PlanTemplate {
    PlanTemplate {
        id: "two-step".to_string(),
        version: 1,
        plan_type: PlanType::Workout,
        meta: TemplateMeta {
            label: "Two steps".to_string(),
            description: None,
        },
        steps: vec![
            StepDefinition {
                step: 1,
                label: "First".to_string(),
                description: None,
                fields: vec![FieldDefinition::new("a", "Name", FieldType::Text).required()],
            },
            StepDefinition {
                step: 2,
                label: "Second".to_string(),
                description: None,
                fields: vec![FieldDefinition::new("b", "Sessions", FieldType::Number)
                    .with_bounds(Some(0.0), Some(10.0))],
            },
        ],
    }
}
