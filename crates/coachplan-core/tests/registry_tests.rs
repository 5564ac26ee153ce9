use coachplan_core::{
    form::FormController,
    submit::{submit, RecordingFeedback},
    AnswerSet, NoticeLevel, ShowTemplate, SubmitError, TemplateError, Values, Widget,
};
use serde_json::{json, Value};

mod common;

fn answers(value: Value) -> Values {
    match value {
        Value::Object(map) => map,
        _ => panic!("answers must be a JSON object"),
    }
}

fn workout_answers() -> Values {
    answers(json!({
        "notes": "Prefers morning sessions",
        "goal": "lose_fat",
        "experience": "beginner",
        "days_per_week": 3,
        "session_minutes": 45,
        "location": "home",
        "equipment": ["dumbbells", "resistance_bands"],
        "has_injuries": false,
        "injuries": "old ankle sprain",
        "stray": "ignored"
    }))
}

#[tokio::test]
async fn test_builtin_templates_are_listed() {
    let (_temp_dir, registry) = common::create_test_registry().await;

    let summaries = registry.list_templates();
    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].id, "nutrition");
    assert_eq!(summaries[1].id, "workout");
    assert!(summaries.to_string().contains("### workout v1: Personal workout plan"));
}

#[tokio::test]
async fn test_builtin_widgets_are_never_placeholders() {
    let (_temp_dir, registry) = common::create_test_registry().await;

    for summary in &registry.list_templates() {
        let template = registry
            .show_template(&ShowTemplate {
                id: summary.id.clone(),
                version: None,
            })
            .expect("listed template");
        for field in template.fields() {
            assert_ne!(Widget::for_field(field), Widget::Placeholder, "{}", field.key);
        }
    }
}

#[tokio::test]
async fn test_show_unknown_template() {
    let (_temp_dir, registry) = common::create_test_registry().await;

    let err = registry
        .show_template(&ShowTemplate {
            id: "workout".to_string(),
            version: Some(99),
        })
        .unwrap_err();

    assert!(matches!(err, TemplateError::NotFound { .. }));
    assert_eq!(err.to_string(), "Template 'workout' version 99 not found");
}

#[tokio::test]
async fn test_validate_workout_answers() {
    let (_temp_dir, registry) = common::create_test_registry().await;
    let params = AnswerSet {
        template_id: "workout".to_string(),
        answers: answers(json!({ "location": "home", "days_per_week": 9 })),
        ..Default::default()
    };

    let (_, result) = registry.validate_answers(&params).expect("validate");

    assert!(!result.is_valid);
    assert_eq!(result.errors.get("goal").map(String::as_str), Some("Primary goal is required"));
    assert_eq!(
        result.errors.get("days_per_week").map(String::as_str),
        Some("Training days per week must be at most 7")
    );
    assert_eq!(
        result.errors.get("equipment").map(String::as_str),
        Some("Available equipment is required")
    );
    // has_injuries is unset, so the injury details stay hidden
    assert!(!result.errors.contains_key("injuries"));
}

#[tokio::test]
async fn test_validate_single_step() {
    let (_temp_dir, registry) = common::create_test_registry().await;
    let params = AnswerSet {
        template_id: "workout".to_string(),
        answers: answers(json!({ "days_per_week": 4, "session_minutes": 60 })),
        step: Some(2),
        ..Default::default()
    };

    let (_, result) = registry.validate_answers(&params).expect("validate");
    assert!(result.is_valid);
}

#[tokio::test]
async fn test_payload_and_prompt_for_workout() {
    let (_temp_dir, registry) = common::create_test_registry().await;
    let params = AnswerSet {
        template_id: "workout".to_string(),
        answers: workout_answers(),
        ..Default::default()
    };

    let payload = registry.build_payload(&params).expect("payload");
    let keys: Vec<&str> = payload.keys().map(String::as_str).collect();
    assert_eq!(
        keys,
        [
            "goal",
            "experience",
            "days_per_week",
            "session_minutes",
            "location",
            "equipment",
            "has_injuries",
            "notes"
        ]
    );

    let prompt = registry.build_prompt(&params).expect("prompt");
    assert!(prompt
        .user
        .starts_with("Create a personalized workout plan based on these preferences:\n- goal: \"lose_fat\"\n"));
    assert!(prompt.user.contains("- equipment: [\"dumbbells\",\"resistance_bands\"]\n"));
    assert!(prompt.user.contains("Only use exercises that need the available equipment."));
    assert!(!prompt.user.contains("- injuries:"));
    assert!(!prompt.user.contains("load the reported injuries"));
    assert!(prompt.system.contains("Personal workout plan"));
}

#[tokio::test]
async fn test_submit_nutrition_plan() {
    let (_temp_dir, registry) = common::create_test_registry().await;
    let template = registry.get("nutrition", None).expect("nutrition");
    let mut form = FormController::for_template(template);
    let mut feedback = RecordingFeedback::default();

    let blocked = submit(&mut form, template, &mut feedback, |_| Ok::<_, String>(()));
    assert!(matches!(blocked, Err(SubmitError::Invalid { .. })));
    assert_eq!(form.get_error("goal"), Some("Nutrition goal is required"));

    form.set_value("goal", json!("gain_muscle"));
    form.set_value("current_weight", json!(68.5));
    form.set_value("target_weight", json!(74));
    form.set_value("activity_level", json!("very_active"));
    form.set_value("allergies", json!(["nuts"]));

    let submission = submit(&mut form, template, &mut feedback, |submission| {
        Ok::<_, String>(submission.clone())
    })
    .expect("submission");

    assert_eq!(submission.template_id, "nutrition");
    assert_eq!(submission.answers.get("diet_type"), Some(&json!("omnivore")));
    assert_eq!(submission.answers.get("track_macros"), Some(&json!(true)));
    assert!(submission.prompt.contains("- Never include ingredients the user is allergic or intolerant to."));
    assert_eq!(feedback.loading_changes, vec![true, false]);
    assert_eq!(feedback.notices.last().map(|notice| notice.level), Some(NoticeLevel::Success));
}
