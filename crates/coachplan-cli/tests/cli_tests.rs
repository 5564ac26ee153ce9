use std::{fs, path::PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color and an isolated
/// template directory
fn coachplan_cmd(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("coachplan").expect("Failed to find coachplan binary");
    cmd.arg("--no-color")
        .arg("--template-dir")
        .arg(temp_dir.path().join("templates"));
    cmd
}

fn write_json(temp_dir: &TempDir, name: &str, json: &serde_json::Value) -> PathBuf {
    let path = temp_dir.path().join(name);
    fs::write(&path, serde_json::to_string_pretty(json).expect("serialize")).expect("write file");
    path
}

fn path_arg(path: &std::path::Path) -> &str {
    path.to_str().expect("utf-8 path")
}

#[test]
fn test_cli_default_lists_templates() {
    let temp_dir = create_cli_test_environment();

    coachplan_cmd(&temp_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("# Templates"))
        .stdout(predicate::str::contains("### nutrition v1: Personal nutrition plan"))
        .stdout(predicate::str::contains("### workout v1: Personal workout plan"));
}

#[test]
fn test_cli_no_builtins_lists_nothing() {
    let temp_dir = create_cli_test_environment();

    coachplan_cmd(&temp_dir)
        .args(["--no-builtins", "template", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No templates found."));
}

#[test]
fn test_cli_template_dir_is_loaded() {
    let temp_dir = create_cli_test_environment();
    let templates = temp_dir.path().join("templates");
    fs::create_dir_all(&templates).expect("create template dir");
    let template = serde_json::json!({
        "id": "mobility",
        "version": 3,
        "planType": "workout",
        "meta": { "label": "Mobility routine" },
        "steps": [{
            "step": 1,
            "label": "Basics",
            "fields": [{ "key": "minutes", "label": "Minutes", "type": "number" }]
        }]
    });
    fs::write(templates.join("mobility.json"), template.to_string()).expect("write template");

    coachplan_cmd(&temp_dir)
        .args(["--no-builtins", "template", "show", "mobility"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Mobility routine"))
        .stdout(predicate::str::contains("- Version: 3"))
        .stdout(predicate::str::contains("### Minutes (`minutes`)"));
}

#[test]
fn test_cli_show_template() {
    let temp_dir = create_cli_test_environment();

    coachplan_cmd(&temp_dir)
        .args(["template", "show", "workout", "--version", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Step 1. Your goals"))
        .stdout(predicate::str::contains("- Type: single_select (cards)"))
        .stdout(predicate::str::contains("- Shown when: `location` is one of"));
}

#[test]
fn test_cli_show_unknown_template_fails() {
    let temp_dir = create_cli_test_environment();

    coachplan_cmd(&temp_dir)
        .args(["template", "show", "yoga"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Template 'yoga' not found"));
}

#[test]
fn test_cli_check_valid_template() {
    let temp_dir = create_cli_test_environment();
    let path = write_json(
        &temp_dir,
        "ok.json",
        &serde_json::json!({
            "id": "ok",
            "version": 1,
            "planType": "nutrition",
            "meta": { "label": "Ok" },
            "steps": [{ "step": 1, "label": "Only", "fields": [] }]
        }),
    );

    coachplan_cmd(&temp_dir)
        .args(["template", "check", path_arg(&path)])
        .assert()
        .success()
        .stdout(predicate::str::contains("Template 'ok' v1 is valid (1 steps, 0 fields)"));
}

#[test]
fn test_cli_check_rejects_forward_dependency() {
    let temp_dir = create_cli_test_environment();
    let path = write_json(
        &temp_dir,
        "forward.json",
        &serde_json::json!({
            "id": "forward",
            "version": 1,
            "planType": "workout",
            "meta": { "label": "Forward" },
            "steps": [{
                "step": 1,
                "label": "Only",
                "fields": [
                    {
                        "key": "a",
                        "label": "A",
                        "type": "text",
                        "visibility": { "dependsOn": "b", "showWhen": ["yes"] }
                    },
                    { "key": "b", "label": "B", "type": "text" }
                ]
            }]
        }),
    );

    coachplan_cmd(&temp_dir)
        .args(["template", "check", path_arg(&path)])
        .assert()
        .failure()
        .stderr(predicate::str::contains("depends on 'b', which is not defined before it"));
}

#[test]
fn test_cli_validate_invalid_answers_fails() {
    let temp_dir = create_cli_test_environment();
    let answers = write_json(
        &temp_dir,
        "answers.json",
        &serde_json::json!({ "goal": "maintain", "current_weight": 20 }),
    );

    coachplan_cmd(&temp_dir)
        .args(["answers", "validate", "nutrition", "--answers", path_arg(&answers), "--step", "1"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Step 1 of Personal nutrition plan: 2 field(s) need attention"))
        .stdout(predicate::str::contains("Current weight must be at least 30"))
        .stdout(predicate::str::contains("Daily activity level is required"))
        .stderr(predicate::str::contains("2 field(s) need attention"));
}

#[test]
fn test_cli_validate_valid_answers() {
    let temp_dir = create_cli_test_environment();
    let answers = write_json(
        &temp_dir,
        "answers.json",
        &serde_json::json!({
            "goal": "maintain",
            "current_weight": 70,
            "activity_level": "light",
            "diet_type": "vegan",
            "meals_per_day": 4
        }),
    );

    coachplan_cmd(&temp_dir)
        .args(["answers", "validate", "nutrition", "--answers", path_arg(&answers)])
        .assert()
        .success()
        .stdout(predicate::str::contains("all answers are valid"));
}

#[test]
fn test_cli_payload_drops_hidden_answers() {
    let temp_dir = create_cli_test_environment();
    let answers = write_json(
        &temp_dir,
        "answers.json",
        &serde_json::json!({
            "location": "gym",
            "equipment": ["dumbbells"],
            "goal": "strength"
        }),
    );

    let output = coachplan_cmd(&temp_dir)
        .args(["answers", "payload", "workout", "--answers", path_arg(&answers)])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let payload: serde_json::Value = serde_json::from_slice(&output).expect("payload is JSON");
    assert_eq!(payload, serde_json::json!({ "goal": "strength", "location": "gym" }));
}

#[test]
fn test_cli_prompt() {
    let temp_dir = create_cli_test_environment();
    let answers = write_json(
        &temp_dir,
        "answers.json",
        &serde_json::json!({ "allergies": ["nuts", "soy"], "goal": "lose_weight" }),
    );

    coachplan_cmd(&temp_dir)
        .args(["answers", "prompt", "nutrition", "--answers", path_arg(&answers)])
        .assert()
        .success()
        .stdout(predicate::str::contains("## System prompt"))
        .stdout(predicate::str::contains(
            "- goal: \"lose_weight\"\n- allergies: [\"nuts\",\"soy\"]",
        ))
        .stdout(predicate::str::contains("Coaching guidelines:"));
}

#[test]
fn test_cli_submit_applies_defaults() {
    let temp_dir = create_cli_test_environment();
    let answers = write_json(
        &temp_dir,
        "answers.json",
        &serde_json::json!({
            "goal": "build_muscle",
            "experience": "intermediate",
            "has_injuries": true,
            "injuries": "Lower back"
        }),
    );

    let output = coachplan_cmd(&temp_dir)
        .args(["answers", "submit", "workout", "--answers", path_arg(&answers)])
        .assert()
        .success()
        .stderr(predicate::str::contains("Your workout plan is being created"))
        .get_output()
        .stdout
        .clone();

    let submission: serde_json::Value = serde_json::from_slice(&output).expect("submission is JSON");
    assert_eq!(submission["templateId"], "workout");
    assert_eq!(submission["answers"]["days_per_week"], 3);
    assert_eq!(submission["answers"]["location"], "gym");
    assert_eq!(submission["answers"]["injuries"], "Lower back");
    assert!(submission["prompt"]
        .as_str()
        .expect("prompt")
        .contains("Avoid movements that load the reported injuries"));
}

#[test]
fn test_cli_submit_invalid_answers_fails() {
    let temp_dir = create_cli_test_environment();
    let answers = write_json(&temp_dir, "answers.json", &serde_json::json!({ "goal": "tennis" }));

    coachplan_cmd(&temp_dir)
        .args(["answers", "submit", "workout", "--answers", path_arg(&answers)])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Primary goal has an invalid selection"))
        .stderr(predicate::str::contains("Please fix the highlighted fields"));
}

#[test]
fn test_cli_answer_file_must_be_object() {
    let temp_dir = create_cli_test_environment();
    let answers = write_json(&temp_dir, "answers.json", &serde_json::json!(["not", "an", "object"]));

    coachplan_cmd(&temp_dir)
        .args(["answers", "validate", "workout", "--answers", path_arg(&answers)])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must contain a JSON object"));
}
