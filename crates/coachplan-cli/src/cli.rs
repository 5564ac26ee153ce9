//! Command handlers for the CLI.

use std::{fs, path::Path};

use anyhow::{bail, Context, Result};
use coachplan_core::{
    params::AnswerSet,
    registry::builder::load_file,
    submit::{submit, FeedbackContext, Notice, NoticeLevel},
    CheckResult, FormController, SubmitError, TemplateRegistry, ValidationReport,
    ValidationResult, Values,
};
use log::{debug, info};

use crate::{
    args::{AnswerArgs, AnswerCommands, CheckTemplateArgs, TemplateCommands},
    renderer::TerminalRenderer,
};

/// Runs CLI commands against a loaded template registry.
pub struct Cli {
    registry: TemplateRegistry,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(registry: TemplateRegistry, renderer: TerminalRenderer) -> Self {
        Self { registry, renderer }
    }

    pub fn handle_template_command(&self, command: TemplateCommands) -> Result<()> {
        match command {
            TemplateCommands::List => self.list_templates(),
            TemplateCommands::Show(args) => {
                let template = self.registry.show_template(&args.into())?;
                self.renderer.render(&template.to_string())
            }
            TemplateCommands::Check(args) => self.check_template(&args),
        }
    }

    pub fn handle_answer_command(&self, command: AnswerCommands) -> Result<()> {
        match command {
            AnswerCommands::Validate(args) => self.validate_answers(args),
            AnswerCommands::Payload(args) => {
                let payload = self.registry.build_payload(&answer_set(args)?)?;
                println!("{}", serde_json::to_string_pretty(&payload)?);
                Ok(())
            }
            AnswerCommands::Prompt(args) => {
                let prompt = self.registry.build_prompt(&answer_set(args)?)?;
                self.renderer.render(&prompt.to_string())
            }
            AnswerCommands::Submit(args) => self.submit_answers(args),
        }
    }

    pub fn list_templates(&self) -> Result<()> {
        let summaries = self.registry.list_templates();
        self.renderer.render(&format!("# Templates\n\n{summaries}"))
    }

    fn check_template(&self, args: &CheckTemplateArgs) -> Result<()> {
        let template = load_file(&args.file)
            .with_context(|| format!("Template check failed for {}", args.file.display()))?;
        self.renderer.render(&CheckResult::new(&template).to_string())
    }

    fn validate_answers(&self, args: AnswerArgs) -> Result<()> {
        let params = answer_set(args)?;
        let (template, result) = self.registry.validate_answers(&params)?;

        let mut report = ValidationReport::new(template, &result);
        if let Some(step) = params.step {
            report = report.for_step(step);
        }
        self.renderer.render(&report.to_string())?;

        ensure_valid(&result)
    }

    /// Replays the creation dialog: defaults first, then the answer file on
    /// top, then the submission flow with stdout as the plan-creation sink.
    fn submit_answers(&self, args: AnswerArgs) -> Result<()> {
        let params = answer_set(args)?;
        let template = self.registry.show_template(&params.template())?;

        let mut form = FormController::for_template(template);
        for (key, value) in params.answers {
            form.set_value(key, value);
        }

        let mut feedback = TerminalFeedback;
        let outcome = submit(&mut form, template, &mut feedback, |submission| {
            serde_json::to_string_pretty(submission).map_err(|e| e.to_string())
        });

        match outcome {
            Ok(json) => {
                println!("{json}");
                Ok(())
            }
            Err(SubmitError::Invalid { errors }) => {
                let result = ValidationResult {
                    is_valid: false,
                    errors,
                };
                self.renderer
                    .render(&ValidationReport::new(template, &result).to_string())?;
                ensure_valid(&result)
            }
            Err(err) => Err(err.into()),
        }
    }
}

/// Feedback context for a terminal session. Notices go to stderr so stdout
/// stays machine-readable.
struct TerminalFeedback;

impl FeedbackContext for TerminalFeedback {
    fn set_loading(&mut self, loading: bool) {
        debug!("Loading: {loading}");
    }

    fn notify(&mut self, notice: Notice) {
        if notice.level == NoticeLevel::Success {
            info!("{}", notice.message);
        }
        eprintln!("{notice}");
    }
}

fn ensure_valid(result: &ValidationResult) -> Result<()> {
    if !result.is_valid {
        bail!("{} field(s) need attention", result.errors.len());
    }
    Ok(())
}

fn answer_set(args: AnswerArgs) -> Result<AnswerSet> {
    let answers = read_answers(&args.answers)?;
    Ok(AnswerSet {
        template_id: args.id,
        version: args.version,
        answers,
        step: args.step,
    })
}

fn read_answers(path: &Path) -> Result<Values> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read answer file {}", path.display()))?;
    let answers: Values = serde_json::from_str(&json).with_context(|| {
        format!("Answer file {} must contain a JSON object", path.display())
    })?;
    debug!("Read {} answer(s) from {}", answers.len(), path.display());
    Ok(answers)
}
