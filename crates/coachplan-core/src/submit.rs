//! Final submission of a filled-in questionnaire.
//!
//! The loading indicator and notifications that accompany a submission are
//! reported through a [`FeedbackContext`] handed in by the caller, so the
//! flow runs the same under a terminal, a server handler or a test.

use std::fmt;

use jiff::Timestamp;
use log::{debug, info, warn};

use crate::{
    error::SubmitError,
    form::FormController,
    models::{PlanTemplate, Submission},
    payload::build_payload,
    prompt::build_user_prompt,
};

/// Severity of a user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// A transient notification, e.g. a toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.level {
            NoticeLevel::Success => write!(f, "✓ {}", self.message),
            NoticeLevel::Error => write!(f, "✗ {}", self.message),
        }
    }
}

/// Receiver of progress feedback during submission.
pub trait FeedbackContext {
    /// Show or hide the loading indicator.
    fn set_loading(&mut self, loading: bool);

    /// Show a transient notification.
    fn notify(&mut self, notice: Notice);
}

/// Feedback context that records everything it is told.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RecordingFeedback {
    pub loading: bool,
    pub loading_changes: Vec<bool>,
    pub notices: Vec<Notice>,
}

impl FeedbackContext for RecordingFeedback {
    fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
        self.loading_changes.push(loading);
    }

    fn notify(&mut self, notice: Notice) {
        self.notices.push(notice);
    }
}

/// Validate every visible field and package the answers for plan creation.
///
/// On failure the controller holds the new errors and the returned error
/// lists them; values are never touched.
///
/// # Errors
///
/// Returns `SubmitError::Invalid` when any visible field fails validation.
pub fn prepare_submission(
    controller: &mut FormController,
    template: &PlanTemplate,
) -> Result<Submission, SubmitError> {
    let result = controller.validate_all(template);
    if !result.is_valid {
        return Err(SubmitError::Invalid {
            errors: result.errors,
        });
    }

    let values = controller.get_all_values();
    let answers = build_payload(template, values, |field| controller.is_field_visible(field));
    let prompt = build_user_prompt(template, &answers);

    Ok(Submission {
        template_id: template.id.clone(),
        template_version: template.version,
        plan_type: template.plan_type,
        answers,
        prompt,
        created_at: Timestamp::now(),
    })
}

/// Run the whole submission: validate, build, hand to `send`, report.
///
/// `send` is the plan-creation boundary (a network call in the application).
/// Its failure leaves the controller as it was so the user can retry.
///
/// # Errors
///
/// * `SubmitError::Invalid` - validation failed; nothing was sent
/// * `SubmitError::Rejected` - `send` returned an error
pub fn submit<C, F, T, E>(
    controller: &mut FormController,
    template: &PlanTemplate,
    ctx: &mut C,
    send: F,
) -> Result<T, SubmitError>
where
    C: FeedbackContext + ?Sized,
    F: FnOnce(&Submission) -> Result<T, E>,
    E: fmt::Display,
{
    let submission = match prepare_submission(controller, template) {
        Ok(submission) => submission,
        Err(err) => {
            debug!("Submission of '{}' blocked: {err}", template.id);
            ctx.notify(Notice::error("Please fix the highlighted fields"));
            return Err(err);
        }
    };

    ctx.set_loading(true);
    let outcome = send(&submission);
    ctx.set_loading(false);

    match outcome {
        Ok(created) => {
            info!(
                "Submitted {} plan from template '{}' v{}",
                submission.plan_type, submission.template_id, submission.template_version
            );
            ctx.notify(Notice::success(format!(
                "Your {} plan is being created",
                submission.plan_type
            )));
            Ok(created)
        }
        Err(err) => {
            warn!("Plan creation failed for template '{}': {err}", template.id);
            ctx.notify(Notice::error(format!("Could not create your plan: {err}")));
            Err(SubmitError::Rejected {
                message: err.to_string(),
            })
        }
    }
}
