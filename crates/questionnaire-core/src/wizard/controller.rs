//! The wizard controller: the only place where the step position changes.

use crate::error::{SubmitError, WizardError};
use crate::form::{AnswerPayload, FormAnswers, SelectionOutcome};
use crate::submit::{SubmitResponse, Submitter};
use crate::validation::{self, FieldId, StepReport, SUBJECT_LIMIT_MESSAGE};

use super::state::{ButtonState, StepStatus, WizardState};
use super::view::{FormView, ScrollTarget};

/// Shown when the server accepted the request but could not produce results.
pub const RECOMMENDATION_FAILED_MESSAGE: &str =
    "Error generating recommendations. Please try again.";
/// Shown when the request failed and the server gave no reason.
pub const SUBMISSION_FAILED_MESSAGE: &str = "Error submitting questionnaire. Please try again.";

/// Lifecycle of the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Steps are being filled in.
    Editing,
    /// Answers were accepted; the wizard is done.
    Completed,
}

/// Result of a `go_next` request.
#[derive(Debug, Clone, PartialEq)]
pub enum NextOutcome {
    /// Moved to the contained step.
    Advanced(usize),
    /// The current step is invalid; nothing moved.
    Blocked(StepReport),
}

/// Result of a `submit` request.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The final step is invalid; nothing was sent.
    Blocked(StepReport),
    /// The server accepted the answers.
    Accepted(SubmitResponse),
    /// The request failed; the message was shown and the user may retry.
    Failed { message: String },
}

/// Drives the questionnaire from step 1 to submission.
///
/// Owns the step position, the live answers of every step, the transport and
/// the view. Transitions take `&mut self`, so a second submission cannot start
/// while one is in flight.
pub struct WizardController<S, V> {
    state: WizardState,
    answers: FormAnswers,
    submitter: S,
    view: V,
    results_path: String,
    phase: Phase,
}

impl<S: Submitter, V: FormView> WizardController<S, V> {
    /// Create a controller at step 1 with empty answers.
    pub fn new(submitter: S, view: V, results_path: impl Into<String>) -> Self {
        Self::with_answers(FormAnswers::default(), submitter, view, results_path)
    }

    /// Create a controller at step 1 with pre-filled answers.
    pub fn with_answers(
        answers: FormAnswers,
        submitter: S,
        view: V,
        results_path: impl Into<String>,
    ) -> Self {
        let mut controller = Self {
            state: WizardState::default(),
            answers,
            submitter,
            view,
            results_path: results_path.into(),
            phase: Phase::Editing,
        };
        let visible = controller.answers.career_description_visible();
        controller.view.set_career_description_visible(visible);
        controller.reveal_current_step();
        controller
    }

    pub fn state(&self) -> WizardState {
        self.state
    }

    pub fn current_step(&self) -> usize {
        self.state.current_step()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn answers(&self) -> &FormAnswers {
        &self.answers
    }

    /// Direct access to the field values for text inputs, selects and radios.
    ///
    /// Checkbox and career-goal changes should go through
    /// [`set_subject_checked`](Self::set_subject_checked) and
    /// [`set_career_goal_specified`](Self::set_career_goal_specified) so their
    /// live rules run.
    pub fn answers_mut(&mut self) -> &mut FormAnswers {
        &mut self.answers
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn progress(&self) -> Vec<StepStatus> {
        self.state.progress()
    }

    pub fn buttons(&self) -> ButtonState {
        self.state.buttons()
    }

    /// Consume the controller, returning the view and answers.
    pub fn into_parts(self) -> (FormAnswers, V) {
        (self.answers, self.view)
    }

    /// Check or uncheck a favorite subject, enforcing the limit immediately.
    pub fn set_subject_checked(&mut self, subject: &str, checked: bool) -> SelectionOutcome {
        let outcome = self.answers.toggle_subject(subject, checked);
        match outcome {
            SelectionOutcome::Rejected => {
                tracing::debug!(subject, "rejected favorite subject over the limit");
                self.view
                    .show_inline_error(FieldId::FavoriteSubjects, SUBJECT_LIMIT_MESSAGE);
            }
            SelectionOutcome::Accepted => {
                self.view.clear_inline_error(FieldId::FavoriteSubjects);
            }
        }
        outcome
    }

    /// Answer the career-goal question, showing or hiding the description.
    pub fn set_career_goal_specified(&mut self, specified: bool) {
        self.answers.set_career_goal_specified(specified);
        self.view.set_career_description_visible(specified);
    }

    /// Validate `step` and render the outcome.
    ///
    /// Invalid fields are always marked; per-field messages are attached only
    /// when `show_inline` is set. An invalid step also gets a summary and the
    /// view scrolls to it.
    pub fn validate_step(&mut self, step: usize, show_inline: bool) -> Result<StepReport, WizardError> {
        let report = validation::validate_step(step, &self.answers)?;
        self.view.clear_step_errors(step);

        if report.is_valid() {
            tracing::debug!(step, "step valid");
            return Ok(report);
        }

        for error in &report.errors {
            self.view.mark_invalid(error.field);
            if show_inline {
                self.view.show_inline_error(error.field, &error.inline);
            }
        }
        self.view.show_error_summary(step, &report.summary());
        self.view.scroll_to(ScrollTarget::ErrorSummary(step));
        tracing::debug!(step, errors = report.errors.len(), "step invalid");
        Ok(report)
    }

    /// Advance to the next step if the current one is valid.
    pub fn go_next(&mut self) -> Result<NextOutcome, WizardError> {
        self.ensure_editing()?;
        let from = self.state.current_step();
        if self.state.is_last() {
            return Err(WizardError::AtFinalStep(from));
        }

        let report = self.validate_step(from, true)?;
        if !report.is_valid() {
            return Ok(NextOutcome::Blocked(report));
        }

        self.state.advance();
        tracing::debug!(from, to = self.state.current_step(), "advanced");
        self.reveal_current_step();
        Ok(NextOutcome::Advanced(self.state.current_step()))
    }

    /// Go back one step without validating. A no-op on the first step.
    pub fn go_previous(&mut self) -> Result<usize, WizardError> {
        self.ensure_editing()?;
        let from = self.state.current_step();
        if self.state.retreat() {
            tracing::debug!(from, to = self.state.current_step(), "went back");
            self.reveal_current_step();
        }
        Ok(self.state.current_step())
    }

    /// Validate the final step and send the answers of every step.
    ///
    /// Transport and server failures are reported to the view and returned as
    /// [`SubmitOutcome::Failed`]; the controller stays on the final step so
    /// the user can retry.
    pub async fn submit(&mut self) -> Result<SubmitOutcome, WizardError> {
        self.ensure_editing()?;
        let current = self.state.current_step();
        if !self.state.is_last() {
            return Err(WizardError::NotAtFinalStep {
                current,
                total: self.state.total_steps(),
            });
        }

        self.view.clear_all_errors();
        let report = self.validate_step(current, true)?;
        if !report.is_valid() {
            return Ok(SubmitOutcome::Blocked(report));
        }

        let payload = AnswerPayload::from_answers(&self.answers);
        tracing::info!(
            subjects = payload.favorite_subjects.len(),
            interests = payload.interests.len(),
            "submitting questionnaire"
        );

        self.view.set_submitting(true);
        let result = self.submitter.submit(&payload).await;
        self.view.set_submitting(false);

        let outcome = match result {
            Ok(response) if response.success => {
                tracing::info!(student_id = ?response.student_id, "questionnaire accepted");
                self.phase = Phase::Completed;
                self.view.navigate(&self.results_path);
                return Ok(SubmitOutcome::Accepted(response));
            }
            Ok(_) => {
                tracing::warn!("server could not generate recommendations");
                RECOMMENDATION_FAILED_MESSAGE.to_string()
            }
            Err(e) => {
                tracing::warn!("submission failed: {e}");
                failure_message(&e)
            }
        };

        self.view.show_global_error(&outcome);
        Ok(SubmitOutcome::Failed { message: outcome })
    }

    fn ensure_editing(&self) -> Result<(), WizardError> {
        match self.phase {
            Phase::Editing => Ok(()),
            Phase::Completed => Err(WizardError::Finished),
        }
    }

    fn reveal_current_step(&mut self) {
        let step = self.state.current_step();
        self.view.show_step(step);
        self.view.update_progress(&self.state.progress());
        self.view.update_buttons(self.state.buttons());
        self.view.scroll_to(ScrollTarget::Top);
    }
}

/// The user-visible message for a failed request.
fn failure_message(error: &SubmitError) -> String {
    error
        .server_message()
        .filter(|m| !m.trim().is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| SUBMISSION_FAILED_MESSAGE.to_string())
}
