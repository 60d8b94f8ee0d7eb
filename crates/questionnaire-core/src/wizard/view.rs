use crate::validation::FieldId;

use super::state::{ButtonState, StepStatus};

/// Where the view should scroll to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollTarget {
    /// Top of the page.
    Top,
    /// The error summary of the given step.
    ErrorSummary(usize),
}

/// Presentation hooks invoked by the wizard controller.
///
/// A binding layer implements whichever hooks it can render; everything
/// defaults to a no-op. The controller never reads anything back from the
/// view, so all state lives in the controller.
pub trait FormView {
    /// Reveal `step` and hide every other step.
    fn show_step(&mut self, _step: usize) {}

    fn update_progress(&mut self, _steps: &[StepStatus]) {}

    fn update_buttons(&mut self, _buttons: ButtonState) {}

    /// Remove annotations, inline errors and the summary of `step`.
    fn clear_step_errors(&mut self, _step: usize) {}

    /// Remove inline errors and annotations from every step.
    fn clear_all_errors(&mut self) {}

    /// Flag `field` as invalid without any message.
    fn mark_invalid(&mut self, _field: FieldId) {}

    fn show_inline_error(&mut self, _field: FieldId, _message: &str) {}

    fn clear_inline_error(&mut self, _field: FieldId) {}

    /// Prepend the aggregated list of errors to `step`.
    fn show_error_summary(&mut self, _step: usize, _messages: &[String]) {}

    fn scroll_to(&mut self, _target: ScrollTarget) {}

    fn set_career_description_visible(&mut self, _visible: bool) {}

    /// Disable (`true`) or re-enable (`false`) the submit control.
    fn set_submitting(&mut self, _in_flight: bool) {}

    /// Blocking, page-level error message.
    fn show_global_error(&mut self, _message: &str) {}

    /// Leave the questionnaire for `path`.
    fn navigate(&mut self, _path: &str) {}
}

/// A view that renders nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullView;

impl FormView for NullView {}
