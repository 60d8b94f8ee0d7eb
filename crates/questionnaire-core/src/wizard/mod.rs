//! Multi-step wizard: position state, presentation seam and controller.

pub mod controller;
pub mod state;
pub mod view;

pub use controller::{
    NextOutcome, Phase, SubmitOutcome, WizardController, RECOMMENDATION_FAILED_MESSAGE,
    SUBMISSION_FAILED_MESSAGE,
};
pub use state::{step_title, ButtonState, StepStatus, WizardState, STEP_TITLES};
pub use view::{FormView, NullView, ScrollTarget};
