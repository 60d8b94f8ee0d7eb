//! # Questionnaire Core Library
//!
//! Core logic for the student program-recommendation questionnaire. The
//! questionnaire is split into five steps; each step is validated before the
//! user may move forward, and the answers of all steps are posted as one JSON
//! document at the end.
//!
//! ## Architecture
//!
//! - **Form**: catalogs of allowed values, the live [`FormAnswers`] and the
//!   [`AnswerPayload`] built from them at submit time
//! - **Validation**: pure per-step rules producing a [`StepReport`]
//! - **Wizard**: the [`WizardController`] state machine, rendering through the
//!   [`FormView`] trait so no UI toolkit is involved
//! - **Submit**: the [`Submitter`] transport seam and its HTTP implementation
//! - **Storage**: TOML-based configuration
//!
//! ## Key Components
//!
//! - [`WizardController`]: next/previous/submit transitions
//! - [`HttpSubmitter`]: posts answers to the recommendation server
//! - [`Config`]: endpoint and logging configuration

pub mod error;
pub mod form;
pub mod storage;
pub mod submit;
pub mod validation;
pub mod wizard;

pub use error::{ConfigError, CoreError, SubmitError, WizardError};
pub use form::{AnswerPayload, FormAnswers, GradeLevel, LearningStyle, SelectionOutcome, Skill, Strand};
pub use storage::Config;
pub use submit::{HttpSubmitter, Recommendation, SubmitResponse, Submitter};
pub use validation::{validate_step, FieldError, FieldId, StepReport, TOTAL_STEPS};
pub use wizard::{FormView, NextOutcome, NullView, SubmitOutcome, WizardController, WizardState};
