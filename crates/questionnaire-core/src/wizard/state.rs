//! Step position and the derived progress/button indicators.

use serde::{Deserialize, Serialize};

use crate::error::WizardError;
use crate::validation::TOTAL_STEPS;

/// Heading of each step, indexed by step number minus one.
pub const STEP_TITLES: [&str; TOTAL_STEPS] = [
    "Personal Information",
    "Favorite Subjects",
    "Skills Assessment",
    "Interests",
    "Learning Style & Career Goals",
];

/// Heading of `step`, if it exists.
pub fn step_title(step: usize) -> Option<&'static str> {
    step.checked_sub(1).and_then(|i| STEP_TITLES.get(i)).copied()
}

/// Position within the questionnaire.
///
/// `1 <= current_step <= total_steps` holds for every value of this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardState {
    current_step: usize,
    total_steps: usize,
}

impl WizardState {
    /// Start at step 1 of `total_steps`.
    pub fn new(total_steps: usize) -> Result<Self, WizardError> {
        Self::at(1, total_steps)
    }

    /// A state positioned at `step`.
    pub fn at(step: usize, total_steps: usize) -> Result<Self, WizardError> {
        if step == 0 || step > total_steps {
            return Err(WizardError::InvalidStep {
                step,
                total: total_steps,
            });
        }
        Ok(Self {
            current_step: step,
            total_steps,
        })
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn total_steps(&self) -> usize {
        self.total_steps
    }

    pub fn is_first(&self) -> bool {
        self.current_step == 1
    }

    pub fn is_last(&self) -> bool {
        self.current_step == self.total_steps
    }

    /// Move forward one step. Returns `false` at the last step.
    pub(crate) fn advance(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.current_step += 1;
        true
    }

    /// Move back one step. Returns `false` at the first step.
    pub(crate) fn retreat(&mut self) -> bool {
        if self.is_first() {
            return false;
        }
        self.current_step -= 1;
        true
    }

    /// Status of every step for the progress indicator.
    pub fn progress(&self) -> Vec<StepStatus> {
        (1..=self.total_steps)
            .map(|step| {
                if step < self.current_step {
                    StepStatus::Completed
                } else if step == self.current_step {
                    StepStatus::Active
                } else {
                    StepStatus::Pending
                }
            })
            .collect()
    }

    /// Which navigation controls are available.
    pub fn buttons(&self) -> ButtonState {
        ButtonState {
            previous_enabled: !self.is_first(),
            next_visible: !self.is_last(),
            submit_visible: self.is_last(),
        }
    }
}

impl Default for WizardState {
    /// Step 1 of the questionnaire.
    fn default() -> Self {
        Self {
            current_step: 1,
            total_steps: TOTAL_STEPS,
        }
    }
}

/// Progress-indicator state of one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    Completed,
    Active,
    Pending,
}

/// Navigation control state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonState {
    pub previous_enabled: bool,
    pub next_visible: bool,
    pub submit_visible: bool,
}
