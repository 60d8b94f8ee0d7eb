//! Core error types for questionnaire-core.
//!
//! Validation failures are not errors here: they come back as
//! [`StepReport`](crate::validation::StepReport) values. The types below cover
//! misuse of the wizard, transport failures and configuration problems.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for questionnaire-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Wizard state machine errors
    #[error("Wizard error: {0}")]
    Wizard(#[from] WizardError),

    /// Submission errors
    #[error("Submission error: {0}")]
    Submit(#[from] SubmitError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Errors raised when a transition is requested from the wrong state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WizardError {
    /// Step number outside `1..=total`.
    #[error("Invalid step {step}: expected a value between 1 and {total}")]
    InvalidStep { step: usize, total: usize },

    /// `next` requested on the last step.
    #[error("Already at the final step ({0}); submit instead")]
    AtFinalStep(usize),

    /// `submit` requested before reaching the last step.
    #[error("Submission is only available from step {total} (currently at step {current})")]
    NotAtFinalStep { current: usize, total: usize },

    /// The questionnaire was already submitted successfully.
    #[error("Questionnaire already submitted")]
    Finished,
}

/// Transport and server-side failures while submitting answers.
#[derive(Error, Debug)]
pub enum SubmitError {
    /// Request could not be sent or the body could not be read
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("Server returned HTTP {status}{}", .message.as_deref().map(|m| format!(": {m}")).unwrap_or_default())]
    Server { status: u16, message: Option<String> },

    /// Success status but the body was not the expected JSON document
    #[error("Invalid response body: {0}")]
    InvalidResponse(#[from] serde_json::Error),

    /// Endpoint URL could not be built
    #[error("Invalid endpoint URL '{url}': {source}")]
    InvalidEndpoint {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

impl SubmitError {
    /// The server-provided message, if the server sent one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            SubmitError::Server { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config directory could not be determined or created
    #[error("Config directory unavailable: {0}")]
    DirUnavailable(String),

    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
