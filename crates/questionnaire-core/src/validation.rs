//! Per-step validation rules.
//!
//! [`validate_step`] is pure: it inspects the answers and returns a
//! [`StepReport`]. Rendering the report is the controller's job.

use regex::Regex;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use std::sync::LazyLock;

use crate::error::WizardError;
use crate::form::{FormAnswers, Skill, MAX_FAVORITE_SUBJECTS};

/// Number of steps in the questionnaire.
pub const TOTAL_STEPS: usize = 5;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Message shown both live and at step level when too many subjects are checked.
pub const SUBJECT_LIMIT_MESSAGE: &str = "Please select only up to 3 favorite subjects.";

/// Identifies a form control that an error is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldId {
    StudentName,
    Email,
    GradeLevel,
    Strand,
    FavoriteSubjects,
    Skill(Skill),
    Interests,
    LearningStyle,
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldId::StudentName => f.write_str("student_name"),
            FieldId::Email => f.write_str("email"),
            FieldId::GradeLevel => f.write_str("grade_level"),
            FieldId::Strand => f.write_str("strand"),
            FieldId::FavoriteSubjects => f.write_str("favorite_subjects"),
            FieldId::Skill(skill) => write!(f, "skill_{}", skill.as_str()),
            FieldId::Interests => f.write_str("interests"),
            FieldId::LearningStyle => f.write_str("learning_style"),
        }
    }
}

/// One failed rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: FieldId,
    /// Short text shown next to the field.
    pub inline: String,
    /// Text listed in the step's error summary.
    pub summary: String,
}

impl FieldError {
    fn new(field: FieldId, inline: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            field,
            inline: inline.into(),
            summary: summary.into(),
        }
    }

    fn same(field: FieldId, message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            field,
            inline: message.clone(),
            summary: message,
        }
    }
}

/// Outcome of validating one step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepReport {
    pub step: usize,
    pub errors: Vec<FieldError>,
}

impl StepReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Summary lines in rule order.
    pub fn summary(&self) -> Vec<String> {
        self.errors.iter().map(|e| e.summary.clone()).collect()
    }

    /// First error recorded for `field`.
    pub fn error_for(&self, field: FieldId) -> Option<&FieldError> {
        self.errors.iter().find(|e| e.field == field)
    }
}

/// Whether `email` looks like an address. Callers decide whether blank is allowed.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Evaluate the rules of `step` (1-based) against `answers`.
pub fn validate_step(step: usize, answers: &FormAnswers) -> Result<StepReport, WizardError> {
    let errors = match step {
        1 => personal_information(answers),
        2 => favorite_subjects(answers),
        3 => skill_ratings(answers),
        4 => interests(answers),
        5 => learning_preferences(answers),
        _ => {
            return Err(WizardError::InvalidStep {
                step,
                total: TOTAL_STEPS,
            })
        }
    };
    Ok(StepReport { step, errors })
}

fn personal_information(answers: &FormAnswers) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if answers.student_name.trim().is_empty() {
        errors.push(FieldError::new(
            FieldId::StudentName,
            "Name is required.",
            "Full Name is required.",
        ));
    }

    let email = answers.email.trim();
    if !email.is_empty() && !is_valid_email(email) {
        errors.push(FieldError::new(
            FieldId::Email,
            "Invalid email address.",
            "Email address is invalid.",
        ));
    }

    if answers.grade_level.is_none() {
        errors.push(FieldError::new(
            FieldId::GradeLevel,
            "Grade level is required.",
            "Grade Level is required.",
        ));
    }

    if answers.strand.is_none() {
        errors.push(FieldError::same(FieldId::Strand, "Strand is required."));
    }

    errors
}

fn favorite_subjects(answers: &FormAnswers) -> Vec<FieldError> {
    let checked = answers
        .favorite_subjects
        .iter()
        .collect::<HashSet<_>>()
        .len();
    if checked == 0 {
        vec![FieldError::same(
            FieldId::FavoriteSubjects,
            "Please select at least one favorite subject.",
        )]
    } else if checked > MAX_FAVORITE_SUBJECTS {
        vec![FieldError::same(FieldId::FavoriteSubjects, SUBJECT_LIMIT_MESSAGE)]
    } else {
        Vec::new()
    }
}

fn skill_ratings(answers: &FormAnswers) -> Vec<FieldError> {
    Skill::ALL
        .iter()
        .filter(|skill| answers.skill_rating(**skill).is_none())
        .map(|skill| {
            FieldError::same(
                FieldId::Skill(*skill),
                format!("Please rate your {} skill level.", skill.label()),
            )
        })
        .collect()
}

fn interests(answers: &FormAnswers) -> Vec<FieldError> {
    if answers.interests.is_empty() {
        vec![FieldError::same(
            FieldId::Interests,
            "Please select at least one interest area.",
        )]
    } else {
        Vec::new()
    }
}

fn learning_preferences(answers: &FormAnswers) -> Vec<FieldError> {
    // The career description is optional even when the goal is specified.
    if answers.learning_style.is_none() {
        vec![FieldError::new(
            FieldId::LearningStyle,
            "Please select your learning style preference.",
            "Learning style preference is required.",
        )]
    } else {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{GradeLevel, LearningStyle, Strand};

    fn personal() -> FormAnswers {
        FormAnswers {
            student_name: "Maria Santos".to_string(),
            grade_level: Some(GradeLevel::Twelve),
            strand: Some(Strand::Stem),
            ..Default::default()
        }
    }

    #[test]
    fn email_pattern() {
        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("bad"));
        assert!(!is_valid_email("a b@c.de"));
        assert!(!is_valid_email("a@b"));
    }

    #[test]
    fn empty_email_is_allowed() {
        let report = validate_step(1, &personal()).unwrap();
        assert!(report.is_valid());
    }

    #[test]
    fn malformed_email_is_reported() {
        let mut answers = personal();
        answers.email = "bad".to_string();
        let report = validate_step(1, &answers).unwrap();
        assert_eq!(report.summary(), vec!["Email address is invalid."]);

        answers.email = " a@b.co ".to_string();
        assert!(validate_step(1, &answers).unwrap().is_valid());
    }

    #[test]
    fn step_one_reports_every_missing_field_in_order() {
        let mut answers = FormAnswers::new();
        answers.student_name = "   ".to_string();
        let report = validate_step(1, &answers).unwrap();
        assert_eq!(
            report.summary(),
            vec![
                "Full Name is required.",
                "Grade Level is required.",
                "Strand is required.",
            ]
        );
        assert_eq!(
            report.error_for(FieldId::StudentName).unwrap().inline,
            "Name is required."
        );
    }

    #[test]
    fn subject_count_bounds() {
        let mut answers = FormAnswers::new();
        let report = validate_step(2, &answers).unwrap();
        assert_eq!(report.summary(), vec!["Please select at least one favorite subject."]);

        answers.favorite_subjects = ["Mathematics", "Physics", "English", "Arts"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let report = validate_step(2, &answers).unwrap();
        assert_eq!(report.summary(), vec![SUBJECT_LIMIT_MESSAGE]);

        answers.favorite_subjects.pop();
        assert!(validate_step(2, &answers).unwrap().is_valid());
    }

    #[test]
    fn each_missing_skill_is_named() {
        let mut answers = FormAnswers::new();
        for skill in Skill::ALL.iter().filter(|s| **s != Skill::AttentionToDetail) {
            answers.rate_skill(*skill, 3);
        }
        let report = validate_step(3, &answers).unwrap();
        assert_eq!(
            report.summary(),
            vec!["Please rate your attention to detail skill level."]
        );
        assert!(report.error_for(FieldId::Skill(Skill::AttentionToDetail)).is_some());
    }

    #[test]
    fn out_of_range_rating_counts_as_unselected() {
        let mut answers = FormAnswers::new();
        for skill in Skill::ALL {
            answers.rate_skill(*skill, 4);
        }
        answers.skills.insert(Skill::Numerical, 9);
        let report = validate_step(3, &answers).unwrap();
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].field, FieldId::Skill(Skill::Numerical));
    }

    #[test]
    fn interests_require_one() {
        let mut answers = FormAnswers::new();
        assert!(!validate_step(4, &answers).unwrap().is_valid());
        answers.toggle_interest("Education", true);
        assert!(validate_step(4, &answers).unwrap().is_valid());
    }

    #[test]
    fn learning_style_required_but_career_text_is_not() {
        let mut answers = FormAnswers::new();
        answers.career_goal_specified = Some(true);
        let report = validate_step(5, &answers).unwrap();
        assert_eq!(report.summary(), vec!["Learning style preference is required."]);

        answers.learning_style = Some(LearningStyle::Visual);
        assert!(validate_step(5, &answers).unwrap().is_valid());
    }

    #[test]
    fn repeated_subject_counts_once() {
        let mut answers = FormAnswers::new();
        answers.favorite_subjects = vec!["Mathematics".to_string(); 4];
        assert!(validate_step(2, &answers).unwrap().is_valid());

        answers.favorite_subjects = ["Mathematics", "Physics", "English", "Arts"]
            .map(String::from)
            .to_vec();
        let report = validate_step(2, &answers).unwrap();
        assert_eq!(report.summary(), vec![SUBJECT_LIMIT_MESSAGE]);
    }

    #[test]
    fn step_outside_range_is_an_error() {
        let answers = FormAnswers::new();
        assert_eq!(
            validate_step(0, &answers),
            Err(WizardError::InvalidStep { step: 0, total: TOTAL_STEPS })
        );
        assert!(validate_step(6, &answers).is_err());
    }

    #[test]
    fn field_id_display_matches_control_names() {
        assert_eq!(FieldId::Skill(Skill::AttentionToDetail).to_string(), "skill_attention_to_detail");
        assert_eq!(FieldId::StudentName.to_string(), "student_name");
    }
}
