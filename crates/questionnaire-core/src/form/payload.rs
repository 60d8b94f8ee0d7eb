//! The JSON document posted to the submission endpoint.

use serde::{Deserialize, Serialize};

use super::answers::FormAnswers;
use super::catalog::{catalog_position, GradeLevel, LearningStyle, Skill, Strand, INTERESTS, SUBJECTS};

/// Ratings for the eight fixed skills. Unrated skills are sent as 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillRatings {
    pub analytical: u8,
    pub technical: u8,
    pub communication: u8,
    pub creativity: u8,
    pub numerical: u8,
    pub leadership: u8,
    pub attention_to_detail: u8,
    pub research: u8,
}

impl SkillRatings {
    fn from_answers(answers: &FormAnswers) -> Self {
        let rating = |skill| answers.skill_rating(skill).unwrap_or(0);
        Self {
            analytical: rating(Skill::Analytical),
            technical: rating(Skill::Technical),
            communication: rating(Skill::Communication),
            creativity: rating(Skill::Creativity),
            numerical: rating(Skill::Numerical),
            leadership: rating(Skill::Leadership),
            attention_to_detail: rating(Skill::AttentionToDetail),
            research: rating(Skill::Research),
        }
    }
}

/// Answers assembled for submission.
///
/// `grade_level`, `strand` and `learning_style` are `Option` only so that a
/// payload can be built from an incomplete form for previews; the controller
/// validates before it sends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerPayload {
    pub name: String,
    pub grade_level: Option<GradeLevel>,
    pub strand: Option<Strand>,
    pub email: Option<String>,
    pub favorite_subjects: Vec<String>,
    pub skills: SkillRatings,
    pub interests: Vec<String>,
    pub learning_style: Option<LearningStyle>,
    pub career_goals: String,
}

impl AnswerPayload {
    /// Build the payload from the current field values.
    pub fn from_answers(answers: &FormAnswers) -> Self {
        let email = answers.email.trim();
        let career_goals = if answers.career_goal_specified == Some(true) {
            answers.career_goal_description.trim().to_string()
        } else {
            String::new()
        };

        Self {
            name: answers.student_name.trim().to_string(),
            grade_level: answers.grade_level,
            strand: answers.strand,
            email: (!email.is_empty()).then(|| email.to_string()),
            favorite_subjects: in_display_order(&answers.favorite_subjects, SUBJECTS),
            skills: SkillRatings::from_answers(answers),
            interests: in_display_order(&answers.interests, INTERESTS),
            learning_style: answers.learning_style,
            career_goals,
        }
    }
}

/// Sort checked values by their catalog position, dropping repeats. Values
/// missing from the catalog keep their relative order after the known ones.
fn in_display_order(checked: &[String], catalog: &[&str]) -> Vec<String> {
    let mut values: Vec<String> = Vec::with_capacity(checked.len());
    for value in checked {
        if !values.contains(value) {
            values.push(value.clone());
        }
    }
    values.sort_by_key(|value| catalog_position(catalog, value).unwrap_or(usize::MAX));
    values
}
