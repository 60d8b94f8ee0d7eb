//! Live field values for every section of the questionnaire.
//!
//! All sections stay populated while the user moves between steps, so the
//! payload can be assembled from a single `FormAnswers` at submit time.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

use super::catalog::{GradeLevel, LearningStyle, Skill, Strand, MAX_RATING, MIN_RATING};

/// Maximum number of favorite subjects that may be checked at once.
pub const MAX_FAVORITE_SUBJECTS: usize = 3;

/// Result of toggling a favorite-subject checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// The change was applied.
    Accepted,
    /// The change would exceed the limit and was reverted.
    Rejected,
}

/// Current values of all form fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormAnswers {
    #[serde(default)]
    pub student_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub grade_level: Option<GradeLevel>,
    #[serde(default)]
    pub strand: Option<Strand>,
    /// Checked favorite subjects, in the order they were checked.
    #[serde(default, deserialize_with = "unique_strings")]
    pub favorite_subjects: Vec<String>,
    /// Selected rating per skill. A missing key means no radio is selected.
    #[serde(default)]
    pub skills: BTreeMap<Skill, u8>,
    #[serde(default, deserialize_with = "unique_strings")]
    pub interests: Vec<String>,
    #[serde(default)]
    pub learning_style: Option<LearningStyle>,
    /// `None` until the user answers the yes/no career question.
    #[serde(default)]
    pub career_goal_specified: Option<bool>,
    #[serde(default)]
    pub career_goal_description: String,
}

/// Checkbox groups are sets; a repeated value in a document counts once.
fn unique_strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = Vec::<String>::deserialize(deserializer)?;
    let mut unique: Vec<String> = Vec::with_capacity(values.len());
    for value in values {
        if !unique.contains(&value) {
            unique.push(value);
        }
    }
    Ok(unique)
}

impl FormAnswers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check or uncheck a favorite subject.
    ///
    /// Checking a fourth subject is rejected and leaves the selection as it
    /// was. Unchecking always succeeds.
    pub fn toggle_subject(&mut self, subject: &str, checked: bool) -> SelectionOutcome {
        let present = self.favorite_subjects.iter().any(|s| s == subject);
        if checked {
            if present {
                return SelectionOutcome::Accepted;
            }
            if self.favorite_subjects.len() >= MAX_FAVORITE_SUBJECTS {
                return SelectionOutcome::Rejected;
            }
            self.favorite_subjects.push(subject.to_string());
        } else if present {
            self.favorite_subjects.retain(|s| s != subject);
        }
        SelectionOutcome::Accepted
    }

    /// Check or uncheck an interest area. There is no upper bound.
    pub fn toggle_interest(&mut self, interest: &str, checked: bool) {
        let present = self.interests.iter().any(|s| s == interest);
        if checked && !present {
            self.interests.push(interest.to_string());
        } else if !checked && present {
            self.interests.retain(|s| s != interest);
        }
    }

    /// Select a rating for `skill`, replacing any previous selection.
    ///
    /// Returns `false` and leaves the skill untouched when the rating is
    /// outside the radio group.
    pub fn rate_skill(&mut self, skill: Skill, rating: u8) -> bool {
        if !(MIN_RATING..=MAX_RATING).contains(&rating) {
            return false;
        }
        self.skills.insert(skill, rating);
        true
    }

    /// The selected rating for `skill`, if a valid one is selected.
    pub fn skill_rating(&self, skill: Skill) -> Option<u8> {
        self.skills
            .get(&skill)
            .copied()
            .filter(|r| (MIN_RATING..=MAX_RATING).contains(r))
    }

    /// Answer the career-goal question. Answering "no" clears the description.
    pub fn set_career_goal_specified(&mut self, specified: bool) {
        self.career_goal_specified = Some(specified);
        if !specified {
            self.career_goal_description.clear();
        }
    }

    /// Whether the career description field should be shown.
    pub fn career_description_visible(&self) -> bool {
        self.career_goal_specified == Some(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fourth_subject_is_rejected() {
        let mut answers = FormAnswers::new();
        for subject in ["Mathematics", "Physics", "English"] {
            assert_eq!(answers.toggle_subject(subject, true), SelectionOutcome::Accepted);
        }
        assert_eq!(answers.toggle_subject("Arts", true), SelectionOutcome::Rejected);
        assert_eq!(answers.favorite_subjects, vec!["Mathematics", "Physics", "English"]);
    }

    #[test]
    fn unchecking_frees_a_slot() {
        let mut answers = FormAnswers::new();
        for subject in ["Mathematics", "Physics", "English"] {
            answers.toggle_subject(subject, true);
        }
        assert_eq!(answers.toggle_subject("Physics", false), SelectionOutcome::Accepted);
        assert_eq!(answers.toggle_subject("Arts", true), SelectionOutcome::Accepted);
        assert_eq!(answers.favorite_subjects.len(), 3);
    }

    #[test]
    fn rechecking_a_checked_subject_is_idempotent() {
        let mut answers = FormAnswers::new();
        answers.toggle_subject("Mathematics", true);
        answers.toggle_subject("Mathematics", true);
        assert_eq!(answers.favorite_subjects, vec!["Mathematics"]);
    }

    #[test]
    fn out_of_range_rating_is_ignored() {
        let mut answers = FormAnswers::new();
        assert!(!answers.rate_skill(Skill::Research, 0));
        assert!(!answers.rate_skill(Skill::Research, 6));
        assert_eq!(answers.skill_rating(Skill::Research), None);
        assert!(answers.rate_skill(Skill::Research, 5));
        assert_eq!(answers.skill_rating(Skill::Research), Some(5));
    }

    #[test]
    fn declining_career_goal_clears_description() {
        let mut answers = FormAnswers::new();
        answers.set_career_goal_specified(true);
        answers.career_goal_description = "Software engineer".to_string();
        assert!(answers.career_description_visible());

        answers.set_career_goal_specified(false);
        assert!(!answers.career_description_visible());
        assert!(answers.career_goal_description.is_empty());
    }

    #[test]
    fn deserializes_partial_document() {
        let answers: FormAnswers = serde_json::from_str(
            r#"{"student_name": "Ana", "strand": "HUMSS", "skills": {"research": 4}}"#,
        )
        .unwrap();
        assert_eq!(answers.strand, Some(Strand::Humss));
        assert_eq!(answers.skill_rating(Skill::Research), Some(4));
        assert!(answers.grade_level.is_none());
    }

    #[test]
    fn repeated_checkbox_values_load_once() {
        let answers: FormAnswers = serde_json::from_str(
            r#"{
                "favorite_subjects": ["Mathematics", "Physics", "Mathematics", "Mathematics"],
                "interests": ["Business", "Business"]
            }"#,
        )
        .unwrap();
        assert_eq!(answers.favorite_subjects, vec!["Mathematics", "Physics"]);
        assert_eq!(answers.interests, vec!["Business"]);
    }
}
