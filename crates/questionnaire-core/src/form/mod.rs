//! Questionnaire form model: vocabularies, live answers and the submission
//! payload.

pub mod answers;
pub mod catalog;
pub mod payload;

pub use answers::{FormAnswers, SelectionOutcome, MAX_FAVORITE_SUBJECTS};
pub use catalog::{GradeLevel, LearningStyle, Skill, Strand, UnknownOption, INTERESTS, SUBJECTS};
pub use payload::{AnswerPayload, SkillRatings};
