//! Property tests for the wizard transitions and the favorite-subject limit.

use proptest::prelude::*;
use questionnaire_core::error::SubmitError;
use questionnaire_core::form::{GradeLevel, LearningStyle, Skill, Strand, MAX_FAVORITE_SUBJECTS, SUBJECTS};
use questionnaire_core::{
    validate_step, AnswerPayload, FormAnswers, NextOutcome, NullView, SubmitResponse, Submitter,
    WizardController, TOTAL_STEPS,
};

/// Never called by these tests; transitions before submit do not touch it.
struct Unreachable;

impl Submitter for Unreachable {
    async fn submit(&self, _payload: &AnswerPayload) -> Result<SubmitResponse, SubmitError> {
        unreachable!("navigation must not submit")
    }
}

fn arb_answers() -> impl Strategy<Value = FormAnswers> {
    (
        prop::sample::select(vec!["", "  ", "Lea", "Carlo Bautista"]),
        prop::sample::select(vec!["", "bad", "a@b.co", "x@y"]),
        prop::option::of(prop::sample::select(GradeLevel::ALL.to_vec())),
        prop::option::of(prop::sample::select(Strand::ALL.to_vec())),
        prop::collection::vec(prop::sample::select(SUBJECTS.to_vec()), 0..5),
        prop::collection::vec(prop::option::of(1u8..=5), Skill::ALL.len()),
        prop::bool::ANY,
        prop::option::of(prop::sample::select(LearningStyle::ALL.to_vec())),
    )
        .prop_map(
            |(name, email, grade, strand, subjects, ratings, interested, style)| {
                let mut answers = FormAnswers {
                    student_name: name.to_string(),
                    email: email.to_string(),
                    grade_level: grade,
                    strand,
                    learning_style: style,
                    ..Default::default()
                };
                // Bypass the live limit so the step-level check sees overfull selections.
                for subject in subjects {
                    if !answers.favorite_subjects.iter().any(|s| s == subject) {
                        answers.favorite_subjects.push(subject.to_string());
                    }
                }
                for (skill, rating) in Skill::ALL.iter().zip(ratings) {
                    if let Some(rating) = rating {
                        answers.rate_skill(*skill, rating);
                    }
                }
                if interested {
                    answers.toggle_interest("Education", true);
                }
                answers
            },
        )
}

fn complete_answers() -> FormAnswers {
    let mut answers = FormAnswers {
        student_name: "Lea".to_string(),
        grade_level: Some(GradeLevel::Eleven),
        strand: Some(Strand::Abm),
        learning_style: Some(LearningStyle::Reading),
        ..Default::default()
    };
    answers.toggle_subject("Accounting", true);
    for skill in Skill::ALL {
        answers.rate_skill(*skill, 3);
    }
    answers.toggle_interest("Business", true);
    answers
}

proptest! {
    #[test]
    fn next_succeeds_iff_step_is_valid(answers in arb_answers(), target in 1usize..TOTAL_STEPS) {
        let mut controller = WizardController::with_answers(answers.clone(), Unreachable, NullView, "/results");

        // Walk to `target` only through steps that are valid.
        for step in 1..target {
            if !validate_step(step, &answers).unwrap().is_valid() {
                return Ok(());
            }
            prop_assert_eq!(controller.go_next().unwrap(), NextOutcome::Advanced(step + 1));
        }

        let valid = validate_step(target, &answers).unwrap().is_valid();
        match controller.go_next().unwrap() {
            NextOutcome::Advanced(step) => {
                prop_assert!(valid);
                prop_assert_eq!(step, target + 1);
                prop_assert_eq!(controller.current_step(), target + 1);
            }
            NextOutcome::Blocked(report) => {
                prop_assert!(!valid);
                prop_assert_eq!(report.step, target);
                prop_assert_eq!(controller.current_step(), target);
            }
        }
    }

    #[test]
    fn previous_never_validates(start in 2usize..=TOTAL_STEPS, steps_back in 1usize..=TOTAL_STEPS) {
        let mut controller = WizardController::with_answers(complete_answers(), Unreachable, NullView, "/results");
        while controller.current_step() < start {
            prop_assert!(matches!(controller.go_next().unwrap(), NextOutcome::Advanced(_)));
        }
        // Every step is now invalid; going back must not care.
        *controller.answers_mut() = FormAnswers::default();

        let mut position = controller.current_step();
        for _ in 0..steps_back {
            let expected = if position > 1 { position - 1 } else { 1 };
            position = controller.go_previous().unwrap();
            prop_assert_eq!(position, expected);
        }
    }

    #[test]
    fn checked_subjects_never_exceed_limit(
        toggles in prop::collection::vec((prop::sample::select(SUBJECTS.to_vec()), prop::bool::ANY), 0..40)
    ) {
        let mut controller = WizardController::new(Unreachable, NullView, "/results");
        for (subject, checked) in toggles {
            controller.set_subject_checked(subject, checked);
            prop_assert!(controller.answers().favorite_subjects.len() <= MAX_FAVORITE_SUBJECTS);
        }
    }
}
