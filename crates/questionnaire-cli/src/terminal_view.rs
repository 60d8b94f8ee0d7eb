//! Plain-text rendering of the wizard for a terminal.

use questionnaire_core::form::{GradeLevel, LearningStyle, Skill, Strand, INTERESTS, SUBJECTS};
use questionnaire_core::validation::FieldId;
use questionnaire_core::wizard::{step_title, ButtonState, FormView, ScrollTarget, StepStatus};
use questionnaire_core::TOTAL_STEPS;

/// Writes everything to stderr; stdout is left for payloads and results.
pub struct TerminalView {
    base_url: String,
    /// Print field hints when a step is shown.
    show_hints: bool,
    career_description_visible: bool,
}

impl TerminalView {
    pub fn new(base_url: impl Into<String>, show_hints: bool) -> Self {
        Self {
            base_url: base_url.into(),
            show_hints,
            career_description_visible: false,
        }
    }

    fn print_hints(&self, step: usize) {
        match step {
            1 => {
                eprintln!("  name <full name>");
                eprintln!("  email <address>          (optional)");
                eprintln!("  grade <{}>", join(GradeLevel::ALL.iter().map(|g| g.as_str())));
                eprintln!("  strand <{}>", join(Strand::ALL.iter().map(|s| s.as_str())));
            }
            2 => {
                eprintln!("  subject <name>           (toggle, up to 3)");
                eprintln!("  subjects: {}", SUBJECTS.join(", "));
            }
            3 => {
                eprintln!("  rate <skill> <1-5>");
                eprintln!("  skills: {}", join(Skill::ALL.iter().map(|s| s.as_str())));
            }
            4 => {
                eprintln!("  interest <name>          (toggle, at least 1)");
                eprintln!("  interests: {}", INTERESTS.join(", "));
            }
            5 => {
                eprintln!("  style <learning style>");
                eprintln!("  styles: {}", join(LearningStyle::ALL.iter().map(|s| s.as_str())));
                eprintln!("  career <yes|no>");
                if self.career_description_visible {
                    eprintln!("  goal <description>");
                }
            }
            _ => {}
        }
    }
}

fn join<'a>(items: impl Iterator<Item = &'a str>) -> String {
    items.collect::<Vec<_>>().join(" | ")
}

impl FormView for TerminalView {
    fn show_step(&mut self, step: usize) {
        eprintln!();
        eprintln!(
            "== Step {step}/{TOTAL_STEPS}: {} ==",
            step_title(step).unwrap_or_default()
        );
        if self.show_hints {
            self.print_hints(step);
        }
    }

    fn update_progress(&mut self, steps: &[StepStatus]) {
        let marks: Vec<&str> = steps
            .iter()
            .map(|s| match s {
                StepStatus::Completed => "x",
                StepStatus::Active => ">",
                StepStatus::Pending => " ",
            })
            .collect();
        eprintln!("progress: [{}]", marks.join("]["));
    }

    fn update_buttons(&mut self, buttons: ButtonState) {
        if !self.show_hints {
            return;
        }
        let mut actions = Vec::new();
        if buttons.previous_enabled {
            actions.push("prev");
        }
        if buttons.next_visible {
            actions.push("next");
        }
        if buttons.submit_visible {
            actions.push("submit");
        }
        eprintln!("  actions: {}", actions.join(", "));
    }

    fn show_inline_error(&mut self, field: FieldId, message: &str) {
        eprintln!("  ! {field}: {message}");
    }

    fn show_error_summary(&mut self, step: usize, messages: &[String]) {
        eprintln!("Step {step} has errors:");
        for message in messages {
            eprintln!("  - {message}");
        }
    }

    fn scroll_to(&mut self, target: ScrollTarget) {
        tracing::trace!(?target, "scroll");
    }

    fn set_career_description_visible(&mut self, visible: bool) {
        if visible && !self.career_description_visible && self.show_hints {
            eprintln!("  goal <description>       (optional)");
        }
        self.career_description_visible = visible;
    }

    fn set_submitting(&mut self, in_flight: bool) {
        if in_flight {
            eprintln!("Submitting answers to {} ...", self.base_url);
        }
    }

    fn show_global_error(&mut self, message: &str) {
        eprintln!("error: {message}");
    }

    fn navigate(&mut self, path: &str) {
        eprintln!(
            "Recommendations are ready: {}{}",
            self.base_url.trim_end_matches('/'),
            path
        );
    }
}
