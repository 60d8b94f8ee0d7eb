//! Fill subcommand: an interactive, line-based binding for the wizard.
//!
//! Each input line is one command (`name Maria`, `rate research 4`, `next`).
//! The controller decides what happens; this module only parses and prints.

use clap::Args;
use questionnaire_core::form::{INTERESTS, SUBJECTS};
use questionnaire_core::wizard::{NextOutcome, Phase};
use questionnaire_core::{
    Config, FormAnswers, GradeLevel, HttpSubmitter, LearningStyle, SelectionOutcome, Skill,
    Strand, Submitter, WizardController,
};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use super::load_answers;
use super::submit::submit_and_report;
use crate::terminal_view::TerminalView;

#[derive(Args)]
pub struct FillArgs {
    /// Start from an answers file instead of a blank form
    #[arg(long)]
    pub from: Option<PathBuf>,
    /// Write the answers to this file when quitting without submitting
    #[arg(long)]
    pub save: Option<PathBuf>,
    /// Override the configured server base URL
    #[arg(long)]
    pub base_url: Option<String>,
}

/// One parsed input line.
#[derive(Debug, Clone, PartialEq)]
enum Input {
    Name(String),
    Email(String),
    Grade(GradeLevel),
    Strand(Strand),
    Subject(String),
    Rate(Skill, u8),
    Interest(String),
    Style(LearningStyle),
    Career(bool),
    Goal(String),
    Next,
    Prev,
    Submit,
    Show,
    Help,
    Quit,
}

const HELP: &str = "\
commands:
  name <text> | email <text> | grade <11|12> | strand <code>
  subject <name>            toggle a favorite subject
  rate <skill> <1-5>
  interest <name>           toggle an interest area
  style <learning style> | career <yes|no> | goal <text>
  next | prev | submit | show | help | quit";

pub fn run(args: FillArgs, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let answers = match &args.from {
        Some(path) => load_answers(path)?,
        None => FormAnswers::default(),
    };

    let mut endpoint = config.effective_endpoint();
    if let Some(base_url) = args.base_url {
        endpoint.base_url = base_url;
    }
    let submitter = HttpSubmitter::new(&endpoint)?;
    let view = TerminalView::new(endpoint.base_url.clone(), true);

    println!("Type 'help' for the list of commands.");
    let mut controller =
        WizardController::with_answers(answers, submitter, view, endpoint.results_path.clone());

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("step {}> ", controller.current_step());
        io::stdout().flush()?;

        let Some(line) = lines.next() else { break };
        let input = match parse_input(&line?) {
            Ok(Some(input)) => input,
            Ok(None) => continue,
            Err(msg) => {
                eprintln!("{msg}");
                continue;
            }
        };

        if input == Input::Quit {
            break;
        }
        apply(&mut controller, input);
        if controller.phase() == Phase::Completed {
            return Ok(());
        }
    }

    if let Some(path) = args.save {
        let json = serde_json::to_string_pretty(controller.answers())?;
        std::fs::write(&path, json)?;
        println!("Answers saved to {}", path.display());
    }
    Ok(())
}

fn apply<S: Submitter>(controller: &mut WizardController<S, TerminalView>, input: Input) {
    match input {
        Input::Name(name) => controller.answers_mut().student_name = name,
        Input::Email(email) => controller.answers_mut().email = email,
        Input::Grade(grade) => controller.answers_mut().grade_level = Some(grade),
        Input::Strand(strand) => controller.answers_mut().strand = Some(strand),
        Input::Subject(subject) => {
            let checked = controller.answers().favorite_subjects.contains(&subject);
            if controller.set_subject_checked(&subject, !checked) == SelectionOutcome::Accepted {
                println!("favorite subjects: {}", controller.answers().favorite_subjects.join(", "));
            }
        }
        Input::Rate(skill, rating) => {
            controller.answers_mut().rate_skill(skill, rating);
        }
        Input::Interest(interest) => {
            let checked = controller.answers().interests.contains(&interest);
            controller.answers_mut().toggle_interest(&interest, !checked);
            println!("interests: {}", controller.answers().interests.join(", "));
        }
        Input::Style(style) => controller.answers_mut().learning_style = Some(style),
        Input::Career(specified) => controller.set_career_goal_specified(specified),
        Input::Goal(goal) => {
            if controller.answers().career_description_visible() {
                controller.answers_mut().career_goal_description = goal;
            } else {
                eprintln!("answer 'career yes' before describing a career goal");
            }
        }
        Input::Next => match controller.go_next() {
            Ok(NextOutcome::Advanced(_)) | Ok(NextOutcome::Blocked(_)) => {}
            Err(e) => eprintln!("{e}"),
        },
        Input::Prev => {
            if let Err(e) = controller.go_previous() {
                eprintln!("{e}");
            }
        }
        Input::Submit => {
            if let Err(e) = submit_and_report(controller) {
                eprintln!("{e}");
            }
        }
        Input::Show => match serde_json::to_string_pretty(controller.answers()) {
            Ok(json) => println!("{json}"),
            Err(e) => eprintln!("{e}"),
        },
        Input::Help => println!("{HELP}"),
        Input::Quit => {}
    }
}

fn parse_input(line: &str) -> Result<Option<Input>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    let input = match command.to_ascii_lowercase().as_str() {
        "name" => Input::Name(rest.to_string()),
        "email" => Input::Email(rest.to_string()),
        "grade" => Input::Grade(rest.parse().map_err(|e| format!("{e}"))?),
        "strand" => Input::Strand(rest.parse().map_err(|e| format!("{e}"))?),
        "subject" => Input::Subject(canonical(SUBJECTS, rest, "subject")?),
        "rate" => {
            let (skill, rating) = rest
                .rsplit_once(char::is_whitespace)
                .ok_or("usage: rate <skill> <1-5>")?;
            let skill: Skill = skill.trim().replace(' ', "_").parse().map_err(|e| format!("{e}"))?;
            let rating: u8 = rating
                .parse()
                .map_err(|_| format!("rating must be a number from 1 to 5, got '{rating}'"))?;
            if !(1..=5).contains(&rating) {
                return Err(format!("rating must be a number from 1 to 5, got '{rating}'"));
            }
            Input::Rate(skill, rating)
        }
        "interest" => Input::Interest(canonical(INTERESTS, rest, "interest")?),
        "style" => Input::Style(rest.parse().map_err(|e| format!("{e}"))?),
        "career" => match rest.to_ascii_lowercase().as_str() {
            "yes" | "y" | "true" => Input::Career(true),
            "no" | "n" | "false" => Input::Career(false),
            _ => return Err("usage: career <yes|no>".to_string()),
        },
        "goal" => Input::Goal(rest.to_string()),
        "next" | "n" => Input::Next,
        "prev" | "previous" | "p" => Input::Prev,
        "submit" => Input::Submit,
        "show" => Input::Show,
        "help" | "?" => Input::Help,
        "quit" | "exit" | "q" => Input::Quit,
        other => return Err(format!("unknown command '{other}' (try 'help')")),
    };
    Ok(Some(input))
}

/// Resolve `value` against a checkbox catalog, ignoring case.
fn canonical(catalog: &[&str], value: &str, kind: &str) -> Result<String, String> {
    catalog
        .iter()
        .find(|entry| entry.eq_ignore_ascii_case(value))
        .map(|entry| entry.to_string())
        .ok_or_else(|| format!("unknown {kind}: '{value}'"))
}
