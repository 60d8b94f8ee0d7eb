//! Submit subcommand: run an answers file through the wizard and send it.

use clap::Args;
use questionnaire_core::wizard::{NextOutcome, SubmitOutcome};
use questionnaire_core::{
    AnswerPayload, Config, HttpSubmitter, Recommendation, Submitter, WizardController,
};
use std::path::PathBuf;

use super::load_answers;
use crate::terminal_view::TerminalView;

#[derive(Args)]
pub struct SubmitArgs {
    /// JSON file with the form answers
    pub file: PathBuf,
    /// Validate and print the payload instead of sending it
    #[arg(long)]
    pub dry_run: bool,
    /// Override the configured server base URL
    #[arg(long)]
    pub base_url: Option<String>,
}

pub fn run(args: SubmitArgs, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let answers = load_answers(&args.file)?;

    let mut endpoint = config.effective_endpoint();
    if let Some(base_url) = args.base_url {
        endpoint.base_url = base_url;
    }
    let submitter = HttpSubmitter::new(&endpoint)?;
    let view = TerminalView::new(endpoint.base_url.clone(), false);
    let mut controller =
        WizardController::with_answers(answers, submitter, view, endpoint.results_path.clone());

    while controller.buttons().next_visible {
        if let NextOutcome::Blocked(report) = controller.go_next()? {
            return Err(format!("step {} is incomplete", report.step).into());
        }
    }

    if args.dry_run {
        let step = controller.current_step();
        let report = controller.validate_step(step, true)?;
        if !report.is_valid() {
            return Err(format!("step {step} is incomplete").into());
        }
        let payload = AnswerPayload::from_answers(controller.answers());
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    submit_and_report(&mut controller)
}

/// Submit from the final step and print the server's recommendations.
pub fn submit_and_report<S: Submitter>(
    controller: &mut WizardController<S, TerminalView>,
) -> Result<(), Box<dyn std::error::Error>> {
    let runtime = tokio::runtime::Runtime::new()?;
    match runtime.block_on(controller.submit())? {
        SubmitOutcome::Accepted(response) => {
            if let Some(id) = response.student_id {
                println!("Student record: {id}");
            }
            print_recommendations(&response.recommendations);
            Ok(())
        }
        SubmitOutcome::Blocked(report) => {
            Err(format!("step {} is incomplete", report.step).into())
        }
        // The view already printed the message.
        SubmitOutcome::Failed { .. } => Err("questionnaire was not submitted".into()),
    }
}

fn print_recommendations(recommendations: &[Recommendation]) {
    if recommendations.is_empty() {
        println!("No program recommendations were returned.");
        return;
    }
    println!("Recommended programs:");
    for rec in recommendations {
        println!(
            "  #{} program {} ({:.1}% confidence)",
            rec.rank, rec.program_id, rec.confidence
        );
        if !rec.justification.is_empty() {
            println!("      {}", rec.justification);
        }
    }
}
