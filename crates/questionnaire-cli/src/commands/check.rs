//! Check subcommand: validate an answers file without submitting it.

use clap::Args;
use questionnaire_core::wizard::step_title;
use questionnaire_core::{validate_step, StepReport, TOTAL_STEPS};
use std::path::PathBuf;

use super::load_answers;

#[derive(Args)]
pub struct CheckArgs {
    /// JSON file with the form answers
    pub file: PathBuf,
    /// Print the reports as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: CheckArgs) -> Result<(), Box<dyn std::error::Error>> {
    let answers = load_answers(&args.file)?;
    let reports = (1..=TOTAL_STEPS)
        .map(|step| validate_step(step, &answers))
        .collect::<Result<Vec<StepReport>, _>>()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            let title = step_title(report.step).unwrap_or_default();
            if report.is_valid() {
                println!("Step {} ({title}): ok", report.step);
            } else {
                println!("Step {} ({title}):", report.step);
                for error in &report.errors {
                    println!("  - {} [{}]", error.summary, error.field);
                }
            }
        }
    }

    let invalid = reports.iter().filter(|r| !r.is_valid()).count();
    if invalid > 0 {
        return Err(format!("{invalid} step(s) failed validation").into());
    }
    Ok(())
}
