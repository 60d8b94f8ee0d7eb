use clap::{Parser, Subcommand};
use questionnaire_core::Config;

mod commands;
mod logging;
mod terminal_view;

#[derive(Parser)]
#[command(name = "questionnaire-cli", version, about = "Student questionnaire CLI")]
struct Cli {
    /// Log at debug level regardless of config and RUST_LOG
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fill in the questionnaire interactively, step by step
    Fill(commands::fill::FillArgs),
    /// Validate every step of an answers file
    Check(commands::check::CheckArgs),
    /// Walk an answers file through the wizard and submit it
    Submit(commands::submit::SubmitArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    // The subscriber needs the configured level, so a load failure is only
    // reported once it is installed.
    let (config, load_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };
    logging::init_logging(&config, cli.debug);
    if let Some(e) = load_error {
        tracing::warn!("using default configuration: {e}");
    }

    let result = match cli.command {
        Commands::Fill(args) => commands::fill::run(args, &config),
        Commands::Check(args) => commands::check::run(args),
        Commands::Submit(args) => commands::submit::run(args, &config),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
