//! Logging initialization for the CLI. Logs always go to stderr so stdout
//! stays usable for JSON output.

use questionnaire_core::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber.
///
/// RUST_LOG wins over `logging.level` from the config; `--debug` wins over both.
pub fn init_logging(config: &Config, debug_override: bool) {
    let filter = if debug_override {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}
