//! lintsight: condense a noisy linter log into a ranked synopsis
//!
//! The report goes to stdout; logs go to stderr.

use clap::Parser;
use lintsight::{Config, ERROR_EXIT_CODE, run};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() {
    let config = Config::parse();

    // Logs go to stderr so the report can be piped
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(config.log_level().into()))
        .with_writer(std::io::stderr)
        .init();

    debug!(?config, "Starting lintsight");

    match run(&config) {
        Ok(outcome) => std::process::exit(outcome.exit_code()),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(ERROR_EXIT_CODE);
        }
    }
}
