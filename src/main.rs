//! Docket server: a browser document manager with trash and exports.
//!
//! Main entry point that parses the command line, loads configuration,
//! initializes logging, and dispatches.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use docket_core::config::AppConfig;

mod cli;

use cli::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match cli.load_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);
    tracing::info!("Docket v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = cli.execute(config).await {
        tracing::error!("Fatal error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}
