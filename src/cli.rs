//! Command-line interface.

use std::sync::Arc;

use clap::{Args, Parser, Subcommand};

use docket_core::config::AppConfig;
use docket_core::error::AppError;
use docket_service::TrashReaper;
use docket_storage::DocumentRepository;

/// Docket: a small document manager with trash and exports
#[derive(Debug, Parser)]
#[command(name = "docket-server", version, about, long_about = None)]
pub struct Cli {
    /// Path to an extra configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Subcommand to execute (defaults to `serve`)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the HTTP server
    Serve(ServeArgs),
    /// Delete expired trash documents once and exit
    ReapTrash,
}

/// Arguments for `serve`
#[derive(Debug, Default, Args)]
pub struct ServeArgs {
    /// Override bind host
    #[arg(long)]
    pub host: Option<String>,

    /// Override bind port
    #[arg(short, long)]
    pub port: Option<u16>,
}

impl Cli {
    /// Load configuration from the optional file and the environment.
    pub fn load_config(&self) -> Result<AppConfig, AppError> {
        AppConfig::load(self.config.as_deref())
    }

    /// Execute the selected command.
    pub async fn execute(self, mut config: AppConfig) -> Result<(), AppError> {
        match self.command {
            None => docket_api::run_server(config).await,
            Some(Commands::Serve(args)) => {
                if let Some(host) = args.host {
                    config.server.host = host;
                }
                if let Some(port) = args.port {
                    config.server.port = port;
                }
                docket_api::run_server(config).await
            }
            Some(Commands::ReapTrash) => reap_trash(&config).await,
        }
    }
}

async fn reap_trash(config: &AppConfig) -> Result<(), AppError> {
    let repo = Arc::new(DocumentRepository::open(&config.storage).await?);
    let reaper = TrashReaper::from_config(repo, &config.trash);

    let report = reaper.reap_expired().await?;

    println!(
        "Removed {} expired file(s) (retention: {} days)",
        report.removed.len(),
        reaper.retention_days()
    );
    for file in &report.removed {
        println!("  {file}");
    }
    for warning in &report.warnings {
        println!("  warning: {warning}");
    }

    Ok(())
}
