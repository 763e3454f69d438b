use anyhow::{Context, Result};
use clap::Parser;
use portfolio_builder::app_log;
use portfolio_builder::cli::{self, Cli};
use portfolio_builder::store::SnapshotFile;
use portfolio_builder::{ConfigManager, ServiceClient, SessionStore, Wizard, WorkflowError};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

fn init_logging(log_file: &Path) -> Result<()> {
    if let Some(parent) = log_file.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true) // Clear file on startup
        .open(log_file)
        .with_context(|| format!("Failed to open log file: {}", log_file.display()))?;

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .json()
                .with_writer(file)
                .with_current_span(false)
                .with_span_list(false),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = ConfigManager::load()?;
    init_logging(&config.storage.log_file)?;

    app_log!(info, "Loaded configuration for environment: {}", config.environment);
    config.ensure_directories().await?;
    app_log!(info, "API: {}", config.service.api_url);
    app_log!(info, "State: {}", config.storage.state_dir.display());

    let tools = ServiceClient::new(
        config.service.api_url.clone(),
        config.service.preview_url.clone(),
        config.storage.state_dir.clone(),
    )?;
    let store = SessionStore::open(SnapshotFile::in_dir(&config.storage.state_dir));
    let mut wizard = Wizard::new(store, Arc::new(tools));

    let result = cli::handle_command(cli.command, &mut wizard).await;
    cli::print_notices(wizard.take_notices());

    if let Err(e) = result {
        // Workflow failures were already shown as notices
        if e.downcast_ref::<WorkflowError>().is_none() {
            eprintln!("❌ Error: {:#}", e);
        }
        app_log!(error, "Command failed: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
