//! Cockpit server entry point.

mod cli;

use std::sync::Arc;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use cockpit_api::{serve, ApiConfig, AppState};
use cockpit_models::TargetTypes;
use cockpit_persistence::{JsonFileStore, ProjectStore};
use cockpit_service::{Backend, MutationService, ProjectRepository};
use cockpit_upstream::UpstreamClient;

use cli::Cli;

#[tokio::main]
async fn main() {
    // Load .env if present (OP_* credentials etc.).
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level.clone()));
    fmt().with_env_filter(filter).with_target(false).init();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let target_types = TargetTypes::from_csv(cli.target_types.as_deref());

    let backend = if cli.mock_mode() {
        let store = JsonFileStore::new(&cli.data_file);
        // Preflight: an unreadable or malformed store document is a fatal
        // configuration error, not something to discover per-request.
        let projects = store.list()?;
        info!(
            path = %cli.data_file.display(),
            projects = projects.len(),
            "running in local-store mode"
        );
        Backend::Local(Arc::new(store) as Arc<dyn ProjectStore>)
    } else {
        info!(base_url = %cli.base_url, "running in upstream mode");
        Backend::Upstream(UpstreamClient::new(
            &cli.base_url,
            &cli.username,
            Some(cli.api_token.clone()),
        ))
    };

    let config = ApiConfig::new(&cli.host, cli.port);
    let state = AppState::new(
        config.clone(),
        ProjectRepository::new(backend.clone(), target_types),
        MutationService::new(backend),
    );

    serve(config, state).await?;
    Ok(())
}
