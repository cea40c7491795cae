mod admin;
mod console;
mod http_client;
mod model;

use std::sync::Arc;

use clap::Parser;

use admin::{AdminClient, SessionStore};
use model::arg::Args;
use model::config::Config;

#[tokio::main]
async fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config_path = args
        .config
        .unwrap_or_else(|| Config::default_config_path().to_string());
    let config = Config::load(&config_path).unwrap_or_else(|e| {
        tracing::error!("Failed to load config: {}", e);
        std::process::exit(1);
    });

    // Load the session (credential persists across runs)
    let session_path = args.session.unwrap_or_else(|| config.session_path.clone());
    let session = Arc::new(SessionStore::load(&session_path));

    let client = AdminClient::new(&config, session).unwrap_or_else(|e| {
        tracing::error!("Failed to create API client: {}", e);
        std::process::exit(1);
    });
    if client.session().is_authenticated() {
        tracing::debug!("Loaded session from {}", session_path);
    }

    if let Err(e) = console::run(args.command, &client).await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}
