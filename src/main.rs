//! Text-to-SQL Query Server - Main entry point.
//!
//! Wires configuration into the pipeline components and serves the HTTP API.

use clap::Parser;
use std::sync::Arc;
use text2sql_server::config::Config;
use text2sql_server::db::Database;
use text2sql_server::llm::{CompletionClient, SqlGenerator};
use text2sql_server::server::{AppState, HttpServer};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize the tracing subscriber for logging.
fn init_tracing(config: &Config) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if config.json_logs {
        subscriber.with(fmt::layer().json()).init();
    } else {
        subscriber
            .with(fmt::layer().with_target(true).with_thread_ids(false))
            .init();
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::parse();

    init_tracing(&config);

    info!(
        database = %config.database,
        model = %config.model,
        "Starting Text-to-SQL Query Server v{}",
        env!("CARGO_PKG_VERSION")
    );

    let db = Database::new(&config);
    let generator: Arc<dyn SqlGenerator> = Arc::new(CompletionClient::new(&config));
    let state = Arc::new(AppState::new(db, generator));

    let server = HttpServer::new(&config, state);
    if let Err(e) = server.run().await {
        error!(error = %e, "Server error");
        return Err(e.into());
    }

    info!("Server shutdown complete");
    Ok(())
}
