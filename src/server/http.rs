//! HTTP server lifecycle.
//!
//! Builds the axum router and serves it with graceful shutdown on SIGINT or
//! SIGTERM. The serving runtime is the only concurrency machinery in the
//! process; handlers themselves are plain sequential pipelines.

use crate::config::Config;
use crate::server::handlers::{self, AppState};
use axum::Router;
use axum::routing::get;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::info;

/// Build the application router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/query", get(handlers::run_query))
        .route("/schema", get(handlers::get_schema))
        .with_state(state)
}

/// HTTP server bound to the configured host and port.
pub struct HttpServer {
    state: Arc<AppState>,
    bind_addr: String,
}

impl HttpServer {
    pub fn new(config: &Config, state: Arc<AppState>) -> Self {
        Self {
            state,
            bind_addr: config.http_bind_addr(),
        }
    }

    /// Get the bind address.
    pub fn bind_addr(&self) -> &str {
        &self.bind_addr
    }

    /// Serve until a shutdown signal arrives.
    pub async fn run(self) -> std::io::Result<()> {
        let app = router(self.state);
        let listener = TcpListener::bind(&self.bind_addr).await?;
        info!(addr = %self.bind_addr, "HTTP server listening");

        axum::serve(listener, app)
            .with_graceful_shutdown(wait_for_signal())
            .await?;

        info!("HTTP server stopped");
        Ok(())
    }
}

/// Wait for a shutdown signal (SIGINT or SIGTERM).
async fn wait_for_signal() {
    let ctrl_c = signal::ctrl_c();

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received SIGINT"),
        _ = terminate => info!("Received SIGTERM"),
    }
}
