//! Router assembly and serve loop for the gateway.
//!
//! The API routes are registered through the transport; the health route and
//! middleware layers are the platform's own surface.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use openapi_edge_transport::{EdgeTransport, TransportConfig, TransportError};

use crate::config::HttpConfig;
use crate::service::{TaskApi, register_operations};

/// Build the gateway router.
///
/// Routes:
/// - `GET /health` - Health check (platform-side, not transport-registered)
/// - `GET /tasks` - List tasks (`limit`, `offset`)
/// - `POST /tasks` - Create a task
/// - `GET /tasks/:id` - Fetch a task
/// - `DELETE /tasks/:id` - Delete a task
///
/// # Errors
///
/// Returns an error if an operation cannot be registered.
pub fn build_router<A: TaskApi>(
    api: Arc<A>,
    transport_config: TransportConfig,
    request_timeout: Duration,
) -> Result<Router, TransportError> {
    let platform_router = Router::new().route("/health", get(health_check));

    let mut transport = EdgeTransport::with_config(platform_router, transport_config);
    register_operations(&mut transport, api)?;

    Ok(transport
        .into_router()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(request_timeout))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        ))
}

/// Health check handler.
async fn health_check() -> (StatusCode, &'static str) {
    (StatusCode::OK, "OK")
}

/// Run the server until shutdown.
///
/// Blocks until the listener fails or, when graceful shutdown is enabled, a
/// SIGTERM/SIGINT arrives.
///
/// # Errors
///
/// Returns an error if the server cannot bind to the configured address.
pub async fn run(router: Router, config: &HttpConfig) -> anyhow::Result<()> {
    let listener = TcpListener::bind(config.listen)
        .await
        .with_context(|| format!("Failed to bind {}", config.listen))?;

    info!(addr = %config.listen, "Starting HTTP server");

    if config.graceful_shutdown {
        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("Server error")?;
    } else {
        axum::serve(listener, router).await.context("Server error")?;
    }

    info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (SIGTERM or SIGINT).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received");
}
