//! Gateway CLI entry point.
//!
//! Serves the sample task API through the edge transport.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::GatewayConfig;
use crate::service::InMemoryTasks;

mod config;
mod server;
mod service;

/// OpenAPI edge gateway.
#[derive(Debug, Parser)]
#[command(name = "openapi-edge", version, about)]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the listen address from the configuration.
    #[arg(long)]
    bind: Option<SocketAddr>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,openapi_edge=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    // Load configuration
    let mut config =
        GatewayConfig::load(args.config.as_deref()).context("Failed to load configuration")?;
    if let Some(bind) = args.bind {
        config.http.listen = bind;
    }

    info!(listen = %config.http.listen, "Configuration loaded");

    let api = Arc::new(InMemoryTasks::new());
    let router = server::build_router(
        api,
        config.transport.clone(),
        config.http.request_timeout(),
    )?;

    info!("Router initialized. Available endpoints:");
    info!("  GET    /health       - Health check");
    info!("  GET    /tasks        - List tasks (limit, offset)");
    info!("  POST   /tasks        - Create a task");
    info!("  GET    /tasks/:id    - Fetch a task");
    info!("  DELETE /tasks/:id    - Delete a task");

    server::run(router, &config.http).await
}
