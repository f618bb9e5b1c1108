//! yDaemon - serve denormalized vault views.

use anyhow::{Context, Result};
use clap::Parser;
use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use ydaemon_rs_server::cli::Cli;
use ydaemon_rs_server::config::build_service;
use ydaemon_rs_server::{serve, AppState};

fn init_logger() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("ydaemon=info,ydaemon_rs_api=info,ydaemon_rs_server=info,tower_http=info")
    });
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("shutting down");
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    init_logger();

    let cli = Cli::parse();
    let service = build_service(&cli).context("Invalid configuration")?;

    let address = format!("{}:{}", cli.host, cli.port);
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;

    serve(listener, AppState::new(service), shutdown_signal()).await
}
