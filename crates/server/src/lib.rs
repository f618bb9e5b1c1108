//! yDaemon HTTP server.
//!
//! Exposes [`VaultService`] over HTTP:
//!
//! - `GET /{chain_id}/vaults/{address}?strategiesCondition=inQueue` returns the
//!   assembled vault view as JSON;
//! - `GET /health` returns 200.
//!
//! Errors are plain text: 400 for rejected input, 404 for unknown vaults and
//! 500 when the subgraph fails.

pub mod cli;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod router;

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use ydaemon_rs_api::VaultService;

pub use router::app_router;

/// State shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<VaultService>,
}

impl AppState {
    pub fn new(service: VaultService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

/// Serve the application on `listener` until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> anyhow::Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr().context("Failed to read listener address")?;
    tracing::info!(%addr, "ydaemon listening");

    axum::serve(listener, app_router(state))
        .with_graceful_shutdown(shutdown)
        .await
        .context("HTTP server failed")
}
