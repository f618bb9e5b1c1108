use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::{handlers, AppState};

/// Build the application router.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/{chain_id}/vaults/{address}", get(handlers::get_vault))
        .fallback(handlers::handler_404)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
