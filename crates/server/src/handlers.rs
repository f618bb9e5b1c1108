//! Request handlers.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use ydaemon_rs_api::VaultView;

use crate::errors::HttpError;
use crate::AppState;

/// Query string of the single-vault route.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaultParams {
    /// `all`, `inQueue` or `notInQueue`; anything else means `all`.
    pub strategies_condition: Option<String>,
}

/// `GET /{chain_id}/vaults/{address}`
pub async fn get_vault(
    State(state): State<AppState>,
    Path((chain_id, address)): Path<(String, String)>,
    Query(params): Query<VaultParams>,
) -> Result<Json<VaultView>, HttpError> {
    let view = state
        .service
        .get_vault(&chain_id, &address, params.strategies_condition.as_deref())
        .await?;
    Ok(Json(view))
}

pub async fn health() -> StatusCode {
    StatusCode::OK
}

pub async fn handler_404() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "The requested resource was not found")
}
