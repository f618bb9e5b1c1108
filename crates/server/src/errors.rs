//! Status code mapping for service errors.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use ydaemon_rs_api::{ApiError, ErrorCategory};

/// A service error on its way out as an HTTP response.
///
/// Bodies are short plain-text messages. Upstream failures never expose the
/// underlying error; it is logged by the service instead.
#[derive(Debug)]
pub struct HttpError(pub ApiError);

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        Self(err)
    }
}

impl HttpError {
    /// Status code and body for this error.
    pub fn status_and_message(&self) -> (StatusCode, &'static str) {
        match self.0.error_category() {
            ErrorCategory::Validation => {
                let message = match &self.0 {
                    ApiError::InvalidChainId(_) => "invalid chainID",
                    ApiError::UnsupportedChain(_) => "unsupported chainID",
                    _ => "invalid address",
                };
                (StatusCode::BAD_REQUEST, message)
            }
            ErrorCategory::NotFound => (StatusCode::NOT_FOUND, "vault not found"),
            ErrorCategory::Upstream => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Impossible to fetch subgraph",
            ),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        self.status_and_message().into_response()
    }
}
