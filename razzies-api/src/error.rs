//! Error types for razzies-api
//!
//! Every failure reaching the HTTP layer is reported as a 500 with an
//! opaque JSON body; no partial result is ever returned.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Winning-record fetch failed (connectivity, query error)
    #[error("Data source error: {0}")]
    DataSource(String),
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        ApiError::DataSource(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!("Request failed: {}", self);

        let error_code = match self {
            ApiError::DataSource(_) => "DATA_SOURCE_ERROR",
        };

        let body = Json(json!({
            "error": {
                "code": error_code,
                "message": "Failed to process the request",
            }
        }));

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
