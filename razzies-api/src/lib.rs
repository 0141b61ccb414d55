//! razzies-api library - Golden Raspberry Awards producer intervals
//!
//! Read-only HTTP service reporting which worst-movie producers had the
//! shortest and longest gaps between consecutive wins.

use axum::Router;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod db;
pub mod domain;
pub mod error;

pub use crate::error::{ApiError, ApiResult};

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,
    /// Service startup timestamp for uptime tracking
    pub startup_time: DateTime<Utc>,
}

impl AppState {
    /// Create new application state
    pub fn new(db: SqlitePool) -> Self {
        Self {
            db,
            startup_time: Utc::now(),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route(
            api::intervals::PRODUCERS_INTERVALS_PATH,
            get(api::producers_intervals),
        )
        .route("/api/buildinfo", get(api::get_build_info))
        .route("/api-docs/openapi.json", get(api::openapi_json))
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
