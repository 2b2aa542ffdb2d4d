//! HTTP presentation layer: routes, handlers and the client-facing error type.

pub mod exercises;
pub mod healthcheck;

pub use exercises::{exercises, translation_pairs, words};
pub use healthcheck::healthcheck;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config;
use crate::state::AppState;

/// Build the API router with all routes and the shared state.
///
/// Audio files are pre-generated outside this service; we only serve the
/// directory and construct the URLs pointing into it.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthcheck", get(healthcheck))
        .route("/translation-pairs", get(translation_pairs))
        .route("/exercises", get(exercises))
        .route("/words", get(words))
        .nest_service("/audio", ServeDir::new(config::load_audio_dir()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Error surfaced to API clients as a JSON `detail` body.
///
/// Query-level validation (missing parameters, unsupported translation pairs)
/// is rejected by the extractor before a handler runs; only corpus access can
/// fail here.
#[derive(Debug)]
pub enum ApiError {
    /// Corpus database unavailable or a query failed
    Database,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::Database => (StatusCode::INTERNAL_SERVER_ERROR, "corpus unavailable"),
        };
        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

impl From<crate::db::DbLockError> for ApiError {
    fn from(_: crate::db::DbLockError) -> Self {
        ApiError::Database
    }
}

impl From<rusqlite::Error> for ApiError {
    fn from(e: rusqlite::Error) -> Self {
        tracing::error!("corpus query failed: {}", e);
        ApiError::Database
    }
}
