//! Homeowner parse API.
//!
//! A thin axum service over the `homeowner-parser` library: upload a CSV
//! whose first column holds homeowner name strings, get back one
//! structured record per person. The service is stateless; every request
//! is parsed independently and nothing is persisted.

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

pub mod handlers;
pub mod models;

/// Maximum accepted upload size in bytes (2 MB).
pub const MAX_UPLOAD_BYTES: usize = 2 * 1024 * 1024;

async fn health() -> &'static str {
    "OK"
}

/// Build the application router.
#[must_use]
pub fn app() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/parse", post(handlers::parse_upload))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(TraceLayer::new_for_http())
}
