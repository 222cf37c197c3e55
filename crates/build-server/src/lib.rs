//! HTTP surface of the document build proxy

pub mod error;
pub mod handlers;
pub mod state;
pub mod upload;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;

pub use error::ApiError;
pub use state::AppState;

/// Build the application router
pub fn router(state: Arc<AppState>) -> Router {
    let body_limit = DefaultBodyLimit::max(state.max_upload_bytes);

    Router::new()
        .route("/api/build", post(handlers::build::build))
        .route("/health", get(handlers::health::health))
        .layer(body_limit)
        .with_state(state)
}
