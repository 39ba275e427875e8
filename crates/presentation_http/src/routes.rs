//! Route definitions

use axum::{Router, extract::DefaultBodyLimit, routing::post};
use tower_http::limit::RequestBodyLimitLayer;

use crate::{handlers, state::AppState};

/// Webhook path configured in the Evolution instance
pub const MESSAGES_UPSERT_PATH: &str = "/messages-upsert";

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    let body_limit = state.config.server.max_body_size_json_bytes;

    Router::new()
        // Evolution webhook
        .route(MESSAGES_UPSERT_PATH, post(handlers::messages::messages_upsert))
        .fallback(handlers::not_found)
        // The configured limit replaces axum's built-in 2MB cap
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(body_limit))
        // Attach state
        .with_state(state)
}
