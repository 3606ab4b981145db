//! Router configuration.

use axum::Router;
use axum::routing::get;

use super::handlers;
use super::state::AppState;
use super::static_assets::serve_asset;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::page))
        .route("/health", get(handlers::health))
        .route("/assets/{*path}", get(serve_asset))
        .fallback(handlers::not_found)
        .with_state(state)
}
