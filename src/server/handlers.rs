//! Page and health handlers.

use axum::Json;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::instrument;

use super::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
}

/// The pre-rendered page.
#[instrument(skip(state))]
pub async fn page(State(state): State<AppState>) -> Response {
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/html; charset=utf-8"),
            (header::CACHE_CONTROL, "no-cache"),
        ],
        state.page_html().to_string(),
    )
        .into_response()
}

#[instrument]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

#[instrument]
pub async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}
