//! Embedded static assets (the hero image).
//!
//! In release mode: assets are embedded into the binary at compile time.
//! In debug mode: rust-embed reads from the filesystem (assets/) at runtime.

use axum::{
    body::Body,
    extract::Path,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use rust_embed::RustEmbed;
use tracing::{debug, instrument};

#[derive(RustEmbed)]
#[folder = "assets/"]
#[include = "*.svg"]
#[include = "*.png"]
#[include = "*.jpg"]
#[include = "*.webp"]
pub struct SiteAssets;

/// Serve one embedded asset by its path under `/assets/`.
#[instrument]
pub async fn serve_asset(Path(path): Path<String>) -> Response {
    match SiteAssets::get(&path) {
        Some(content) => {
            let mime = mime_guess::from_path(&path).first_or_octet_stream();
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, mime.to_string()),
                    // Assets are immutable for the process lifetime
                    (header::CACHE_CONTROL, "public, max-age=31536000".to_string()),
                ],
                Body::from(content.data),
            )
                .into_response()
        }
        None => {
            debug!(path = %path, "asset not found");
            StatusCode::NOT_FOUND.into_response()
        }
    }
}
