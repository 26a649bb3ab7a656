//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`            - Submission form
//! - `POST /`            - Shorten `input_url`, render both aliases and a QR code
//! - `GET  /health`      - Health check for both store namespaces
//! - `GET  /favicon.ico` - Static icon
//! - `GET  /style.css`   - Static stylesheet
//! - `GET  /{short}`     - Alias redirect (human slug or bot token)
//!
//! Anything else renders the oops page with 404.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::{health_handler, index_handler, redirect_handler, shorten_handler};
use crate::api::middleware::tracing;
use crate::error::not_found_page;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeFile;

/// Directory holding the favicon and stylesheet.
pub const STATIC_DIR: &str = "static";

/// Builds the router with all routes and the tracing layer.
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler).post(shorten_handler))
        .route("/health", get(health_handler))
        .route_service(
            "/favicon.ico",
            ServeFile::new(format!("{STATIC_DIR}/favicon.ico")),
        )
        .route_service("/style.css", ServeFile::new(format!("{STATIC_DIR}/style.css")))
        .route("/{short}", get(redirect_handler))
        .fallback(not_found_page)
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application router with trailing slashes trimmed, so
/// `/{short}/` resolves like `/{short}`.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(routes(state))
}
