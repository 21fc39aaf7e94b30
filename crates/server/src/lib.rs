//! Impex server - storefront and admin panel.
//!
//! # Architecture
//!
//! - Axum web framework with Askama server-side templates
//! - Flat JSON files under the data directory, one per resource, accessed
//!   through `impex-core`'s record stores
//! - In-memory tower-sessions carrying the admin login flag
//! - Uploaded product images stored on disk and served under `/uploads`

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;

use axum::{Router, http::StatusCode, routing::get};
use tower_http::{services::ServeDir, trace::TraceLayer};

pub use config::AppConfig;
pub use state::AppState;

/// Build the full application router.
#[must_use]
pub fn app(state: AppState) -> Router {
    let session_layer = middleware::create_session_layer();

    Router::new()
        .route("/health", get(health))
        .merge(routes::routes(state.config()))
        .nest_service(
            "/uploads",
            ServeDir::new(state.config().uploads_dir.clone()),
        )
        .fallback(not_found)
        .layer(session_layer)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}

/// Generic response for unmatched routes.
async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Page not found")
}
