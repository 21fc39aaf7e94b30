//! Static storefront pages.

use axum::{
    Router,
    response::Redirect,
    routing::get,
};
use tower_http::services::ServeFile;

use crate::config::AppConfig;
use crate::state::AppState;

/// Routes for the fixed HTML pages served straight from the static dir.
pub fn routes(config: &AppConfig) -> Router<AppState> {
    let dir = &config.static_dir;
    Router::new()
        .route_service("/", ServeFile::new(dir.join("index.html")))
        .route_service("/cart", ServeFile::new(dir.join("cart.html")))
        .route_service("/faq", ServeFile::new(dir.join("faq.html")))
        .route_service(
            "/privacy-policy",
            ServeFile::new(dir.join("privacy-policy.html")),
        )
        .route_service("/terms", ServeFile::new(dir.join("terms.html")))
        .route("/about", get(about))
}

/// The about section lives on the home page.
async fn about() -> Redirect {
    Redirect::to("/#about")
}
