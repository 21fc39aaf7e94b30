//! Admin panel route handlers.
//!
//! Everything except the login endpoints extracts [`RequireAdminAuth`]
//! first; an anonymous session is redirected to `/admin/login`.
//!
//! [`RequireAdminAuth`]: crate::middleware::RequireAdminAuth

pub mod auth;
pub mod buy_requests;
pub mod carts;
pub mod dashboard;
pub mod messages;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the admin routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/admin/login", get(auth::login_page).post(auth::login))
        .route("/admin/logout", get(auth::logout))
        .route("/admin", get(dashboard::index))
        .route("/admin/messages", get(messages::index))
        .route("/admin/delete-message/{id}", post(messages::delete))
        .route("/admin/carts", get(carts::index))
        .route("/admin/delete-cart/{id}", post(carts::delete))
        .route("/admin/buy-requests", get(buy_requests::index))
        .route("/admin/delete-buy-request/{id}", post(buy_requests::delete))
        .route("/admin/products", get(products::index))
        .route(
            "/admin/add-product",
            get(products::add_page).post(products::add),
        )
        .route("/admin/delete-product/{id}", post(products::delete))
}
