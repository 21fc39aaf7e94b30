//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! # Static pages
//! GET  /                        - Home page
//! GET  /cart                    - Cart page
//! GET  /faq                     - FAQ
//! GET  /privacy-policy          - Privacy policy
//! GET  /terms                   - Terms of service
//! GET  /about                   - Redirect to /#about
//!
//! # Products (public)
//! GET  /products                - Product listing
//! GET  /product-detail/{id}     - Product detail (404 if absent)
//! GET  /api/products            - Product list as JSON
//!
//! # Forms (public)
//! POST /contact                 - Contact message (JSON ack)
//! POST /api/send-cart           - Relay cart to admin (JSON ack)
//! GET  /buy-now?id=...          - Buy-now form for one product
//! POST /buy-now                 - Buy-now lead (JSON ack)
//!
//! # Admin
//! GET  /admin/login             - Login form
//! POST /admin/login             - Credential check
//! GET  /admin/logout            - Destroy session
//! GET  /admin                   - Dashboard (counts)
//! GET  /admin/messages          - List messages
//! POST /admin/delete-message/{id}
//! GET  /admin/carts             - List cart submissions
//! POST /admin/delete-cart/{id}
//! GET  /admin/buy-requests      - List buy requests
//! POST /admin/delete-buy-request/{id}
//! GET  /admin/products          - List products
//! GET  /admin/add-product       - Add-product form
//! POST /admin/add-product       - Create product (multipart)
//! POST /admin/delete-product/{id} - 403 for featured positions
//! ```

pub mod admin;
pub mod buy_now;
pub mod cart;
pub mod contact;
pub mod pages;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};

use crate::config::AppConfig;
use crate::state::AppState;

/// Create the public product routes.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(products::index))
        .route("/product-detail/{id}", get(products::show))
        .route("/api/products", get(products::api_list))
}

/// Create the public form submission routes.
pub fn form_routes() -> Router<AppState> {
    Router::new()
        .route("/contact", post(contact::submit))
        .route("/api/send-cart", post(cart::submit))
        .route("/buy-now", get(buy_now::page).post(buy_now::submit))
}

/// Create all routes.
pub fn routes(config: &AppConfig) -> Router<AppState> {
    Router::new()
        .merge(pages::routes(config))
        .merge(product_routes())
        .merge(form_routes())
        .merge(admin::routes())
}
