//! Public product route handlers.

use askama::Template;
use axum::{
    Json,
    extract::{Path, State},
    response::Html,
};
use tracing::instrument;

use impex_core::Product;

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Product listing page template.
#[derive(Template)]
#[template(path = "products.html")]
struct ProductsTemplate {
    products: Vec<Product>,
}

/// Product detail page template.
#[derive(Template)]
#[template(path = "product_detail.html")]
struct ProductDetailTemplate {
    product: Product,
}

/// Product listing page.
///
/// GET /products
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Html<String>> {
    let products = state.catalog().load().await?;
    let template = ProductsTemplate { products };
    Ok(Html(template.render()?))
}

/// Product detail page.
///
/// GET /product-detail/{id}
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>, Path(id): Path<String>) -> Result<Html<String>> {
    let product = state
        .catalog()
        .find(&id)
        .await?
        .ok_or_else(|| AppError::NotFound("Product not found".to_string()))?;

    let template = ProductDetailTemplate { product };
    Ok(Html(template.render()?))
}

/// Machine-readable product list.
///
/// GET /api/products
#[instrument(skip(state))]
pub async fn api_list(State(state): State<AppState>) -> Result<Json<Vec<Product>>> {
    Ok(Json(state.catalog().load().await?))
}
