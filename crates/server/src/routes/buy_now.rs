//! Buy-now lead route handlers.

use askama::Template;
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::Html,
};
use serde::Deserialize;
use tracing::instrument;

use impex_core::{NewBuyRequest, Product};

use crate::error::{AppError, Result};
use crate::routes::contact::SubmitResponse;
use crate::state::AppState;

/// Buy-now form page template.
#[derive(Template)]
#[template(path = "buy_now.html")]
struct BuyNowTemplate {
    product: Product,
}

/// Query parameters for the buy-now page.
#[derive(Debug, Deserialize)]
pub struct BuyNowQuery {
    #[serde(default)]
    pub id: String,
}

/// Buy-now submission payload.
#[derive(Debug, Deserialize)]
pub struct BuyNowForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub contact: String,
    #[serde(default)]
    pub message: String,
    #[serde(default, rename = "productId")]
    pub product_id: String,
}

/// Buy-now form page for one product.
///
/// GET /buy-now?id={id}
#[instrument(skip(state))]
pub async fn page(
    State(state): State<AppState>,
    Query(query): Query<BuyNowQuery>,
) -> Result<Html<String>> {
    let product = state
        .catalog()
        .find(&query.id)
        .await?
        .ok_or_else(|| AppError::NotFound("Product not found".to_string()))?;

    let template = BuyNowTemplate { product };
    Ok(Html(template.render()?))
}

/// Submit a buy-now lead.
///
/// POST /buy-now
///
/// Requires name, contact, and a resolvable productId; 400 otherwise. The
/// stored record embeds a full snapshot of the product at submission time.
#[instrument(skip(state, form))]
pub async fn submit(
    State(state): State<AppState>,
    Json(form): Json<BuyNowForm>,
) -> Result<(StatusCode, Json<SubmitResponse>)> {
    let name = form.name.trim();
    let contact = form.contact.trim();
    let product = state.catalog().find(&form.product_id).await?;

    let Some(product) = product else {
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(SubmitResponse::failure("Missing required fields")),
        ));
    };
    if name.is_empty() || contact.is_empty() {
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(SubmitResponse::failure("Missing required fields")),
        ));
    }

    let stored = state
        .buy_requests()
        .append(NewBuyRequest {
            name: name.to_string(),
            contact: contact.to_string(),
            message: form.message.trim().to_string(),
            product,
        })
        .await?;
    tracing::info!(id = %stored.id, product = %stored.product.title, "Buy request stored");

    Ok((StatusCode::OK, Json(SubmitResponse::ok())))
}
