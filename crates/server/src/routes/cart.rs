//! Cart relay route handler.

use axum::{Json, extract::State, http::StatusCode};
use serde::Deserialize;
use serde_json::Value;
use tracing::instrument;

use impex_core::NewCartSubmission;

use crate::error::Result;
use crate::routes::contact::SubmitResponse;
use crate::state::AppState;

/// Cart submission payload. The cart items are opaque client data.
#[derive(Debug, Deserialize)]
pub struct CartForm {
    #[serde(default)]
    pub cart: Vec<Value>,
    #[serde(default)]
    pub contact: String,
    #[serde(default)]
    pub message: String,
}

/// Relay a shopping cart to the admin.
///
/// POST /api/send-cart
///
/// Requires a non-empty cart array and a contact value; 400 otherwise.
#[instrument(skip(state, form))]
pub async fn submit(
    State(state): State<AppState>,
    Json(form): Json<CartForm>,
) -> Result<(StatusCode, Json<SubmitResponse>)> {
    let contact = form.contact.trim();

    if form.cart.is_empty() || contact.is_empty() {
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(SubmitResponse::failure("Missing cart or contact")),
        ));
    }

    let stored = state
        .carts()
        .append(NewCartSubmission {
            contact: contact.to_string(),
            message: form.message.trim().to_string(),
            cart: form.cart,
        })
        .await?;
    tracing::info!(id = %stored.id, items = stored.cart.len(), "Cart submission stored");

    Ok((StatusCode::OK, Json(SubmitResponse::ok())))
}
