//! Contact form route handler.

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use impex_core::NewMessage;

use crate::error::Result;
use crate::state::AppState;

/// Contact form payload.
#[derive(Debug, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

/// JSON acknowledgment for form submissions.
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SubmitResponse {
    pub fn ok() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    pub fn failure(error: &str) -> Self {
        Self {
            success: false,
            error: Some(error.to_string()),
        }
    }
}

/// Submit a contact message.
///
/// POST /contact
///
/// Requires name, email, and message; responds 400 with a failure
/// acknowledgment when any is missing and stores nothing.
#[instrument(skip(state, form))]
pub async fn submit(
    State(state): State<AppState>,
    Json(form): Json<ContactForm>,
) -> Result<(StatusCode, Json<SubmitResponse>)> {
    let name = form.name.trim();
    let email = form.email.trim();
    let message = form.message.trim();

    if name.is_empty() || email.is_empty() || message.is_empty() {
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(SubmitResponse::failure("Missing required fields")),
        ));
    }

    let stored = state
        .messages()
        .append(NewMessage {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        })
        .await?;
    tracing::info!(id = %stored.id, "Contact message stored");

    Ok((StatusCode::OK, Json(SubmitResponse::ok())))
}
