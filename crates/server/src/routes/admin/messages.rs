//! Admin view of contact messages.

use askama::Template;
use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
};
use tracing::instrument;

use impex_core::Message;

use crate::error::Result;
use crate::middleware::RequireAdminAuth;
use crate::state::AppState;

/// Message list template.
#[derive(Template)]
#[template(path = "admin/messages.html")]
struct MessagesTemplate {
    messages: Vec<Message>,
}

/// List contact messages.
///
/// GET /admin/messages
#[instrument(skip(_admin, state))]
pub async fn index(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
) -> Result<Html<String>> {
    let messages = state.messages().load().await?;
    let template = MessagesTemplate { messages };
    Ok(Html(template.render()?))
}

/// Delete one contact message and return to the list.
///
/// POST /admin/delete-message/{id}
#[instrument(skip(_admin, state))]
pub async fn delete(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Redirect> {
    state.messages().delete(&id).await?;
    tracing::info!(%id, "Message deleted");
    Ok(Redirect::to("/admin/messages"))
}
