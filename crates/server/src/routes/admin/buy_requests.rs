//! Admin view of buy-now leads.

use askama::Template;
use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
};
use tracing::instrument;

use impex_core::BuyRequest;

use crate::error::Result;
use crate::middleware::RequireAdminAuth;
use crate::state::AppState;

/// Buy request list template.
#[derive(Template)]
#[template(path = "admin/buy_requests.html")]
struct BuyRequestsTemplate {
    requests: Vec<BuyRequest>,
}

/// List buy requests.
///
/// GET /admin/buy-requests
#[instrument(skip(_admin, state))]
pub async fn index(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
) -> Result<Html<String>> {
    let requests = state.buy_requests().load().await?;
    let template = BuyRequestsTemplate { requests };
    Ok(Html(template.render()?))
}

/// Delete one buy request and return to the list.
///
/// POST /admin/delete-buy-request/{id}
#[instrument(skip(_admin, state))]
pub async fn delete(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Redirect> {
    state.buy_requests().delete(&id).await?;
    tracing::info!(%id, "Buy request deleted");
    Ok(Redirect::to("/admin/buy-requests"))
}
