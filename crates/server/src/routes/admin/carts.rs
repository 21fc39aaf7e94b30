//! Admin view of relayed carts.

use askama::Template;
use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
};
use tracing::instrument;

use impex_core::CartSubmission;

use crate::error::Result;
use crate::middleware::RequireAdminAuth;
use crate::state::AppState;

/// Cart submission list template.
#[derive(Template)]
#[template(path = "admin/carts.html")]
struct CartsTemplate {
    carts: Vec<CartSubmission>,
}

/// List cart submissions.
///
/// GET /admin/carts
#[instrument(skip(_admin, state))]
pub async fn index(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
) -> Result<Html<String>> {
    let carts = state.carts().load().await?;
    let template = CartsTemplate { carts };
    Ok(Html(template.render()?))
}

/// Delete one cart submission and return to the list.
///
/// POST /admin/delete-cart/{id}
#[instrument(skip(_admin, state))]
pub async fn delete(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Redirect> {
    state.carts().delete(&id).await?;
    tracing::info!(%id, "Cart submission deleted");
    Ok(Redirect::to("/admin/carts"))
}
