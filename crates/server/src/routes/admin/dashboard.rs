//! Admin dashboard.

use askama::Template;
use axum::{extract::State, response::Html};
use tracing::instrument;

use crate::error::Result;
use crate::middleware::RequireAdminAuth;
use crate::state::AppState;

/// Dashboard template with per-resource record counts.
#[derive(Template)]
#[template(path = "admin/dashboard.html")]
struct DashboardTemplate {
    message_count: usize,
    cart_count: usize,
    buy_count: usize,
}

/// Dashboard summary page.
///
/// GET /admin
#[instrument(skip(_admin, state))]
pub async fn index(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
) -> Result<Html<String>> {
    let (messages, carts, buy_requests) = tokio::join!(
        state.messages().load(),
        state.carts().load(),
        state.buy_requests().load(),
    );

    let template = DashboardTemplate {
        message_count: messages?.len(),
        cart_count: carts?.len(),
        buy_count: buy_requests?.len(),
    };
    Ok(Html(template.render()?))
}
