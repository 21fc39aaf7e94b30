//! Admin login and logout.

use askama::Template;
use axum::{
    Form,
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
};
use secrecy::ExposeSecret;
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::Result;
use crate::middleware::{clear_current_admin, set_current_admin};
use crate::models::CurrentAdmin;
use crate::state::AppState;

/// Login page template.
#[derive(Template)]
#[template(path = "admin/login.html")]
struct LoginTemplate {
    error: Option<String>,
}

/// Login form payload.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Render the login form.
///
/// GET /admin/login
pub async fn login_page() -> Result<Html<String>> {
    let template = LoginTemplate { error: None };
    Ok(Html(template.render()?))
}

/// Check the submitted credentials against the configured admin identity.
///
/// POST /admin/login
///
/// Exact match on both fields authenticates the session and redirects to
/// the dashboard; anything else leaves the session anonymous and re-renders
/// the form with an error.
#[instrument(skip(state, session, form))]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Response> {
    let config = state.config();
    let authenticated = form.username == config.admin_username
        && form.password == *config.admin_password.expose_secret();

    if authenticated {
        let admin = CurrentAdmin {
            username: form.username,
        };
        if set_current_admin(&session, &admin).await.is_err() {
            tracing::error!("Failed to write admin session");
        } else {
            tracing::info!(username = %admin.username, "Admin logged in");
            return Ok(Redirect::to("/admin").into_response());
        }
    } else {
        tracing::warn!(username = %form.username, "Rejected admin login");
    }

    let template = LoginTemplate {
        error: Some("Invalid credentials".to_string()),
    };
    Ok(Html(template.render()?).into_response())
}

/// Destroy the session and return to the login form.
///
/// GET /admin/logout
pub async fn logout(session: Session) -> Redirect {
    let _ = clear_current_admin(&session).await;
    Redirect::to("/admin/login")
}
