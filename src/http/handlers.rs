//! Request handlers for the console shell.

use axum::{
    extract::State,
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::console::Page;
use crate::http::server::AppState;
use crate::navigation::NavigationGroups;
use crate::session::{SessionSource, SessionState};

#[derive(Serialize)]
pub struct SystemStatus {
    pub version: &'static str,
    pub status: &'static str,
    pub declaration_key: String,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub api_key: String,
}

pub async fn get_status(State(state): State<AppState>) -> Json<SystemStatus> {
    Json(SystemStatus {
        version: env!("CARGO_PKG_VERSION"),
        status: "operational",
        declaration_key: state.console.declaration_key().to_string(),
    })
}

pub async fn get_session(State(state): State<AppState>) -> Json<SessionState> {
    Json(state.session.session())
}

/// Log in, then re-render so the authenticated tree mounts and publishes.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Response {
    if !state.session.login(&request.api_key) {
        return (StatusCode::UNAUTHORIZED, "Invalid API key").into_response();
    }
    rerender(&state)
}

/// Log out, then re-render so the authenticated tree unmounts.
pub async fn logout(State(state): State<AppState>) -> Response {
    state.session.logout();
    rerender(&state)
}

fn rerender(state: &AppState) -> Response {
    let session = state.session.session();
    match state.console.render(session) {
        Ok(_) => Json(session).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Console render failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "Console render failed").into_response()
        }
    }
}

fn published(state: &AppState) -> Result<std::sync::Arc<NavigationGroups>, Response> {
    if !state.session.session().is_auth {
        return Err((StatusCode::UNAUTHORIZED, "Not authenticated").into_response());
    }
    state
        .navigation
        .routes()
        .ok_or_else(|| (StatusCode::NOT_FOUND, "Navigation not published").into_response())
}

pub async fn get_navigation(State(state): State<AppState>) -> Response {
    match published(&state) {
        Ok(groups) => Json(groups.as_ref().clone()).into_response(),
        Err(response) => response,
    }
}

pub async fn get_sidebar(State(state): State<AppState>) -> Response {
    match published(&state) {
        Ok(groups) => Json(groups.sidebar()).into_response(),
        Err(response) => response,
    }
}

/// Resolve the request path against the current route tree.
pub async fn render_page(State(state): State<AppState>, uri: Uri) -> Response {
    let frame = match state.console.render(state.session.session()) {
        Ok(frame) => frame,
        Err(e) => {
            tracing::error!(error = %e, "Console render failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, "Console render failed").into_response();
        }
    };

    let page = frame.render(uri.path()).await;
    if let Page::Redirect { to } = &page {
        let location = format!("/{to}");
        return (
            StatusCode::TEMPORARY_REDIRECT,
            [(header::LOCATION, location)],
            Json(page),
        )
            .into_response();
    }

    let status = match &page {
        Page::View { .. } | Page::Redirect { .. } => StatusCode::OK,
        Page::Fallback { .. } => StatusCode::NOT_FOUND,
        Page::Loading { .. } => StatusCode::ACCEPTED,
        Page::Failed { .. } => StatusCode::SERVICE_UNAVAILABLE,
    };
    (status, Json(page)).into_response()
}
