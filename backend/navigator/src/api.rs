//! Axum renderer bridge.
//!
//! Stands in for the Screen Renderer: it hands out the current screen and
//! its slice of session state, and turns `POST /actions` bodies into
//! dispatches on the navigation loop.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use foodshare_flow::Action;
use serde::Serialize;

use crate::errors::NavigatorError;
use crate::runtime::LoopHandle;

#[derive(Clone)]
pub struct ApiState {
    pub handle: LoopHandle,
}

// ─────────────────────────────────────────────────────────
// Response shapes
// ─────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn error_response(e: NavigatorError) -> Response {
    let status = match e {
        NavigatorError::LoopClosed => StatusCode::SERVICE_UNAVAILABLE,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (
        status,
        Json(ErrorResponse {
            error: e.to_string(),
        }),
    )
        .into_response()
}

// ─────────────────────────────────────────────────────────
// Handlers
// ─────────────────────────────────────────────────────────

/// `GET /health`
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// `GET /screen`
///
/// The current screen, its title, the actions it offers and its props.
pub async fn get_screen(State(state): State<Arc<ApiState>>) -> Response {
    match state.handle.view().await {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(e) => error_response(e),
    }
}

/// `GET /session`
///
/// The whole session store, for debugging renderers.
pub async fn get_session(State(state): State<Arc<ApiState>>) -> Response {
    match state.handle.session().await {
        Ok(session) => (StatusCode::OK, Json(session)).into_response(),
        Err(e) => error_response(e),
    }
}

/// `POST /actions`
///
/// Dispatches one action. Rejected and not-offered actions still answer
/// `200`; the outcome says `ignored` and the view is unchanged.
pub async fn post_action(
    State(state): State<Arc<ApiState>>,
    Json(action): Json<Action>,
) -> Response {
    match state.handle.dispatch(action).await {
        Ok(reply) => (StatusCode::OK, Json(reply)).into_response(),
        Err(e) => error_response(e),
    }
}
