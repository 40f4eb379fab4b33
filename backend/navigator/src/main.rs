//! FoodShare navigator — entry point.
//!
//! Starts the navigation loop that owns the screen state machine and the
//! resend-cooldown ticker, and exposes it to a screen renderer through a
//! small Axum API. Nothing is persisted: every start begins on `Welcome`.

mod api;
mod config;
mod errors;
mod runtime;
mod ticker;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialise structured logging (RUST_LOG controls verbosity).
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Load optional .env file (ignored if missing).
    let _ = dotenvy::dotenv();

    let config = Config::from_env().map_err(|e| anyhow::anyhow!("{e}"))?;

    // ─── Navigation loop ──────────────────────────────────
    let (handle, _loop_task) = runtime::spawn(&config);

    // ─── Renderer bridge ──────────────────────────────────
    let api_state = Arc::new(api::ApiState { handle });

    let app = Router::new()
        .route("/health", get(api::health))
        .route("/screen", get(api::get_screen))
        .route("/session", get(api::get_session))
        .route("/actions", post(api::post_action))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(api_state);

    let addr = format!("0.0.0.0:{}", config.api_port);
    info!(
        "Renderer bridge listening on http://{addr} (tick every {} ms)",
        config.tick_interval.as_millis()
    );

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(errors::NavigatorError::from)?;
    axum::serve(listener, app).await?;

    Ok(())
}
