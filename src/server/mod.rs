//! HTTP server exposing the contact endpoint.
//!
//! Routes:
//! - `POST /api/contact` — dispatch a contact form submission
//! - `GET /api/emails/:template` — render a template with sample props
//! - `GET /healthz` — liveness probe

pub mod handlers;

use crate::dispatcher::ContactDispatcher;
use anyhow::Result;
use axum::routing::{get, post};
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub dispatcher: ContactDispatcher,
}

/// Build the application router.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(handlers::healthz))
        .route("/api/contact", post(handlers::submit_contact))
        .route("/api/emails/:template", get(handlers::preview_email))
        .with_state(state)
}

/// Bind `addr` and serve until ctrl-c.
pub async fn run_server(state: Arc<AppState>, addr: SocketAddr) -> Result<()> {
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("Shutdown signal received");
}
