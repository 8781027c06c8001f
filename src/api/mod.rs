//! HTTP + WebSocket API for the production-plan calculator.
//!
//! Provides two endpoints:
//! - `POST /productionplan` — compute a plan for the posted payload
//! - `GET /productionplan/notifications` — WebSocket feed carrying the
//!   serialized request and response of every successful calculation

mod handlers;
pub mod listen;
mod types;
mod ws;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tokio::sync::broadcast;

/// Shared application state: the notification fan-out channel.
///
/// The engine itself is stateless, so the only thing handlers share is the
/// broadcast sender feeding connected WebSocket subscribers. Wrapped in
/// `Arc` — no locks needed since the sender is already clone-safe.
pub struct AppState {
    notifier: broadcast::Sender<String>,
}

impl AppState {
    /// Creates state with a notification channel of the given capacity.
    pub fn new(channel_capacity: usize) -> Self {
        let (notifier, _) = broadcast::channel(channel_capacity);
        Self { notifier }
    }

    /// Sends one text payload to all current subscribers.
    ///
    /// Best-effort: a send error only means nobody is listening right now.
    pub fn notify(&self, message: String) {
        let _ = self.notifier.send(message);
    }

    /// Opens a new subscription to the notification feed.
    pub fn subscribe(&self) -> broadcast::Receiver<String> {
        self.notifier.subscribe()
    }
}

/// Builds the axum router with all API routes.
///
/// # Arguments
///
/// * `state` - Shared application state
///
/// # Returns
///
/// Configured `Router` ready to serve.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/productionplan", post(handlers::post_production_plan))
        .route("/productionplan/notifications", get(ws::notifications))
        .with_state(state)
}

/// Binds to the given address and serves the API.
///
/// # Arguments
///
/// * `state` - Shared application state
/// * `addr` - Socket address to bind to
///
/// # Panics
///
/// Panics if the TCP listener cannot bind to `addr`.
pub async fn serve(state: Arc<AppState>, addr: SocketAddr) {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind to {addr}: {e}"));
    tracing::info!("production-plan API listening on http://{addr}");
    axum::serve(listener, app)
        .await
        .unwrap_or_else(|e| panic!("server error: {e}"));
}
