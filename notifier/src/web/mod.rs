//! Web server module for receiving GitHub webhooks.
//!
//! This module provides:
//! - The webhook, health and root handlers
//! - Signature verification of raw request bodies
//! - [`router`], which wires both into an axum [`Router`]

pub mod handlers;
pub mod signature;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

pub use handlers::{github_webhook, health, root, AppState, HealthResponse, RootResponse};
pub use signature::{verify_github_signature, Rejection, Verification};

/// Path GitHub is configured to deliver to.
pub const WEBHOOK_PATH: &str = "/webhook/github";

/// GitHub caps webhook payloads at 25 MB.
pub const MAX_BODY_BYTES: usize = 25 * 1024 * 1024;

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route(WEBHOOK_PATH, post(github_webhook))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
