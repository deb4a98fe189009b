//! HTTP endpoint handlers.
//!
//! The webhook handler:
//! 1. Verifies the body signature against the raw bytes
//! 2. Hands the body to the [`Dispatcher`]
//! 3. Returns the dispatch outcome as JSON
//!
//! Only authentication failures change the status code; every other outcome
//! is a 200 so GitHub does not redeliver events we deliberately skipped.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::{info, warn};

use crate::dispatch::Dispatcher;
use crate::web::signature::{verify_github_signature, Verification, SIGNATURE_HEADER};
use crate::Config;

/// Header naming the GitHub event type.
pub const EVENT_HEADER: &str = "X-GitHub-Event";

/// Header carrying GitHub's unique delivery id.
pub const DELIVERY_HEADER: &str = "X-GitHub-Delivery";

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub dispatcher: Arc<Dispatcher>,
}

impl AppState {
    pub fn new(config: Config, dispatcher: Dispatcher) -> Self {
        Self {
            config: Arc::new(config),
            dispatcher: Arc::new(dispatcher),
        }
    }
}

// =============================================================================
// Health Check
// =============================================================================

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Health check endpoint.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Service banner response.
#[derive(Serialize)]
pub struct RootResponse {
    pub status: &'static str,
    pub service: &'static str,
}

/// Root endpoint identifying the service.
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        status: "ok",
        service: "github-notifier",
    })
}

// =============================================================================
// GitHub Webhook
// =============================================================================

/// Body returned when authentication fails.
#[derive(Serialize)]
pub struct UnauthorizedResponse {
    pub status: &'static str,
    pub reason: &'static str,
}

fn header<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

/// GitHub webhook endpoint.
pub async fn github_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let event = header(&headers, EVENT_HEADER).unwrap_or_default();
    let delivery = header(&headers, DELIVERY_HEADER).unwrap_or("unknown");

    info!(
        event = %event,
        delivery = %delivery,
        body_length = body.len(),
        "github_webhook_received"
    );

    match verify_github_signature(
        state.config.github_webhook_secret.as_deref(),
        &body,
        header(&headers, SIGNATURE_HEADER),
    ) {
        Verification::Verified => {}
        Verification::Unverified => {
            warn!(delivery = %delivery, "github_signature_verification_disabled");
        }
        Verification::Rejected(rejection) => {
            warn!(
                delivery = %delivery,
                reason = rejection.as_str(),
                "github_webhook_unauthorized"
            );
            return (
                StatusCode::FORBIDDEN,
                Json(UnauthorizedResponse {
                    status: "unauthorized",
                    reason: rejection.as_str(),
                }),
            )
                .into_response();
        }
    }

    let result = state.dispatcher.dispatch(event, &body).await;

    info!(
        event = %event,
        delivery = %delivery,
        status = ?result.status,
        reason = result.reason.unwrap_or_default(),
        "github_webhook_processed"
    );

    (StatusCode::OK, Json(result)).into_response()
}
