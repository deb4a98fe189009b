//! Per-request orchestration: look up, decode, render, deliver.
//!
//! ## Processing Flow
//!
//! ```text
//! event name ─┬─ unknown ───────────────────────────→ ignored (unsupported_event)
//!             └─ EventKind → decode ─┬─ error ──────→ error (invalid_schema)
//!                                    └─ render ─┬─ None → ignored (no_message_generated)
//!                                               └─ send ─┬─ false → send_error
//!                                                        └─ true  → ok
//! ```
//!
//! Nothing here panics or returns `Err`; every outcome is a [`DispatchResult`].

use serde::Serialize;
use tracing::{error, info, warn};

use crate::delivery::Notifier;
use crate::github::EventKind;

pub const REASON_UNSUPPORTED_EVENT: &str = "unsupported_event";
pub const REASON_INVALID_SCHEMA: &str = "invalid_schema";
pub const REASON_NO_MESSAGE: &str = "no_message_generated";
pub const REASON_DELIVERY_FAILED: &str = "delivery_failed";

/// Terminal outcome of one webhook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DispatchStatus {
    Ok,
    Ignored,
    Error,
    SendError,
}

/// Structured response body returned to GitHub.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DispatchResult {
    pub status: DispatchStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl DispatchResult {
    fn new(status: DispatchStatus, event: &str, reason: Option<&'static str>) -> Self {
        Self {
            status,
            event: Some(event.to_string()).filter(|e| !e.is_empty()),
            reason,
            details: None,
        }
    }

    fn with_details(mut self, details: String) -> Self {
        self.details = Some(details);
        self
    }
}

/// Runs the event map against incoming webhooks.
#[derive(Clone)]
pub struct Dispatcher {
    notifier: Notifier,
}

impl Dispatcher {
    pub fn new(notifier: Notifier) -> Self {
        Self { notifier }
    }

    /// Process one already-authenticated webhook body.
    pub async fn dispatch(&self, event_type: &str, raw: &[u8]) -> DispatchResult {
        let Some(kind) = EventKind::from_name(event_type) else {
            info!(event = %event_type, "webhook_event_unsupported");
            return DispatchResult::new(
                DispatchStatus::Ignored,
                event_type,
                Some(REASON_UNSUPPORTED_EVENT),
            );
        };

        let payload = match kind.decode(raw) {
            Ok(payload) => payload,
            Err(e) => {
                error!(event = %kind, error = %e, "webhook_schema_invalid");
                return DispatchResult::new(
                    DispatchStatus::Error,
                    kind.as_str(),
                    Some(REASON_INVALID_SCHEMA),
                )
                .with_details(e.source.to_string());
            }
        };

        let Some(text) = payload.render() else {
            info!(event = %kind, "webhook_suppressed");
            return DispatchResult::new(DispatchStatus::Ignored, kind.as_str(), Some(REASON_NO_MESSAGE));
        };

        let category = kind.category();
        if !self.notifier.send(&text, category).await {
            warn!(event = %kind, category = %category, "webhook_delivery_failed");
            return DispatchResult::new(
                DispatchStatus::SendError,
                kind.as_str(),
                Some(REASON_DELIVERY_FAILED),
            );
        }

        info!(event = %kind, category = %category, "webhook_dispatched");
        DispatchResult::new(DispatchStatus::Ok, kind.as_str(), None)
    }
}
