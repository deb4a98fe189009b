//! Error types shared across the pipeline.

use thiserror::Error;

/// A webhook body that does not match the schema bound to its event type.
#[derive(Debug, Error)]
#[error("invalid {event} payload: {source}")]
pub struct SchemaError {
    pub event: &'static str,
    #[source]
    pub source: serde_json::Error,
}

/// Failure to hand a message to the outbound transport.
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// Holds the error without its URL, which embeds the bot token.
    #[error("HTTP request failed: {0}")]
    Request(reqwest::Error),

    #[error("Telegram API rejected message: status={status}, description={description}")]
    Rejected { status: u16, description: String },
}

impl From<reqwest::Error> for DeliveryError {
    fn from(err: reqwest::Error) -> Self {
        DeliveryError::Request(err.without_url())
    }
}
