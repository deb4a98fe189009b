//! Telegram Bot API transport.
//!
//! Reference: https://core.telegram.org/bots/api#sendmessage

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::MessageTransport;
use crate::error::DeliveryError;

/// `sendMessage` request body.
#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    chat_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    message_thread_id: Option<i64>,
    text: &'a str,
    parse_mode: &'static str,
    disable_web_page_preview: bool,
}

/// Envelope every Bot API response is wrapped in.
#[derive(Debug, Deserialize)]
struct ApiResponse {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

/// Posts HTML messages through a Telegram bot.
#[derive(Clone)]
pub struct TelegramTransport {
    client: Client,
    send_message_url: String,
}

impl TelegramTransport {
    /// Create a transport for `bot_token` against the given Bot API base URL.
    pub fn new(api_url: &str, bot_token: &str, timeout: Duration) -> Result<Self, DeliveryError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(format!("github-notifier/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self::with_client(client, api_url, bot_token))
    }

    /// Create a transport reusing an existing HTTP client.
    pub fn with_client(client: Client, api_url: &str, bot_token: &str) -> Self {
        Self {
            client,
            send_message_url: format!(
                "{}/bot{}/sendMessage",
                api_url.trim_end_matches('/'),
                bot_token
            ),
        }
    }
}

#[async_trait]
impl MessageTransport for TelegramTransport {
    async fn send_message(
        &self,
        chat_id: i64,
        topic_id: Option<i64>,
        text: &str,
    ) -> Result<(), DeliveryError> {
        let request = SendMessageRequest {
            chat_id,
            message_thread_id: topic_id,
            text,
            parse_mode: "HTML",
            disable_web_page_preview: true,
        };

        let response = self
            .client
            .post(&self.send_message_url)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body: Option<ApiResponse> = response.json().await.ok();

        debug!(
            status = status.as_u16(),
            chat_id = chat_id,
            topic_id = ?topic_id,
            "telegram_send_message_response"
        );

        match body {
            Some(ApiResponse { ok: true, .. }) if status.is_success() => Ok(()),
            other => Err(DeliveryError::Rejected {
                status: status.as_u16(),
                description: other
                    .and_then(|b| b.description)
                    .unwrap_or_else(|| "no description".to_string()),
            }),
        }
    }
}
