//! Configuration module for environment variable parsing.
//!
//! Everything is read once at startup into an immutable [`Config`] that is
//! shared read-only between request handlers.

use std::env;
use tracing::warn;

/// Default Telegram Bot API endpoint.
pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";

/// Forum topic ids inside the notification channel, one per event category.
///
/// `None` means "post to the channel's general area".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopicIds {
    pub pull_requests: Option<i64>,
    pub pushes: Option<i64>,
    pub issues: Option<i64>,
    pub cicd: Option<i64>,
    pub releases: Option<i64>,
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the web server to listen on
    pub port: u16,

    /// Shared secret for `X-Hub-Signature-256` verification
    pub github_webhook_secret: Option<String>,

    /// Telegram bot token
    pub bot_token: Option<String>,

    /// Base URL of the Telegram Bot API
    pub telegram_api_url: String,

    /// HTTP request timeout in milliseconds for outbound delivery
    pub request_timeout_ms: u64,

    /// Channel (chat) id that receives notifications
    pub notify_channel_id: Option<i64>,

    /// Per-category topic ids
    pub topics: TopicIds,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Config {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),

            github_webhook_secret: parse_string("GITHUB_WEBHOOK_SECRET"),

            bot_token: parse_string("BOT_TOKEN"),

            telegram_api_url: parse_string("TELEGRAM_API_URL")
                .unwrap_or_else(|| DEFAULT_TELEGRAM_API_URL.to_string()),

            request_timeout_ms: env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10_000),

            notify_channel_id: parse_id("NOTIFY_CHANNEL_ID"),

            topics: TopicIds {
                pull_requests: parse_id("PR_TOPIC_ID"),
                pushes: parse_id("PUSH_TOPIC_ID"),
                issues: parse_id("ISSUES_TOPIC_ID"),
                cicd: parse_id("CICD_TOPIC_ID"),
                releases: parse_id("RELEASES_TOPIC_ID"),
            },
        }
    }
}

/// Read a non-blank string variable.
fn parse_string(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parse a numeric Telegram chat/topic id. Unparseable values are treated as unset.
fn parse_id(name: &str) -> Option<i64> {
    let raw = parse_string(name)?;

    match raw.parse::<i64>() {
        Ok(id) => Some(id),
        Err(_) => {
            warn!(env_var = name, value = %raw, "Invalid numeric id, ignoring");
            None
        }
    }
}
