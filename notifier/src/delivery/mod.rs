//! Outbound delivery of rendered notifications.
//!
//! ```text
//! text + Category → Notifier (channel, topic lookup) → MessageTransport → Telegram
//! ```

pub mod router;
pub mod telegram;

use async_trait::async_trait;

use crate::error::DeliveryError;

pub use router::{Category, Notifier};
pub use telegram::TelegramTransport;

/// A messaging backend able to post text into a channel, optionally inside a topic.
#[async_trait]
pub trait MessageTransport: Send + Sync {
    async fn send_message(
        &self,
        chat_id: i64,
        topic_id: Option<i64>,
        text: &str,
    ) -> Result<(), DeliveryError>;
}
