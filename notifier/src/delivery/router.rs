//! Category → topic routing and best-effort delivery.

use std::fmt;
use std::sync::Arc;

use tracing::{error, info, warn};

use super::MessageTransport;
use crate::config::TopicIds;

/// Notification categories, each mapped to one forum topic of the channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    PullRequests,
    Pushes,
    Issues,
    CiCd,
    Releases,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::PullRequests => "pull_requests",
            Category::Pushes => "pushes",
            Category::Issues => "issues",
            Category::CiCd => "cicd",
            Category::Releases => "releases",
        }
    }

    /// Topic configured for this category, if any.
    pub fn topic(&self, topics: &TopicIds) -> Option<i64> {
        match self {
            Category::PullRequests => topics.pull_requests,
            Category::Pushes => topics.pushes,
            Category::Issues => topics.issues,
            Category::CiCd => topics.cicd,
            Category::Releases => topics.releases,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Routes rendered messages to the configured channel and topic.
#[derive(Clone)]
pub struct Notifier {
    transport: Arc<dyn MessageTransport>,
    channel_id: Option<i64>,
    topics: TopicIds,
}

impl Notifier {
    pub fn new(
        transport: Arc<dyn MessageTransport>,
        channel_id: Option<i64>,
        topics: TopicIds,
    ) -> Self {
        Self {
            transport,
            channel_id,
            topics,
        }
    }

    /// Deliver `text` to the topic for `category`.
    ///
    /// Single attempt. Returns `false` when no channel is configured or the
    /// transport fails; errors never escape.
    pub async fn send(&self, text: &str, category: Category) -> bool {
        let Some(channel_id) = self.channel_id else {
            warn!(category = %category, "notify_channel_not_configured");
            return false;
        };

        let topic_id = category.topic(&self.topics);

        match self.transport.send_message(channel_id, topic_id, text).await {
            Ok(()) => {
                info!(
                    category = %category,
                    channel_id = channel_id,
                    topic_id = ?topic_id,
                    "notification_sent"
                );
                true
            }
            Err(e) => {
                error!(
                    category = %category,
                    channel_id = channel_id,
                    topic_id = ?topic_id,
                    error = %e,
                    "notification_send_failed"
                );
                false
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::delivery::MessageTransport;
    use crate::error::DeliveryError;

    /// A message captured by [`RecordingTransport`].
    #[derive(Debug, Clone, PartialEq)]
    pub struct Sent {
        pub chat_id: i64,
        pub topic_id: Option<i64>,
        pub text: String,
    }

    /// In-memory transport that records messages and can be told to fail.
    #[derive(Default)]
    pub struct RecordingTransport {
        pub sent: Mutex<Vec<Sent>>,
        pub fail: bool,
    }

    impl RecordingTransport {
        pub fn failing() -> Self {
            Self {
                fail: true,
                ..Self::default()
            }
        }

        pub fn sent(&self) -> Vec<Sent> {
            self.sent.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl MessageTransport for RecordingTransport {
        async fn send_message(
            &self,
            chat_id: i64,
            topic_id: Option<i64>,
            text: &str,
        ) -> Result<(), DeliveryError> {
            self.sent.lock().unwrap().push(Sent {
                chat_id,
                topic_id,
                text: text.to_string(),
            });

            if self.fail {
                return Err(DeliveryError::Rejected {
                    status: 400,
                    description: "Bad Request: chat not found".to_string(),
                });
            }
            Ok(())
        }
    }
}
