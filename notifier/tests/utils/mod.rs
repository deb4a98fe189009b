use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use ghnotify::{
    web, AppState, Config, DeliveryError, Dispatcher, MessageTransport, Notifier, TopicIds,
};
use tokio::net::TcpListener;

pub const SECRET: &str = "test-webhook-secret";
pub const CHANNEL: i64 = -1009876543210;

#[derive(Debug, Clone, PartialEq)]
pub struct Sent {
    pub chat_id: i64,
    pub topic_id: Option<i64>,
    pub text: String,
}

/// Transport that keeps messages in memory instead of calling Telegram.
#[derive(Default)]
pub struct RecordingTransport {
    sent: Mutex<Vec<Sent>>,
}

impl RecordingTransport {
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
        Ok(())
    }
}

pub fn test_config(secret: Option<&str>) -> Config {
    Config {
        port: 0,
        github_webhook_secret: secret.map(str::to_string),
        bot_token: None,
        telegram_api_url: "http://127.0.0.1:9".to_string(),
        request_timeout_ms: 1000,
        notify_channel_id: Some(CHANNEL),
        topics: TopicIds {
            pull_requests: Some(11),
            pushes: Some(22),
            issues: Some(33),
            cicd: Some(44),
            releases: Some(55),
        },
    }
}

/// Start the router on an ephemeral port, returning its base URL and the transport it sends through.
pub async fn spawn_server(secret: Option<&str>) -> (String, Arc<RecordingTransport>) {
    let config = test_config(secret);
    let transport = Arc::new(RecordingTransport::default());
    let notifier = Notifier::new(
        transport.clone(),
        config.notify_channel_id,
        config.topics.clone(),
    );
    let app = web::router(AppState::new(config, Dispatcher::new(notifier)));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}"), transport)
}
