use async_trait::async_trait;
use reqwest::Client;
use tracing::{info, warn};

/// Outbound free-text feedback submission.
///
/// Fire-and-forget: transport failure is logged and dropped, never surfaced
/// to the user and never retried.
#[async_trait]
pub trait FeedbackSender: Send + Sync {
    async fn send(&self, text: &str);
}

/// Posts the feedback body as JSON to a configured endpoint.
pub struct HttpFeedbackSender {
    client: Client,
    endpoint: String,
}

impl HttpFeedbackSender {
    pub fn new(client: Client, endpoint: String) -> Self {
        Self { client, endpoint }
    }
}

#[async_trait]
impl FeedbackSender for HttpFeedbackSender {
    async fn send(&self, text: &str) {
        let payload = serde_json::json!({ "feedback": text });
        match self.client.post(&self.endpoint).json(&payload).send().await {
            Ok(res) if res.status().is_success() => {
                info!("feedback submitted ({} bytes)", text.len());
            }
            Ok(res) => {
                warn!("feedback endpoint returned {}; dropping submission", res.status());
            }
            Err(e) => {
                warn!("feedback submission failed: {}; dropping", e);
            }
        }
    }
}

/// Sender used when no endpoint is configured: logs the body and drops it.
pub struct LogFeedbackSender;

#[async_trait]
impl FeedbackSender for LogFeedbackSender {
    async fn send(&self, text: &str) {
        info!("feedback (no endpoint configured): {}", text);
    }
}
