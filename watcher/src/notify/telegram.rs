use super::Notifier;
use async_trait::async_trait;
use metrics::counter;
use reqwest::Client;
use serde_json::json;
use tracing::{error, info};
use watcher_core::config::BotConfig;
use watcher_core::{Error, Result};

/// Sends plain-text messages to a fixed chat through the Telegram Bot API.
pub struct TelegramNotifier {
    client: Client,
    api_base: String,
    token: String,
    chat_id: String,
}

impl TelegramNotifier {
    pub fn new(config: &BotConfig) -> Self {
        Self {
            client: Client::new(),
            api_base: config.api_base.clone(),
            token: config.token.clone(),
            chat_id: config.chat_id.clone(),
        }
    }

    async fn post_message(&self, text: &str) -> Result<()> {
        let url = format!("{}/bot{}/sendMessage", self.api_base, self.token);
        let body = json!({ "chat_id": self.chat_id, "text": text });

        let response = self.client.post(&url).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::UnexpectedStatusCode {
                code: status.as_u16(),
                url: format!("{}/bot<token>/sendMessage", self.api_base),
            });
        }

        Ok(())
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn notify(&self, text: &str) {
        match self.post_message(text).await {
            Ok(()) => {
                counter!("watcher_notifications_sent").increment(1);
                info!(chat_id = %self.chat_id, "Bot sent message: {text}");
            }
            Err(e) => {
                counter!("watcher_notifications_failed").increment(1);
                error!(error = %e, "Failed to deliver notification");
            }
        }
    }
}
