//! Report delivery to the Telegram Bot API.

use reqwest::Client;
use serde::Serialize;
use tracing::{error, info, instrument};

use crate::config::TelegramConfig;

#[derive(Debug, Clone, Serialize)]
struct SendMessage<'a> {
    chat_id: &'a str,
    text: &'a str,
}

/// Delivers one opaque text block to every configured chat.
///
/// Deliveries are independent: a dead destination is logged and skipped,
/// never letting one failure starve the remaining chats. There is no retry.
#[derive(Debug, Clone)]
pub struct Notifier {
    client: Client,
    token: String,
    chat_ids: Vec<String>,
    api_base: String,
}

impl Notifier {
    pub fn new(config: &TelegramConfig, token: String) -> Self {
        Self {
            client: Client::new(),
            token,
            chat_ids: config.chat_ids.clone(),
            api_base: config.api_base.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/bot{}/sendMessage", self.api_base, self.token)
    }

    /// Send `text` to every destination in order.
    ///
    /// Returns how many deliveries succeeded.
    #[instrument(skip_all)]
    pub async fn broadcast(&self, text: &str) -> usize {
        let url = self.endpoint();
        let mut delivered = 0;

        for chat_id in &self.chat_ids {
            if self.deliver(&url, chat_id, text).await {
                delivered += 1;
            }
        }

        delivered
    }

    async fn deliver(&self, url: &str, chat_id: &str, text: &str) -> bool {
        let payload = SendMessage { chat_id, text };

        match self.client.post(url).json(&payload).send().await {
            Ok(response) => {
                if response.status().is_success() {
                    info!("delivered message to chat {chat_id}");
                    return true;
                }

                error!(
                    "delivery to chat {chat_id} failed with status: {}",
                    response.status()
                );
                if let Ok(error_text) = response.text().await {
                    error!("Telegram API error response: {error_text}");
                }
                false
            }
            Err(e) => {
                error!("failed to deliver to chat {chat_id}: {e}");
                false
            }
        }
    }
}
