//! Telegram Bot API client.
//!
//! Only the `sendMessage` method is needed; the client posts JSON over a
//! shared HTTP connection pool. No retries: a submission report is not worth
//! hammering the Bot API for, and the caller treats delivery as best-effort.

use std::time::Duration;

use async_trait::async_trait;
use once_cell::sync::Lazy;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use crate::errors::ReportError;
use crate::report::reporter::MessageTransport;

static HTTP_CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .expect("Failed to create HTTP client")
});

const TELEGRAM_API_BASE: &str = "https://api.telegram.org";

#[derive(Debug, Deserialize)]
struct SendMessageResponse {
    ok: bool,
    description: Option<String>,
}

pub struct TelegramClient {
    bot_token: String,
    chat_id: String,
}

impl TelegramClient {
    #[must_use]
    pub fn new(bot_token: &str, chat_id: &str) -> Self {
        Self {
            bot_token: bot_token.to_string(),
            chat_id: chat_id.to_string(),
        }
    }

    fn send_message_url(&self) -> String {
        format!("{}/bot{}/sendMessage", TELEGRAM_API_BASE, self.bot_token)
    }
}

#[async_trait]
impl MessageTransport for TelegramClient {
    async fn send_message(&self, text: &str) -> Result<(), ReportError> {
        let response = HTTP_CLIENT
            .post(self.send_message_url())
            .json(&json!({ "chat_id": self.chat_id, "text": text }))
            .send()
            .await?;

        let status = response.status();
        let body: SendMessageResponse = response.json().await.map_err(|e| {
            ReportError::ApiError(format!("sendMessage returned {}: {}", status, e))
        })?;

        if !body.ok {
            return Err(ReportError::ApiError(
                body.description
                    .unwrap_or_else(|| format!("sendMessage returned {}", status)),
            ));
        }

        Ok(())
    }
}
