//! Best-effort delivery of a graded result to the configured Telegram chat.
//!
//! Delivery never fails the surrounding request: missing credentials or a
//! transport error surface only as a `false` delivery flag.

use async_trait::async_trait;
use tracing::{info, warn};

use super::formatter;
use crate::clients::telegram_client::TelegramClient;
use crate::core::config::AppConfig;
use crate::core::models::QuizResult;
use crate::errors::ReportError;

/// Seam over the outbound chat channel so tests can substitute a recording
/// or failing transport for the real Telegram client.
#[async_trait]
pub trait MessageTransport {
    async fn send_message(&self, text: &str) -> Result<(), ReportError>;
}

/// Sends the rendered message sequence over `transport`, in order.
///
/// Sends are sequential and not transactional: on the first error the
/// remaining messages are abandoned and `false` is returned. Messages
/// already sent are not recalled.
pub async fn deliver_report<T: MessageTransport + Sync>(
    transport: &T,
    result: &QuizResult,
) -> bool {
    let messages = formatter::build_messages(result);
    let total = messages.len();

    for (i, message) in messages.iter().enumerate() {
        if let Err(e) = transport.send_message(message).await {
            warn!("Telegram delivery failed on message {}/{}: {}", i + 1, total, e);
            return false;
        }
    }

    info!("Report delivered to Telegram in {} messages", total);
    true
}

/// Entry point used by the handler: resolves credentials from config and
/// delivers through the real Telegram client.
pub async fn send_report(config: &AppConfig, result: &QuizResult) -> bool {
    let Some((bot_token, chat_id)) = config.telegram_credentials() else {
        info!("Telegram credentials not configured, skipping notification");
        return false;
    };

    let client = TelegramClient::new(bot_token, chat_id);
    deliver_report(&client, result).await
}
