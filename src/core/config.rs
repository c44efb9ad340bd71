use std::env;

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub telegram_bot_token: Option<String>,
    pub telegram_chat_id: Option<String>,
}

impl AppConfig {
    /// Reads configuration from the environment. Missing credentials are not
    /// an error: they disable Telegram delivery for the invocation.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            telegram_bot_token: env::var("TELEGRAM_BOT_TOKEN").ok(),
            telegram_chat_id: env::var("TELEGRAM_CHAT_ID").ok(),
        }
    }

    /// Returns `(bot_token, chat_id)` when both are present and non-empty.
    #[must_use]
    pub fn telegram_credentials(&self) -> Option<(&str, &str)> {
        match (
            self.telegram_bot_token.as_deref(),
            self.telegram_chat_id.as_deref(),
        ) {
            (Some(token), Some(chat_id)) if !token.is_empty() && !chat_id.is_empty() => {
                Some((token, chat_id))
            }
            _ => None,
        }
    }
}
