//! Telegram adapter (teloxide).
//!
//! Implements the `hwbot-core` MessagingPort over the Telegram Bot API. The
//! bot only ever sends plain text to one fixed chat, so the surface is a
//! single operation.

use async_trait::async_trait;
use teloxide::{prelude::*, RequestError};
use tracing::{debug, error};

use hwbot_core::{domain::ChatId, errors::Error, ports::MessagingPort, Result};

#[derive(Clone)]
pub struct TelegramMessenger {
    bot: Bot,
}

impl TelegramMessenger {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            bot: Bot::new(token.into()),
        }
    }

    fn tg_chat(chat_id: ChatId) -> teloxide::types::ChatId {
        teloxide::types::ChatId(chat_id.0)
    }

    fn map_err(e: RequestError) -> Error {
        // Log the transport error with its full cause before collapsing it
        // into the generic delivery failure.
        error!(error = %e, "telegram send failed");
        Error::DeliveryFailed(e.to_string())
    }
}

#[async_trait]
impl MessagingPort for TelegramMessenger {
    async fn send_text(&self, chat_id: ChatId, text: &str) -> Result<()> {
        debug!("sending message to telegram");
        self.bot
            .send_message(Self::tg_chat(chat_id), text.to_string())
            .await
            .map_err(Self::map_err)?;
        debug!("message delivered to telegram");
        Ok(())
    }
}
