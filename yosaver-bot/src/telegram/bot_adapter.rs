//! Wraps teloxide::Bot and implements [`yosaver_core::Bot`]. Production code talks to Telegram;
//! tests substitute another Bot impl.

use async_trait::async_trait;
use std::path::Path;
use teloxide::{
    prelude::*,
    types::{ChatId, InputFile},
};
use yosaver_core::{Bot as CoreBot, Chat, CoreError, Message, Result};

/// Thin wrapper around teloxide::Bot that implements core's Bot trait.
#[derive(Clone)]
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .await
            .map_err(|e| CoreError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        self.send_message(&message.chat, text).await
    }

    async fn send_video(&self, chat: &Chat, path: &Path, caption: &str) -> Result<()> {
        self.bot
            .send_video(ChatId(chat.id), InputFile::file(path.to_path_buf()))
            .caption(caption.to_string())
            .supports_streaming(true)
            .await
            .map_err(|e| CoreError::Bot(e.to_string()))?;
        Ok(())
    }
}
