//! `/start` command: fixed welcome text.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;
use yosaver_core::{Bot, Handler, HandlerResponse, Message, Result};

pub const WELCOME_TEXT: &str = "🎵 YoSaver Bot 🎵

Hi! I'll help you download YouTube videos quickly and easily!

Send me a link to a YouTube video and I'll download it for you.";

/// Replies to `/start` (also `/start@botname` and `/start <payload>`) and ends the chain.
pub struct StartHandler {
    bot: Arc<dyn Bot>,
}

impl StartHandler {
    pub fn new(bot: Arc<dyn Bot>) -> Self {
        Self { bot }
    }

    /// True when the first word is the `/start` command, with or without a bot mention.
    pub fn is_start_command(text: &str) -> bool {
        text.split_whitespace()
            .next()
            .map(|cmd| cmd.split('@').next() == Some("/start"))
            .unwrap_or(false)
    }
}

#[async_trait]
impl Handler for StartHandler {
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if !Self::is_start_command(message.text()) {
            return Ok(HandlerResponse::Continue);
        }

        self.bot.reply_to(message, WELCOME_TEXT).await?;
        info!(user_id = message.user.id, chat_id = message.chat.id, "Sent welcome text");
        Ok(HandlerResponse::Reply(WELCOME_TEXT.to_string()))
    }
}
