//! Logs each inbound message before handling and the final response after it.

use async_trait::async_trait;
use tracing::info;
use yosaver_core::{Handler, HandlerResponse, Message, Result};

#[derive(Clone, Default)]
pub struct LoggingHandler;

impl LoggingHandler {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Handler for LoggingHandler {
    async fn before(&self, message: &Message) -> Result<bool> {
        info!(
            user_id = message.user.id,
            username = ?message.user.username,
            chat_id = message.chat.id,
            chat_type = %message.chat.chat_type,
            message_id = %message.id,
            message_content = %message.content,
            "Received message"
        );
        Ok(true)
    }

    async fn after(&self, message: &Message, response: &HandlerResponse) -> Result<()> {
        let reply_len = match response {
            HandlerResponse::Reply(text) => Some(text.len()),
            _ => None,
        };
        info!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            response_type = %response.kind(),
            reply_len = ?reply_len,
            "Message handled"
        );
        Ok(())
    }
}
