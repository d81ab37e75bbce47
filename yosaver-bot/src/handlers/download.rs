//! Download handler: treats any non-command text as a candidate link and runs the pipeline.
//!
//! **External interactions:** Bot (status and error texts, video upload via the pipeline),
//! VideoProvider (through [`DownloadPipeline`]).

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info, warn};
use yosaver_core::{Bot, Handler, HandlerError, HandlerResponse, Message, Result};

use crate::pipeline::DownloadPipeline;

pub const MSG_DOWNLOADING: &str = "⏳ Downloading video... this may take a couple of minutes.";

/// Terminal handler of the chain. Every non-empty text ends in exactly one outcome: a video with
/// caption, or one error text.
pub struct DownloadHandler {
    bot: Arc<dyn Bot>,
    pipeline: Arc<DownloadPipeline>,
}

impl DownloadHandler {
    pub fn new(bot: Arc<dyn Bot>, pipeline: Arc<DownloadPipeline>) -> Self {
        Self { bot, pipeline }
    }
}

#[async_trait]
impl Handler for DownloadHandler {
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let text = message.text();
        if text.is_empty() {
            return Ok(HandlerResponse::Ignore);
        }

        let outcome = match DownloadPipeline::validate(text) {
            Ok(url) => {
                self.bot.reply_to(message, MSG_DOWNLOADING).await?;
                self.pipeline.download(url, &message.chat).await
            }
            Err(e) => Err(e),
        };

        match outcome {
            Ok(caption) => {
                info!(user_id = message.user.id, chat_id = message.chat.id, "Download delivered");
                Ok(HandlerResponse::Reply(caption))
            }
            Err(e) => {
                warn!(
                    user_id = message.user.id,
                    chat_id = message.chat.id,
                    kind = e.kind(),
                    error = %e,
                    "Download request rejected"
                );
                let reply = e.user_message();
                if let Err(send_err) = self.bot.reply_to(message, &reply).await {
                    error!(chat_id = message.chat.id, error = %send_err, "Failed to send error reply");
                    return Err(HandlerError::ReplyFailed(send_err.to_string()).into());
                }
                Ok(HandlerResponse::Reply(reply))
            }
        }
    }
}
