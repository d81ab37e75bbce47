//! Bot abstraction for delivering text and video to a chat.
//!
//! [`Bot`] is transport-agnostic; `yosaver-bot` implements it over teloxide and tests substitute
//! recording mocks.

use crate::error::Result;
use crate::types::{Chat, Message};
use async_trait::async_trait;
use std::path::Path;

/// Outbound side of a chat transport. Implementations map to a concrete protocol (e.g. Telegram).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;
    /// Sends a reply to the given message (same chat).
    async fn reply_to(&self, message: &Message, text: &str) -> Result<()>;
    /// Uploads the local file at `path` as a streamable video with `caption`.
    /// The file must stay on disk until the returned future resolves.
    async fn send_video(&self, chat: &Chat, path: &Path, caption: &str) -> Result<()>;
}
