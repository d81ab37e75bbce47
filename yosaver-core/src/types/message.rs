//! Inbound message type for the core model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{chat::Chat, user::User};

/// A single inbound message. Created per update and discarded once the chain has handled it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub user: User,
    pub chat: Chat,
    /// Message text; empty for non-text messages (stickers, media without caption).
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Text with surrounding whitespace removed.
    pub fn text(&self) -> &str {
        self.content.trim()
    }
}
