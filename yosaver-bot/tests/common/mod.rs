//! Shared test doubles for the yosaver-bot integration tests.

#![allow(dead_code)]

pub mod mock_bot;
pub mod mock_provider;

use chrono::Utc;
use video_provider::{StreamVariant, VideoMetadata};
use yosaver_bot::{Chat, Message, User};

pub use mock_bot::MockBot;
pub use mock_provider::MockProvider;

pub const VALID_URL: &str = "https://www.youtube.com/watch?v=dQw4w9WgXcQ";

pub fn create_test_message(content: &str) -> Message {
    Message {
        id: "test_message_id".to_string(),
        content: content.to_string(),
        user: User {
            id: 123,
            username: Some("test_user".to_string()),
            first_name: Some("Test".to_string()),
            last_name: None,
        },
        chat: Chat {
            id: 456,
            chat_type: "private".to_string(),
        },
        created_at: Utc::now(),
    }
}

pub fn variant(id: &str, progressive: bool, resolution: u32, size_bytes: u64) -> StreamVariant {
    StreamVariant {
        id: id.to_string(),
        is_progressive: progressive,
        resolution,
        size_bytes,
        extension: "mp4".to_string(),
    }
}

pub fn metadata(title: &str, variants: Vec<StreamVariant>) -> VideoMetadata {
    VideoMetadata {
        title: title.to_string(),
        author: "Test Channel".to_string(),
        duration_seconds: 95,
        variants,
    }
}
