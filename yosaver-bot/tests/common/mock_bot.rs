//! In-memory [`Bot`] that records every outbound text and video.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use yosaver_bot::{Bot, Chat, CoreError, Message, Result};

#[derive(Debug, Clone)]
pub struct SentVideo {
    pub chat_id: i64,
    pub path: PathBuf,
    pub caption: String,
    /// Whether the file existed when send_video was called.
    pub file_existed: bool,
    pub bytes: Vec<u8>,
}

#[derive(Default)]
pub struct MockBot {
    texts: Mutex<Vec<(i64, String)>>,
    videos: Mutex<Vec<SentVideo>>,
    fail_video: AtomicBool,
    fail_text: AtomicBool,
}

impl MockBot {
    pub fn new() -> Self {
        Self::default()
    }

    /// send_video returns an error from now on.
    pub fn failing_video() -> Self {
        let bot = Self::default();
        bot.fail_video.store(true, Ordering::SeqCst);
        bot
    }

    /// send_message / reply_to return an error from now on.
    pub fn failing_text() -> Self {
        let bot = Self::default();
        bot.fail_text.store(true, Ordering::SeqCst);
        bot
    }

    pub fn texts(&self) -> Vec<String> {
        self.texts.lock().unwrap().iter().map(|(_, t)| t.clone()).collect()
    }

    pub fn videos(&self) -> Vec<SentVideo> {
        self.videos.lock().unwrap().clone()
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        if self.fail_text.load(Ordering::SeqCst) {
            return Err(CoreError::Bot("sendMessage rejected".to_string()));
        }
        self.texts.lock().unwrap().push((chat.id, text.to_string()));
        Ok(())
    }

    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        self.send_message(&message.chat, text).await
    }

    async fn send_video(&self, chat: &Chat, path: &Path, caption: &str) -> Result<()> {
        let bytes = std::fs::read(path).ok();
        self.videos.lock().unwrap().push(SentVideo {
            chat_id: chat.id,
            path: path.to_path_buf(),
            caption: caption.to_string(),
            file_existed: bytes.is_some(),
            bytes: bytes.unwrap_or_default(),
        });
        if self.fail_video.load(Ordering::SeqCst) {
            return Err(CoreError::Bot("Request Entity Too Large".to_string()));
        }
        Ok(())
    }
}
