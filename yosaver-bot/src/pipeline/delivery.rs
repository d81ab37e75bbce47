//! Fetch-and-deliver: download one variant into a per-request temp directory, send it as a video,
//! then remove the directory whatever happened.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tempfile::TempDir;
use tracing::{error, info, instrument, warn};
use uuid::Uuid;
use video_provider::{StreamVariant, VideoProvider};
use yosaver_core::{Bot, Chat};

use super::error::DeliveryError;
use super::size_guard;

/// Telegram caption limit, in characters.
const CAPTION_MAX_CHARS: usize = 1024;

/// Temp directory holding one request's download. Removed by [`DownloadArtifact::release`], or on
/// drop if release is never reached.
pub struct DownloadArtifact {
    dir: TempDir,
    path: PathBuf,
}

impl DownloadArtifact {
    /// Creates `video_<id>_<request>_XXXXXX/` under `root`. The request id keeps concurrent
    /// downloads of the same variant apart.
    pub fn acquire(root: &Path, variant: &StreamVariant, request_id: Uuid) -> io::Result<Self> {
        let id = sanitize(&variant.id);
        let dir = tempfile::Builder::new()
            .prefix(&format!("video_{}_{}_", id, request_id.simple()))
            .tempdir_in(root)?;
        let path = dir
            .path()
            .join(format!("video_{}.{}", id, sanitize(&variant.extension)));
        Ok(Self { dir, path })
    }

    /// Where the downloader writes the file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Deletes the directory and everything in it. Failures are logged, not returned.
    pub fn release(self) {
        let dir = self.dir.path().to_path_buf();
        match self.dir.close() {
            Ok(()) => info!(dir = %dir.display(), "step: temp storage removed"),
            Err(e) => warn!(dir = %dir.display(), error = %e, "Failed to remove temp storage"),
        }
    }
}

/// Keeps ASCII alphanumerics, `-` and `_`; anything else becomes `_`.
fn sanitize(part: &str) -> String {
    part.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// `🎬 <title>\n<tag>`, shortening the title so the caption fits Telegram's limit.
pub fn build_caption(title: &str, tag: &str) -> String {
    let fixed = "🎬 \n".chars().count() + tag.chars().count();
    let room = CAPTION_MAX_CHARS.saturating_sub(fixed);
    let title: String = if title.chars().count() > room {
        let mut short: String = title.chars().take(room.saturating_sub(1)).collect();
        short.push('…');
        short
    } else {
        title.to_string()
    };
    format!("🎬 {}\n{}", title, tag)
}

/// Downloads a selected variant and sends it to a chat.
pub struct FetchAndDeliver {
    provider: Arc<dyn VideoProvider>,
    bot: Arc<dyn Bot>,
    download_dir: PathBuf,
    caption_tag: String,
    max_file_size: u64,
}

impl FetchAndDeliver {
    pub fn new(
        provider: Arc<dyn VideoProvider>,
        bot: Arc<dyn Bot>,
        download_dir: PathBuf,
        caption_tag: String,
        max_file_size: u64,
    ) -> Self {
        Self {
            provider,
            bot,
            download_dir,
            caption_tag,
            max_file_size,
        }
    }

    /// Fetches `variant` of `url` and sends it to `chat` with a caption built from `title`.
    /// Returns the caption that was sent. The temp directory is gone when this returns.
    #[instrument(skip(self, title, variant, chat), fields(format_id = %variant.id, chat_id = chat.id))]
    pub async fn run(
        &self,
        url: &str,
        title: &str,
        variant: &StreamVariant,
        chat: &Chat,
    ) -> Result<String, DeliveryError> {
        let request_id = Uuid::new_v4();
        let artifact = DownloadArtifact::acquire(&self.download_dir, variant, request_id)
            .map_err(|e| {
                error!(error = %e, dir = %self.download_dir.display(), "Failed to create temp storage");
                DeliveryError::Storage(e)
            })?;
        info!(
            request_id = %request_id,
            path = %artifact.path().display(),
            "step: temp storage acquired"
        );

        let outcome = self
            .fetch_and_send(url, title, variant, chat, artifact.path())
            .await;
        artifact.release();
        outcome
    }

    async fn fetch_and_send(
        &self,
        url: &str,
        title: &str,
        variant: &StreamVariant,
        chat: &Chat,
        path: &Path,
    ) -> Result<String, DeliveryError> {
        self.provider
            .fetch(url, variant, path)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to fetch video stream");
                DeliveryError::FetchFailed(e)
            })?;
        // Reported sizes can be missing; the file on disk is authoritative.
        let written = tokio::fs::metadata(path)
            .await
            .map_err(DeliveryError::Storage)?
            .len();
        size_guard::check_bytes(written, self.max_file_size).map_err(|e| {
            warn!(bytes = written, max_file_size = self.max_file_size, "Fetched file too large");
            DeliveryError::Oversized(e)
        })?;
        info!(path = %path.display(), bytes = written, "step: stream fetched");

        let caption = build_caption(title, &self.caption_tag);
        self.bot
            .send_video(chat, path, &caption)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to send video");
                DeliveryError::SendFailed(e)
            })?;
        info!("step: video delivered");

        Ok(caption)
    }
}
