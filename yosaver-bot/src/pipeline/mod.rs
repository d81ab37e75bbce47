//! Download-and-deliver pipeline: validate → resolve → select → size check → fetch and send.
//!
//! Steps within one request are strictly sequential. Nothing is shared between requests except the
//! read-only [`PipelineSettings`].

pub mod delivery;
pub mod error;
pub mod link;
pub mod resolver;
pub mod selector;
pub mod size_guard;

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{info, warn};
use video_provider::VideoProvider;
use yosaver_core::{Bot, Chat};

use crate::config::{DEFAULT_CAPTION_TAG, DEFAULT_MAX_FILE_SIZE};

pub use delivery::{build_caption, DownloadArtifact, FetchAndDeliver};
pub use error::{DeliveryError, PipelineError, ResolveError, SelectionError, SizeError};

/// Read-only settings for the pipeline, derived from [`crate::config::BotConfig`].
#[derive(Debug, Clone)]
pub struct PipelineSettings {
    /// Largest accepted variant, in bytes.
    pub max_file_size: u64,
    /// Parent of the per-request temp directories.
    pub download_dir: PathBuf,
    /// Second caption line.
    pub caption_tag: String,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            download_dir: std::env::temp_dir(),
            caption_tag: DEFAULT_CAPTION_TAG.to_string(),
        }
    }
}

/// The per-request pipeline. Cheap to share behind an `Arc`; holds no per-request state.
pub struct DownloadPipeline {
    provider: Arc<dyn VideoProvider>,
    delivery: FetchAndDeliver,
    max_file_size: u64,
}

impl DownloadPipeline {
    pub fn new(provider: Arc<dyn VideoProvider>, bot: Arc<dyn Bot>, settings: PipelineSettings) -> Self {
        let delivery = FetchAndDeliver::new(
            provider.clone(),
            bot,
            settings.download_dir,
            settings.caption_tag,
            settings.max_file_size,
        );
        Self {
            provider,
            delivery,
            max_file_size: settings.max_file_size,
        }
    }

    /// Accepts `text` as a link or fails with [`PipelineError::InvalidUrl`]. No network access.
    pub fn validate(text: &str) -> Result<&str, PipelineError> {
        if link::is_valid(text) {
            Ok(text)
        } else {
            Err(PipelineError::InvalidUrl)
        }
    }

    /// Resolves, selects, checks and delivers the video at `url` to `chat`.
    /// Returns the caption of the sent video.
    pub async fn download(&self, url: &str, chat: &Chat) -> Result<String, PipelineError> {
        let metadata = resolver::resolve(self.provider.as_ref(), url).await?;

        let variant = selector::select(&metadata.variants).map_err(|e| {
            warn!(url = %url, variants = metadata.variants.len(), "No progressive stream");
            e
        })?;
        info!(
            format_id = %variant.id,
            resolution = variant.resolution,
            size_bytes = variant.size_bytes,
            "step: stream selected"
        );

        size_guard::check(&variant, self.max_file_size).map_err(|e| {
            warn!(size_bytes = variant.size_bytes, max_file_size = self.max_file_size, "Stream too large");
            e
        })?;

        let caption = self
            .delivery
            .run(url, &metadata.title, &variant, chat)
            .await?;
        Ok(caption)
    }
}
