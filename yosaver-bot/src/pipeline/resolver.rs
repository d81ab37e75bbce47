//! Metadata lookup through the [`VideoProvider`], collapsing every failure into [`ResolveError`].

use tracing::{error, info};
use video_provider::{format_duration, VideoMetadata, VideoProvider};

use super::error::ResolveError;

/// Single attempt; the provider error is kept as the source for logging.
pub async fn resolve(provider: &dyn VideoProvider, url: &str) -> Result<VideoMetadata, ResolveError> {
    match provider.resolve(url).await {
        Ok(metadata) => {
            info!(
                url = %url,
                title = %metadata.title,
                author = %metadata.author,
                duration = %format_duration(metadata.duration_seconds),
                variants = metadata.variants.len(),
                "step: metadata resolved"
            );
            Ok(metadata)
        }
        Err(e) => {
            error!(url = %url, error = %e, "Failed to resolve video metadata");
            Err(ResolveError { source: e })
        }
    }
}
