//! The [`VideoProvider`] capability.

use crate::error::ProviderError;
use crate::types::{StreamVariant, VideoMetadata};
use async_trait::async_trait;
use std::path::Path;

/// Resolves metadata for a video URL and fetches a chosen variant.
///
/// One attempt per call; implementations do not retry.
#[async_trait]
pub trait VideoProvider: Send + Sync {
    /// Returns title, author, duration and the available variants in extractor order.
    async fn resolve(&self, url: &str) -> Result<VideoMetadata, ProviderError>;

    /// Writes the bytes of `variant` to `dest`. `dest`'s parent directory must exist.
    async fn fetch(
        &self,
        url: &str,
        variant: &StreamVariant,
        dest: &Path,
    ) -> Result<(), ProviderError>;
}
