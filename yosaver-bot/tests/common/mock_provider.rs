//! Scripted [`VideoProvider`]: fixed metadata (or failure), fetch writes fixed bytes (or fails).

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use video_provider::{ProviderError, StreamVariant, VideoMetadata, VideoProvider};

pub const FETCHED_BYTES: &[u8] = b"fake mp4 payload";

pub struct MockProvider {
    metadata: Option<VideoMetadata>,
    fail_fetch: bool,
    resolve_calls: AtomicUsize,
    fetch_calls: AtomicUsize,
    fetched: Mutex<Vec<(String, PathBuf)>>,
}

impl MockProvider {
    /// resolve returns `metadata`; fetch writes [`FETCHED_BYTES`] to the destination.
    pub fn new(metadata: VideoMetadata) -> Self {
        Self {
            metadata: Some(metadata),
            fail_fetch: false,
            resolve_calls: AtomicUsize::new(0),
            fetch_calls: AtomicUsize::new(0),
            fetched: Mutex::new(Vec::new()),
        }
    }

    /// resolve fails with an execution error.
    pub fn failing_resolve() -> Self {
        Self {
            metadata: None,
            ..Self::new(super::metadata("unused", Vec::new()))
        }
    }

    /// fetch writes a partial file, then fails.
    pub fn failing_fetch(metadata: VideoMetadata) -> Self {
        Self {
            fail_fetch: true,
            ..Self::new(metadata)
        }
    }

    pub fn resolve_calls(&self) -> usize {
        self.resolve_calls.load(Ordering::SeqCst)
    }

    pub fn fetch_calls(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }

    /// (format id, destination) of every fetch.
    pub fn fetched(&self) -> Vec<(String, PathBuf)> {
        self.fetched.lock().unwrap().clone()
    }
}

#[async_trait]
impl VideoProvider for MockProvider {
    async fn resolve(&self, _url: &str) -> Result<VideoMetadata, ProviderError> {
        self.resolve_calls.fetch_add(1, Ordering::SeqCst);
        self.metadata.clone().ok_or_else(|| ProviderError::Execution {
            status: "exit status: 1".to_string(),
            stderr: "ERROR: Video unavailable".to_string(),
        })
    }

    async fn fetch(
        &self,
        _url: &str,
        variant: &StreamVariant,
        dest: &Path,
    ) -> Result<(), ProviderError> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        self.fetched
            .lock()
            .unwrap()
            .push((variant.id.clone(), dest.to_path_buf()));
        if self.fail_fetch {
            tokio::fs::write(dest, b"partial").await?;
            return Err(ProviderError::Timeout(600));
        }
        tokio::fs::write(dest, FETCHED_BYTES).await?;
        Ok(())
    }
}
