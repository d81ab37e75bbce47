//! yt-dlp backend: `--dump-json` for metadata, `-f <format_id> -o <dest>` for fetching.
//!
//! Each call spawns one `yt-dlp` process bounded by a timeout; the child is killed when the
//! timeout fires.

use crate::error::ProviderError;
use crate::provider::VideoProvider;
use crate::types::{StreamVariant, VideoMetadata};
use async_trait::async_trait;
use serde::Deserialize;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tracing::{debug, info, instrument, warn};

/// Lines of stderr kept in [`ProviderError::Execution`].
const STDERR_TAIL_LINES: usize = 5;

/// Settings for [`YtDlpProvider`].
#[derive(Debug, Clone)]
pub struct YtDlpConfig {
    /// Path or name of the yt-dlp binary.
    pub binary: String,
    /// Upper bound for one metadata lookup.
    pub resolve_timeout: Duration,
    /// Upper bound for one stream download.
    pub fetch_timeout: Duration,
    /// Passed as `--max-filesize`; yt-dlp aborts downloads larger than this.
    pub max_filesize: Option<u64>,
}

impl Default for YtDlpConfig {
    fn default() -> Self {
        Self {
            binary: "yt-dlp".to_string(),
            resolve_timeout: Duration::from_secs(60),
            fetch_timeout: Duration::from_secs(600),
            max_filesize: None,
        }
    }
}

/// [`VideoProvider`] backed by the yt-dlp command-line extractor.
pub struct YtDlpProvider {
    config: YtDlpConfig,
}

impl YtDlpProvider {
    pub fn new(config: YtDlpConfig) -> Self {
        Self { config }
    }

    /// Runs the prepared command with a deadline and returns stdout on a zero exit status.
    async fn run(&self, mut cmd: Command, limit: Duration) -> Result<Vec<u8>, ProviderError> {
        cmd.stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let child = cmd.spawn().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ProviderError::ToolNotFound(self.config.binary.clone())
            } else {
                ProviderError::Io(e)
            }
        })?;

        // Dropping the wait future on timeout drops the child, which kills it.
        let output = match tokio::time::timeout(limit, child.wait_with_output()).await {
            Ok(res) => res?,
            Err(_) => {
                warn!(binary = %self.config.binary, timeout_secs = limit.as_secs(), "yt-dlp timed out, killed");
                return Err(ProviderError::Timeout(limit.as_secs()));
            }
        };

        if !output.status.success() {
            return Err(ProviderError::Execution {
                status: output.status.to_string(),
                stderr: stderr_tail(&output.stderr),
            });
        }

        Ok(output.stdout)
    }
}

#[async_trait]
impl VideoProvider for YtDlpProvider {
    #[instrument(skip(self))]
    async fn resolve(&self, url: &str) -> Result<VideoMetadata, ProviderError> {
        let mut cmd = Command::new(&self.config.binary);
        cmd.args(["--dump-json", "--no-playlist", "--no-warnings"])
            .arg(url);

        let stdout = self.run(cmd, self.config.resolve_timeout).await?;
        let metadata = parse_info(&stdout)?;
        debug!(
            title = %metadata.title,
            variants = metadata.variants.len(),
            "yt-dlp metadata parsed"
        );
        Ok(metadata)
    }

    #[instrument(skip(self, variant), fields(format_id = %variant.id))]
    async fn fetch(
        &self,
        url: &str,
        variant: &StreamVariant,
        dest: &Path,
    ) -> Result<(), ProviderError> {
        let mut cmd = Command::new(&self.config.binary);
        cmd.arg("-f")
            .arg(&variant.id)
            .args(["--no-playlist", "--no-part", "--force-overwrites", "--no-warnings"]);
        if let Some(limit) = self.config.max_filesize {
            cmd.arg("--max-filesize").arg(limit.to_string());
        }
        cmd.arg("-o")
            .arg(dest)
            .arg(url);

        self.run(cmd, self.config.fetch_timeout).await?;

        // yt-dlp exits 0 on skipped downloads (including --max-filesize); the file must be there.
        let written = tokio::fs::metadata(dest).await?.len();
        info!(bytes = written, dest = %dest.display(), "yt-dlp fetch finished");
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
struct RawInfo {
    title: Option<String>,
    uploader: Option<String>,
    channel: Option<String>,
    duration: Option<f64>,
    #[serde(default)]
    formats: Vec<RawFormat>,
}

#[derive(Debug, Deserialize)]
struct RawFormat {
    format_id: String,
    ext: Option<String>,
    vcodec: Option<String>,
    acodec: Option<String>,
    height: Option<u32>,
    filesize: Option<u64>,
    filesize_approx: Option<f64>,
}

impl From<RawFormat> for StreamVariant {
    fn from(f: RawFormat) -> Self {
        let is_progressive = codec_present(f.vcodec.as_deref()) && codec_present(f.acodec.as_deref());
        let size_bytes = f
            .filesize
            .or_else(|| f.filesize_approx.map(|s| s.max(0.0) as u64))
            .unwrap_or(0);
        StreamVariant {
            id: f.format_id,
            is_progressive,
            resolution: f.height.unwrap_or(0),
            size_bytes,
            extension: f.ext.unwrap_or_else(|| "mp4".to_string()),
        }
    }
}

/// yt-dlp reports a missing track as `"none"`; unknown codecs are absent.
fn codec_present(codec: Option<&str>) -> bool {
    matches!(codec, Some(c) if !c.is_empty() && c != "none")
}

/// Parses `yt-dlp --dump-json` output into [`VideoMetadata`], keeping format order.
pub fn parse_info(stdout: &[u8]) -> Result<VideoMetadata, ProviderError> {
    let raw: RawInfo = serde_json::from_slice(stdout)?;

    let author = raw
        .uploader
        .or(raw.channel)
        .unwrap_or_else(|| "Unknown".to_string());

    Ok(VideoMetadata {
        title: raw.title.unwrap_or_else(|| "Unknown".to_string()),
        author,
        duration_seconds: raw.duration.map(|d| d.max(0.0) as u64).unwrap_or(0),
        variants: raw.formats.into_iter().map(StreamVariant::from).collect(),
    })
}

fn stderr_tail(stderr: &[u8]) -> String {
    let text = String::from_utf8_lossy(stderr);
    let lines: Vec<&str> = text.trim().lines().collect();
    let start = lines.len().saturating_sub(STDERR_TAIL_LINES);
    lines[start..].join("\n")
}
