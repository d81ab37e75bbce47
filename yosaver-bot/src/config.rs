//! Bot config: Telegram connection, logging, download limits, extractor and liveness settings.
//! Loaded once from env at startup and passed down explicitly.

use anyhow::Result;
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use video_provider::YtDlpConfig;

use crate::pipeline::PipelineSettings;

/// 2 GiB, the Telegram Bot API upload limit on a local server.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 2 * 1024 * 1024 * 1024;
pub const DEFAULT_LIVENESS_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_CAPTION_TAG: &str = "📥 Done! Downloaded via @yosaverbot";

/// Bot config. Read-only after [`BotConfig::load`].
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// BOT_TOKEN
    pub bot_token: String,
    /// TELEGRAM_API_URL or TELOXIDE_API_URL
    pub telegram_api_url: Option<String>,
    /// LOG_FILE; stdout only when unset
    pub log_file: Option<String>,
    /// MAX_FILE_SIZE in bytes
    pub max_file_size: u64,
    /// LIVENESS_ADDR
    pub liveness_addr: SocketAddr,
    /// YTDLP_PATH
    pub ytdlp_path: String,
    /// RESOLVE_TIMEOUT_SECS
    pub resolve_timeout_secs: u64,
    /// FETCH_TIMEOUT_SECS
    pub fetch_timeout_secs: u64,
    /// DOWNLOAD_DIR; per-request temp dirs are created here
    pub download_dir: PathBuf,
    /// CAPTION_TAG, second caption line under the title
    pub caption_tag: String,
}

impl BotConfig {
    /// Load from environment variables. `token` overrides BOT_TOKEN if provided.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(t) => t,
            None => env::var("BOT_TOKEN").map_err(|_| anyhow::anyhow!("BOT_TOKEN not set"))?,
        };
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();
        let log_file = env::var("LOG_FILE").ok();
        let max_file_size = parse_var("MAX_FILE_SIZE", DEFAULT_MAX_FILE_SIZE)?;
        let liveness_addr = match env::var("LIVENESS_ADDR") {
            Ok(s) => s
                .parse()
                .map_err(|_| anyhow::anyhow!("LIVENESS_ADDR is not a socket address: {}", s))?,
            Err(_) => DEFAULT_LIVENESS_ADDR.parse()?,
        };
        let ytdlp_path = env::var("YTDLP_PATH").unwrap_or_else(|_| "yt-dlp".to_string());
        let resolve_timeout_secs = parse_var("RESOLVE_TIMEOUT_SECS", 60)?;
        let fetch_timeout_secs = parse_var("FETCH_TIMEOUT_SECS", 600)?;
        let download_dir = env::var("DOWNLOAD_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| env::temp_dir());
        let caption_tag =
            env::var("CAPTION_TAG").unwrap_or_else(|_| DEFAULT_CAPTION_TAG.to_string());

        Ok(Self {
            bot_token,
            telegram_api_url,
            log_file,
            max_file_size,
            liveness_addr,
            ytdlp_path,
            resolve_timeout_secs,
            fetch_timeout_secs,
            download_dir,
            caption_tag,
        })
    }

    /// Validate config (non-empty token, valid API URL if set, non-zero size limit).
    pub fn validate(&self) -> Result<()> {
        if self.bot_token.trim().is_empty() {
            anyhow::bail!("BOT_TOKEN is empty");
        }
        if let Some(ref url_str) = self.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                anyhow::bail!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url_str
                );
            }
        }
        if self.max_file_size == 0 {
            anyhow::bail!("MAX_FILE_SIZE must be greater than zero");
        }
        Ok(())
    }

    /// Settings consumed by [`crate::pipeline::DownloadPipeline`].
    pub fn pipeline_settings(&self) -> PipelineSettings {
        PipelineSettings {
            max_file_size: self.max_file_size,
            download_dir: self.download_dir.clone(),
            caption_tag: self.caption_tag.clone(),
        }
    }

    /// Settings for the yt-dlp provider.
    pub fn ytdlp_config(&self) -> YtDlpConfig {
        YtDlpConfig {
            binary: self.ytdlp_path.clone(),
            resolve_timeout: Duration::from_secs(self.resolve_timeout_secs),
            fetch_timeout: Duration::from_secs(self.fetch_timeout_secs),
            max_filesize: Some(self.max_file_size),
        }
    }
}

/// Parses an optional env var, falling back to `default` when unset.
fn parse_var<T: FromStr>(name: &str, default: T) -> Result<T> {
    match env::var(name) {
        Ok(s) => s
            .trim()
            .parse()
            .map_err(|_| anyhow::anyhow!("{} has an invalid value: {}", name, s)),
        Err(_) => Ok(default),
    }
}
