//! # video-provider
//!
//! Resolves video metadata and fetches one stream variant to a local file. [`VideoProvider`] is the
//! seam; [`YtDlpProvider`] implements it by driving the `yt-dlp` binary.

pub mod error;
pub mod provider;
pub mod types;
pub mod ytdlp;

pub use error::ProviderError;
pub use provider::VideoProvider;
pub use types::{format_duration, StreamVariant, VideoMetadata};
pub use ytdlp::{YtDlpConfig, YtDlpProvider};
