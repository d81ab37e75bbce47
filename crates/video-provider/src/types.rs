//! Video metadata and stream variant types.

use serde::{Deserialize, Serialize};

/// One downloadable representation of a video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamVariant {
    /// Opaque extractor token (yt-dlp `format_id`, e.g. "18", "22").
    pub id: String,
    /// Single stream carrying both audio and video.
    pub is_progressive: bool,
    /// Vertical resolution in pixels; 0 when unknown.
    pub resolution: u32,
    /// Size in bytes; 0 when the extractor reports none.
    pub size_bytes: u64,
    /// Container extension without the dot.
    pub extension: String,
}

/// Metadata for a single video. Owned by one request; never cached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoMetadata {
    pub title: String,
    pub author: String,
    pub duration_seconds: u64,
    /// Variants in extractor order.
    pub variants: Vec<StreamVariant>,
}

/// Formats seconds as `H:MM:SS` when there are hours, else `M:SS`.
pub fn format_duration(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{}:{:02}", minutes, secs)
    }
}
