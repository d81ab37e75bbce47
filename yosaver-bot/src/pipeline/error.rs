//! Pipeline error taxonomy and the user-facing text for each outcome.
//!
//! Input and policy failures (link, stream, size) get specific texts so users can correct them;
//! internal failures (resolve, fetch, send) get generic texts and are only detailed in logs.

use thiserror::Error;
use video_provider::ProviderError;
use yosaver_core::CoreError;

pub const MSG_INVALID_URL: &str =
    "❌ This doesn't look like a YouTube link. Check it and try again.";
pub const MSG_RESOLVE_FAILED: &str = "❌ Couldn't get video info.";
pub const MSG_NO_STREAM: &str = "❌ Couldn't find a suitable video stream.";
pub const MSG_DOWNLOAD_FAILED: &str =
    "❌ An error occurred while downloading the video. Please try again later.";

const MIB: f64 = 1024.0 * 1024.0;
const GIB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Metadata lookup failed for any reason.
#[derive(Error, Debug)]
#[error("Could not resolve video metadata")]
pub struct ResolveError {
    #[source]
    pub source: ProviderError,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("No progressive stream available")]
    NoSuitableStream,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SizeError {
    #[error("Stream is {observed} bytes, limit is {ceiling} bytes")]
    TooLarge { observed: u64, ceiling: u64 },
}

#[derive(Error, Debug)]
pub enum DeliveryError {
    #[error("Could not create temp storage: {0}")]
    Storage(#[source] std::io::Error),

    #[error("Fetch failed: {0}")]
    FetchFailed(#[source] ProviderError),

    #[error("Send failed: {0}")]
    SendFailed(#[source] CoreError),

    #[error("Fetched file over the limit: {0}")]
    Oversized(#[source] SizeError),
}

/// Terminal outcome of one request that did not end in a delivered video.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Not a recognized video link")]
    InvalidUrl,

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error(transparent)]
    Size(#[from] SizeError),

    #[error(transparent)]
    Delivery(#[from] DeliveryError),
}

impl PipelineError {
    /// Text sent to the chat for this outcome.
    pub fn user_message(&self) -> String {
        match self {
            PipelineError::InvalidUrl => MSG_INVALID_URL.to_string(),
            PipelineError::Resolve(_) => MSG_RESOLVE_FAILED.to_string(),
            PipelineError::Selection(SelectionError::NoSuitableStream) => MSG_NO_STREAM.to_string(),
            PipelineError::Size(size)
            | PipelineError::Delivery(DeliveryError::Oversized(size)) => too_large_message(size),
            PipelineError::Delivery(_) => MSG_DOWNLOAD_FAILED.to_string(),
        }
    }

    /// Short name for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            PipelineError::InvalidUrl => "invalid_url",
            PipelineError::Resolve(_) => "resolve",
            PipelineError::Selection(_) => "no_suitable_stream",
            PipelineError::Size(_) | PipelineError::Delivery(DeliveryError::Oversized(_)) => {
                "too_large"
            }
            PipelineError::Delivery(DeliveryError::Storage(_)) => "storage",
            PipelineError::Delivery(DeliveryError::FetchFailed(_)) => "fetch_failed",
            PipelineError::Delivery(DeliveryError::SendFailed(_)) => "send_failed",
        }
    }
}

fn too_large_message(err: &SizeError) -> String {
    match err {
        SizeError::TooLarge { observed, ceiling } => format!(
            "❌ File is too large: {:.1} MB (max {})",
            *observed as f64 / MIB,
            format_limit(*ceiling)
        ),
    }
}

/// GB from 1 GiB up, MB below. Whole numbers without decimals.
fn format_limit(bytes: u64) -> String {
    let (value, unit) = if bytes as f64 >= GIB {
        (bytes as f64 / GIB, "GB")
    } else {
        (bytes as f64 / MIB, "MB")
    };
    if value.fract() == 0.0 {
        format!("{:.0} {}", value, unit)
    } else {
        format!("{:.1} {}", value, unit)
    }
}
