//! Provider error types.

use thiserror::Error;

/// Errors from resolving or fetching a video. Messages are for logs, never for end users.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Extractor binary not found: {0}")]
    ToolNotFound(String),

    #[error("Extractor exited with {status}: {stderr}")]
    Execution { status: String, stderr: String },

    #[error("Failed to parse extractor output: {0}")]
    Parse(String),

    #[error("Extractor timed out after {0}s")]
    Timeout(u64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for ProviderError {
    fn from(e: serde_json::Error) -> Self {
        ProviderError::Parse(e.to_string())
    }
}
