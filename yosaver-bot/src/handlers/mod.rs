//! Handler implementations: logging, `/start`, and the download flow.

mod download;
mod logging;
mod start;

pub use download::{DownloadHandler, MSG_DOWNLOADING};
pub use logging::LoggingHandler;
pub use start::{StartHandler, WELCOME_TEXT};
