//! YouTube link recognition.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Canonical, short-link and privacy-enhanced hosts, followed by a watch/embed/v path or any
    /// `?v=` query, ending in an 11-character video id. Anchored at the start only.
    static ref YOUTUBE_URL: Regex = Regex::new(
        r"^(https?://)?(www\.|m\.)?(youtube|youtu|youtube-nocookie)\.(com|be)/(watch\?v=|embed/|v/|.+\?v=)?([^&=%\\?]{11})"
    )
    .expect("YOUTUBE_URL regex is valid");
}

/// Returns true when `text` looks like a YouTube video link. Never fails.
pub fn is_valid(text: &str) -> bool {
    YOUTUBE_URL.is_match(text)
}
