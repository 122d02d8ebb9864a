//! YouTube URL rules and the metadata lookup used by the session form.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{ConError, Result};

static YOUTUBE_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https?://(www\.)?(youtube\.com/watch\?v=|youtu\.be/)([\w-]+)")
        .expect("YouTube URL pattern is valid")
});

/// Metadata shown in the session form after a URL is entered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoInfo {
    pub title: String,
    pub duration: String,
    pub description: String,
}

/// The video id of a `youtube.com/watch?v=` or `youtu.be/` link.
pub fn video_id(url: &str) -> Option<&str> {
    YOUTUBE_URL
        .captures(url)
        .and_then(|caps| caps.get(3))
        .map(|m| m.as_str())
}

/// Whether `url` is a YouTube link carrying a video id.
pub fn is_valid_url(url: &str) -> bool {
    video_id(url).is_some()
}

/// Returns placeholder metadata for a valid link.
///
/// No network lookup is performed; the session form only uses the result to
/// prefill empty fields.
pub fn extract_info(url: &str) -> Result<VideoInfo> {
    if url.trim().is_empty() {
        return Err(ConError::validation("url", "URL is required"));
    }
    if !is_valid_url(url) {
        return Err(ConError::validation("url", "Invalid YouTube URL"));
    }

    Ok(VideoInfo {
        title: "Sample Video Title".to_string(),
        duration: "45 minutes".to_string(),
        description: "Sample video description".to_string(),
    })
}
