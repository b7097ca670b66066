//! Data structures exchanged with the extraction client
//!
//! yt-dlp's JSON output is a loosely-typed record that varies by platform and
//! by operating mode, so every field here is read defensively.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration bag passed to the extraction client.
///
/// These map one-to-one onto yt-dlp CLI arguments and are not modeled further.
#[derive(Debug, Clone)]
pub struct ExtractionOptions {
    /// Format preference string, e.g. `best[ext=mp4]/best`
    pub format: String,

    /// Cookie file for authenticated extraction
    pub cookie_file: Option<PathBuf>,

    /// Output template; `None` means metadata-only (nothing written to disk)
    pub output_template: Option<PathBuf>,

    /// User-Agent override
    pub user_agent: Option<String>,

    /// Retry count, passed straight through (this layer adds no retries)
    pub retries: usize,

    /// Download buffer size in bytes
    pub buffer_size: usize,
}

/// Metadata returned by the extraction client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaInfo {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    /// Resolved direct stream URL (metadata-only mode)
    #[serde(default)]
    pub url: Option<String>,
    /// Local file path (download mode, older yt-dlp layouts)
    #[serde(default)]
    pub filepath: Option<PathBuf>,
    /// Per-format download records (download mode, current yt-dlp layout)
    #[serde(default)]
    pub requested_downloads: Vec<RequestedDownload>,
    #[serde(default)]
    pub ext: Option<String>,
    #[serde(default)]
    pub extractor: Option<String>,
    #[serde(default)]
    pub duration: Option<f64>,
}

/// One entry of yt-dlp's `requested_downloads` array.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestedDownload {
    #[serde(default)]
    pub filepath: Option<PathBuf>,
}

impl MediaInfo {
    /// Locate the downloaded file path, checking `requested_downloads[0]`
    /// first and falling back to the top-level `filepath`.
    pub fn resolved_filepath(&self) -> Option<&Path> {
        self.requested_downloads
            .first()
            .and_then(|d| d.filepath.as_deref())
            .or(self.filepath.as_deref())
    }

    /// Best human-readable label for naming files: title, falling back to id.
    pub fn label(&self) -> &str {
        if !self.title.is_empty() {
            &self.title
        } else {
            &self.id
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolved_filepath_prefers_requested_downloads() {
        let info: MediaInfo = serde_json::from_str(
            r#"{
                "id": "abc",
                "title": "t",
                "filepath": "/top/level.mp4",
                "requested_downloads": [{"filepath": "/nested/file.mp4"}]
            }"#,
        )
        .unwrap();
        assert_eq!(
            info.resolved_filepath(),
            Some(Path::new("/nested/file.mp4"))
        );
    }

    #[test]
    fn test_resolved_filepath_falls_back_to_top_level() {
        let info: MediaInfo =
            serde_json::from_str(r#"{"id":"abc","filepath":"/top/level.mp4"}"#).unwrap();
        assert_eq!(info.resolved_filepath(), Some(Path::new("/top/level.mp4")));
    }

    #[test]
    fn test_sparse_json_deserializes() {
        let info: MediaInfo = serde_json::from_str(r#"{"url":"https://cdn/v.mp4"}"#).unwrap();
        assert!(info.id.is_empty());
        assert!(info.resolved_filepath().is_none());
        assert_eq!(info.url.as_deref(), Some("https://cdn/v.mp4"));
    }

    #[test]
    fn test_label_falls_back_to_id() {
        let info: MediaInfo = serde_json::from_str(r#"{"id":"vid123"}"#).unwrap();
        assert_eq!(info.label(), "vid123");
    }
}
