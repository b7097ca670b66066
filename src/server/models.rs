//! Request and response bodies for the HTTP API

use serde::{Deserialize, Serialize};

/// Body of `POST /download`.
#[derive(Debug, Deserialize)]
pub struct DownloadRequest {
    /// Page URL to resolve. Absent and empty are treated the same.
    #[serde(default)]
    pub url: String,
}

/// Successful response of `POST /download`.
#[derive(Debug, Serialize)]
pub struct DownloadResponse {
    pub success: bool,
    /// Direct stream URL (metadata-only mode) or a `/files/...` route
    /// pointing at the saved file (download mode).
    pub download_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Response of `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_secs: u64,
}
