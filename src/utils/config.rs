//! Application configuration

use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    /// Address to bind the HTTP server on
    pub host: IpAddr,

    /// Port to bind the HTTP server on
    pub port: u16,

    /// Directory downloaded files are written to and served from
    pub download_dir: PathBuf,

    /// Cookie file handed to yt-dlp for authenticated extraction
    pub cookie_file: Option<PathBuf>,

    /// yt-dlp format preference string
    pub format: String,

    /// When true, resolve a direct stream URL without writing anything to disk
    pub metadata_only: bool,

    /// Retry attempts passed through to yt-dlp
    pub retries: usize,

    /// Download buffer size passed through to yt-dlp (bytes)
    pub buffer_size: usize,

    /// Optional User-Agent override passed through to yt-dlp
    pub user_agent: Option<String>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 5000,
            download_dir: dirs::download_dir()
                .map(|d| d.join("ytgrab"))
                .unwrap_or_else(|| PathBuf::from("./downloads")),
            cookie_file: None,
            format: "best[ext=mp4]/best".to_string(),
            metadata_only: false,
            retries: 3,
            buffer_size: 16 * 1024, // 16KB
            user_agent: None,
        }
    }
}
