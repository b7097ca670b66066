//! Error handling for ytgrab

use thiserror::Error;

/// Main error type for ytgrab
#[derive(Debug, Error)]
pub enum YtgrabError {
    #[error("yt-dlp not found. Please install yt-dlp")]
    YtDlpNotFound,

    #[error("No URL provided")]
    MissingUrl,

    #[error(
        "Authentication required by the video platform. \
         Your cookie file is likely missing, stale or invalid: {0}"
    )]
    AuthRequired(String),

    #[error("Failed to extract video info: {0}")]
    ExtractionError(String),

    #[error("Download failed: {0}")]
    DownloadError(String),

    #[error("Download reported success but no file was produced: {0}")]
    PostconditionError(String),

    #[error("File not found.")]
    FileNotFound,

    #[error("Failed to serve file: {0}")]
    ServingError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
