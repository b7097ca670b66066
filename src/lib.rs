//! ytgrab library
//!
//! A thin HTTP shell around yt-dlp: `POST /download` resolves a video URL to
//! a direct stream link or a locally saved file, `GET /files/{filename}`
//! serves saved files back.

pub mod extractor;
pub mod server;
pub mod utils;

// Re-export main types for easier use
pub use extractor::{ExtractionOptions, Extractor, MediaInfo, YtDlpExtractor};
pub use server::{router, AppState};
pub use utils::{AppSettings, YtgrabError};
