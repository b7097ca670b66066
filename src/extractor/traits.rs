use crate::extractor::models::{ExtractionOptions, MediaInfo};
use crate::utils::error::YtgrabError;
use async_trait::async_trait;

/// Core trait for the extraction client boundary
///
/// This trait isolates the HTTP handlers from the concrete extraction method
/// (yt-dlp child process in production, mocks in tests).
#[async_trait]
pub trait Extractor: Send + Sync {
    /// Returns a unique identifier for this extractor (e.g., "yt-dlp")
    fn id(&self) -> &'static str;

    /// Resolves a page URL into media metadata.
    ///
    /// When `opts.output_template` is set, the media is also downloaded to
    /// that location and the returned metadata carries the final file path.
    async fn extract(&self, url: &str, opts: &ExtractionOptions)
        -> Result<MediaInfo, YtgrabError>;
}
