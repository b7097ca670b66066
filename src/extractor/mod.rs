pub mod models;
pub mod traits;
pub mod ytdlp;

pub use models::{ExtractionOptions, MediaInfo, RequestedDownload};
pub use traits::Extractor;
pub use ytdlp::YtDlpExtractor;
