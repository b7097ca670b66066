//! Download directory handling and collision-free output naming
//!
//! The download directory is the only shared mutable state between requests.
//! There is no locking; safety comes entirely from every request writing to a
//! unique, uuid-prefixed filename.

use crate::utils::error::YtgrabError;
use std::path::{Component, Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

/// Ensure the download directory exists, creating it if absent.
pub fn ensure_download_dir(dir: &Path) -> Result<(), YtgrabError> {
    if !dir.exists() {
        debug!("Creating download directory: {}", dir.display());
        std::fs::create_dir_all(dir)?;
    }
    Ok(())
}

/// Build the yt-dlp output template for one download request.
///
/// The uuid prefix guarantees two concurrent requests never collide even when
/// they resolve the same video; yt-dlp fills in the title, extension and its
/// own filename sanitization (`--restrict-filenames`).
pub fn output_template(dir: &Path) -> PathBuf {
    dir.join(format!("{}-%(title).80B.%(ext)s", Uuid::new_v4()))
}

/// Check whether `name` is a plain filename that stays inside the download
/// directory: exactly one normal path component, no separators, no `..`.
pub fn is_safe_filename(name: &str) -> bool {
    if name.is_empty() || name.contains('\\') {
        return false;
    }
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates_are_unique_per_request() {
        let a = output_template(Path::new("/tmp/dl"));
        let b = output_template(Path::new("/tmp/dl"));
        assert_ne!(a, b);
    }

    #[test]
    fn test_template_shape() {
        let tmpl = output_template(Path::new("/tmp/dl"));
        let s = tmpl.to_string_lossy();
        assert!(s.starts_with("/tmp/dl/"));
        assert!(s.ends_with("-%(title).80B.%(ext)s"));
    }

    #[test]
    fn test_safe_filename_accepts_plain_names() {
        assert!(is_safe_filename("video.mp4"));
        assert!(is_safe_filename("a-b_c.webm"));
    }

    #[test]
    fn test_safe_filename_rejects_traversal() {
        assert!(!is_safe_filename(""));
        assert!(!is_safe_filename(".."));
        assert!(!is_safe_filename("../video.mp4"));
        assert!(!is_safe_filename("a/b.mp4"));
        assert!(!is_safe_filename("/etc/passwd"));
        assert!(!is_safe_filename("..\\x.mp4"));
    }

    #[test]
    fn test_ensure_download_dir_creates_missing() {
        let tmp = tempfile::TempDir::new().expect("temp dir");
        let dir = tmp.path().join("nested").join("downloads");
        ensure_download_dir(&dir).expect("create");
        assert!(dir.is_dir());
        // idempotent
        ensure_download_dir(&dir).expect("second create");
    }
}
