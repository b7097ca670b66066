//! yt-dlp wrapper for video extraction
//!
//! This module handles video information extraction and downloading by
//! shelling out to yt-dlp. All platform logic (bot-detection countermeasures,
//! format negotiation, transfer retries) lives inside yt-dlp; this wrapper
//! only builds the argument list, parses the JSON output and classifies
//! failures by inspecting stderr text.

use crate::extractor::models::{ExtractionOptions, MediaInfo};
use crate::extractor::traits::Extractor;
use crate::utils::error::YtgrabError;
use async_trait::async_trait;
use std::path::PathBuf;
use std::process::Command;
use tokio::process::Command as AsyncCommand;
use tracing::{debug, error, info, warn};

/// Production extractor backed by the yt-dlp binary
pub struct YtDlpExtractor {
    ytdlp_path: PathBuf,
}

impl YtDlpExtractor {
    /// Initialize extractor and verify yt-dlp availability
    ///
    /// Search order:
    /// 1. System PATH
    /// 2. Common installation paths (Homebrew, pip user installs, etc.)
    pub fn new() -> Result<Self, YtgrabError> {
        let ytdlp_path = match find_ytdlp() {
            Some(path) => {
                info!("Found yt-dlp at: {}", path.display());
                path
            }
            None => {
                error!("yt-dlp not found anywhere!");
                return Err(YtgrabError::YtDlpNotFound);
            }
        };

        Ok(Self { ytdlp_path })
    }

    /// Get the path to yt-dlp being used
    pub fn ytdlp_path(&self) -> &PathBuf {
        &self.ytdlp_path
    }

    fn build_args(url: &str, opts: &ExtractionOptions) -> Vec<String> {
        // --dump-single-json emits one JSON document on stdout; --no-simulate
        // additionally performs the download when an output template is set.
        let mut args = vec![
            "--dump-single-json".to_string(),
            "--no-warnings".to_string(),
            "--no-playlist".to_string(),
            "-f".to_string(),
            opts.format.clone(),
            "--retries".to_string(),
            opts.retries.to_string(),
            "--buffer-size".to_string(),
            opts.buffer_size.to_string(),
        ];

        if let Some(cookies) = &opts.cookie_file {
            args.push("--cookies".to_string());
            args.push(cookies.display().to_string());
        }

        if let Some(ua) = &opts.user_agent {
            args.push("--user-agent".to_string());
            args.push(ua.clone());
        }

        match &opts.output_template {
            Some(template) => {
                args.push("--no-simulate".to_string());
                // keeps yt-dlp's title expansion ASCII-safe for /files/ URLs
                args.push("--restrict-filenames".to_string());
                args.push("-o".to_string());
                args.push(template.display().to_string());
            }
            None => {
                args.push("--no-download".to_string());
            }
        }

        args.push(url.to_string());
        args
    }
}

#[async_trait]
impl Extractor for YtDlpExtractor {
    fn id(&self) -> &'static str {
        "yt-dlp"
    }

    async fn extract(
        &self,
        url: &str,
        opts: &ExtractionOptions,
    ) -> Result<MediaInfo, YtgrabError> {
        let downloading = opts.output_template.is_some();
        debug!("Invoking yt-dlp for {} (download: {})", url, downloading);

        let output = AsyncCommand::new(&self.ytdlp_path)
            .args(Self::build_args(url, opts))
            .output()
            .await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            error!("yt-dlp failed for {}: {}", url, stderr.trim());
            return Err(classify_stderr(&stderr, downloading));
        }

        let json_str = String::from_utf8_lossy(&output.stdout);
        let info: MediaInfo = serde_json::from_str(json_str.trim())?;
        Ok(info)
    }
}

/// Classify a yt-dlp stderr dump into the service error taxonomy.
///
/// yt-dlp exposes no structured errors over the CLI, so this is a best-effort
/// substring heuristic kept in one place. Unrecognized messages fall back to
/// download or extraction failure depending on the operating mode.
pub fn classify_stderr(stderr: &str, downloading: bool) -> YtgrabError {
    let message = first_error_line(stderr);
    let lower = message.to_lowercase();

    if lower.contains("confirm you're not a bot")
        || lower.contains("confirm you\u{2019}re not a bot")
        || lower.contains("sign in")
    {
        return YtgrabError::AuthRequired(message);
    }

    if lower.contains("unsupported url")
        || lower.contains("unable to extract")
        || lower.contains("is not a valid url")
        || lower.contains("video unavailable")
    {
        return YtgrabError::ExtractionError(message);
    }

    if lower.contains("unable to download")
        || lower.contains("http error")
        || lower.contains("requested format is not available")
        || lower.contains("connection")
    {
        return YtgrabError::DownloadError(message);
    }

    if downloading {
        YtgrabError::DownloadError(message)
    } else {
        YtgrabError::ExtractionError(message)
    }
}

/// Pick the first `ERROR:` line from stderr, or the whole trimmed dump if
/// yt-dlp printed none.
fn first_error_line(stderr: &str) -> String {
    stderr
        .lines()
        .find(|line| line.starts_with("ERROR:"))
        .map(|line| line.trim_start_matches("ERROR:").trim().to_string())
        .unwrap_or_else(|| stderr.trim().to_string())
}

// ============================================================
// yt-dlp Detection Functions
// ============================================================

/// Find yt-dlp binary with priority:
/// 1. System PATH
/// 2. Common installation paths
pub fn find_ytdlp() -> Option<PathBuf> {
    if let Some(system) = find_in_path() {
        info!("Using system yt-dlp: {:?}", system);
        return Some(system);
    }

    if let Some(common) = find_in_common_paths() {
        info!("Using yt-dlp from common path: {:?}", common);
        return Some(common);
    }

    warn!("yt-dlp not found anywhere!");
    None
}

/// Find yt-dlp in system PATH using `which`
fn find_in_path() -> Option<PathBuf> {
    // Try using the which crate first
    if let Ok(path) = which::which("yt-dlp") {
        if path.exists() {
            return Some(path);
        }
    }

    // Fallback: Use shell `which` command
    let output = Command::new("which").arg("yt-dlp").output().ok()?;

    if output.status.success() {
        let path_str = String::from_utf8_lossy(&output.stdout);
        let path = PathBuf::from(path_str.trim());
        if path.exists() {
            return Some(path);
        }
    }

    None
}

/// Find yt-dlp in common installation paths
fn find_in_common_paths() -> Option<PathBuf> {
    let common_paths = [
        // Homebrew (Apple Silicon)
        "/opt/homebrew/bin/yt-dlp",
        // Homebrew (Intel) / manual installs
        "/usr/local/bin/yt-dlp",
        // System package managers
        "/usr/bin/yt-dlp",
        // pip user install
        "~/.local/bin/yt-dlp",
    ];

    for path_str in common_paths {
        // Expand ~ to home directory
        let expanded = if let Some(rest) = path_str.strip_prefix("~/") {
            match dirs::home_dir() {
                Some(home) => home.join(rest),
                None => PathBuf::from(path_str),
            }
        } else {
            PathBuf::from(path_str)
        };

        if expanded.exists() && is_executable(&expanded) {
            return Some(expanded);
        }
    }

    None
}

/// Check if a file is executable
fn is_executable(path: &PathBuf) -> bool {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;

        if let Ok(metadata) = std::fs::metadata(path) {
            let permissions = metadata.permissions();
            // Check if any executable bit is set
            return permissions.mode() & 0o111 != 0;
        }
    }

    #[cfg(not(unix))]
    {
        // On Windows, just check if file exists
        return path.exists();
    }

    false
}

// ============================================================
// Tests
// ============================================================
