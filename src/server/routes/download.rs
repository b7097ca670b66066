//! `POST /download` — resolve a video URL
//!
//! The handler validates the single-field body, hands everything else to the
//! extraction client and maps its outcome onto the response contract. It
//! blocks its connection task for the full duration of the extraction; there
//! is no job queue and no deduplication of identical URLs.

use axum::{extract::State, Json};
use tracing::{info, warn};

use crate::extractor::ExtractionOptions;
use crate::server::error::{ApiError, ApiResult};
use crate::server::models::{DownloadRequest, DownloadResponse};
use crate::server::AppState;
use crate::utils::error::YtgrabError;
use crate::utils::paths;

pub async fn download(
    State(state): State<AppState>,
    Json(req): Json<DownloadRequest>,
) -> ApiResult<Json<DownloadResponse>> {
    let url = req.url.trim();
    if url.is_empty() {
        return Err(YtgrabError::MissingUrl.into());
    }

    let settings = &state.settings;
    let opts = ExtractionOptions {
        format: settings.format.clone(),
        cookie_file: settings.cookie_file.clone(),
        output_template: if settings.metadata_only {
            None
        } else {
            Some(paths::output_template(&settings.download_dir))
        },
        user_agent: settings.user_agent.clone(),
        retries: settings.retries,
        buffer_size: settings.buffer_size,
    };

    info!(
        "Resolving {} via {} (metadata_only: {})",
        url,
        state.extractor.id(),
        settings.metadata_only
    );
    let media = state.extractor.extract(url, &opts).await.map_err(|e| {
        warn!("Extraction failed for {}: {}", url, e);
        ApiError::from(e)
    })?;

    if settings.metadata_only {
        // Metadata-only mode: pass the resolved stream URL straight through.
        let download_url = media.url.clone().ok_or_else(|| {
            ApiError::from(YtgrabError::ExtractionError(
                "no direct stream URL in extracted metadata".to_string(),
            ))
        })?;

        return Ok(Json(DownloadResponse {
            success: true,
            download_url,
            title: None,
        }));
    }

    // Download mode: the extractor reported success, so a file must exist at
    // the path it claims to have written.
    let filepath = media
        .resolved_filepath()
        .ok_or_else(|| {
            YtgrabError::PostconditionError("no file path in extraction result".to_string())
        })?
        .to_path_buf();

    if !filepath.is_file() {
        return Err(YtgrabError::PostconditionError(format!(
            "{} is missing on disk",
            filepath.display()
        ))
        .into());
    }

    let basename = filepath
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            YtgrabError::PostconditionError(format!(
                "unusable file name in {}",
                filepath.display()
            ))
        })?;

    info!("Saved {} as {}", url, basename);
    Ok(Json(DownloadResponse {
        success: true,
        download_url: format!("/files/{}", basename),
        title: Some(media.label().to_string()),
    }))
}
