//! `GET /files/{filename}` — serve a previously downloaded file
//!
//! Filenames are restricted to a single normal path component before any
//! filesystem access, so a request can never escape the download directory.

use axum::{
    body::Body,
    extract::{Path as AxumPath, State},
    http::header,
    response::Response,
};
use std::io::ErrorKind;
use tokio::fs::File;
use tokio_util::io::ReaderStream;
use tracing::{debug, error};

use crate::server::error::{ApiError, ApiResult};
use crate::server::AppState;
use crate::utils::error::YtgrabError;
use crate::utils::paths;

pub async fn serve_file(
    State(state): State<AppState>,
    AxumPath(filename): AxumPath<String>,
) -> ApiResult<Response> {
    if !paths::is_safe_filename(&filename) {
        debug!("Rejected unsafe filename: {:?}", filename);
        return Err(YtgrabError::FileNotFound.into());
    }

    let path = state.settings.download_dir.join(&filename);
    let file = match File::open(&path).await {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(YtgrabError::FileNotFound.into());
        }
        Err(e) => {
            error!("Failed to open {}: {}", path.display(), e);
            return Err(YtgrabError::ServingError(e.to_string()).into());
        }
    };

    let metadata = file.metadata().await.map_err(|e| {
        error!("Failed to stat {}: {}", path.display(), e);
        ApiError::from(YtgrabError::ServingError(e.to_string()))
    })?;
    if !metadata.is_file() {
        return Err(YtgrabError::FileNotFound.into());
    }

    let mime = mime_guess::from_path(&path).first_or_octet_stream();
    let stream = ReaderStream::new(file);

    Response::builder()
        .header(header::CONTENT_TYPE, mime.as_ref())
        .header(header::CONTENT_LENGTH, metadata.len())
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", filename),
        )
        .body(Body::from_stream(stream))
        .map_err(|e| ApiError::from(YtgrabError::ServingError(e.to_string())))
}
