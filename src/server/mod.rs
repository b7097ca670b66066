//! HTTP server assembly

pub mod error;
pub mod models;
pub mod routes;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Instant;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::extractor::Extractor;
use crate::utils::AppSettings;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub extractor: Arc<dyn Extractor>,
    pub settings: Arc<AppSettings>,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(extractor: Arc<dyn Extractor>, settings: AppSettings) -> Self {
        Self {
            extractor,
            settings: Arc::new(settings),
            start_time: Instant::now(),
        }
    }
}

/// Build the application router.
///
/// CORS is wide open so a browser frontend on another origin can call the
/// API directly.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/download", post(routes::download::download))
        .route("/files/{filename}", get(routes::files::serve_file))
        .route("/health", get(routes::health::health))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
