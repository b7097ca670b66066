//! ytgrab - HTTP shell around yt-dlp
//!
//! Accepts `POST /download` with a video URL and answers with either a direct
//! stream link or a `/files/...` URL pointing at a locally saved copy. All
//! platform extraction is delegated to the yt-dlp binary.

use anyhow::{Context, Result};
use clap::Parser;
use std::net::IpAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use ytgrab::extractor::YtDlpExtractor;
use ytgrab::server::{self, AppState};
use ytgrab::utils::{paths, AppSettings};

#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Address to bind on
    #[arg(long)]
    host: Option<IpAddr>,

    /// Port to bind on
    #[arg(long)]
    port: Option<u16>,

    /// Directory to save and serve downloaded files from
    #[arg(long)]
    download_dir: Option<PathBuf>,

    /// Cookie file handed to yt-dlp for authenticated extraction
    #[arg(long)]
    cookie_file: Option<PathBuf>,

    /// yt-dlp format preference string
    #[arg(long)]
    format: Option<String>,

    /// Resolve direct stream URLs instead of downloading files
    #[arg(long)]
    metadata_only: bool,

    /// Enable verbose logging
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let default_filter = if args.debug { "ytgrab=debug,tower_http=debug" } else { "ytgrab=info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    let mut settings = AppSettings::default();
    if let Some(host) = args.host {
        settings.host = host;
    }
    if let Some(port) = args.port {
        settings.port = port;
    }
    if let Some(dir) = args.download_dir {
        settings.download_dir = dir;
    }
    if let Some(format) = args.format {
        settings.format = format;
    }
    settings.cookie_file = args.cookie_file.or(settings.cookie_file);
    settings.metadata_only = args.metadata_only;

    paths::ensure_download_dir(&settings.download_dir)
        .with_context(|| format!("creating {}", settings.download_dir.display()))?;

    // A missing cookie file is not fatal at startup; authenticated
    // extractions will surface it as a request-time error instead.
    if let Some(cookies) = &settings.cookie_file {
        if !cookies.is_file() {
            warn!(
                "Cookie file {} not found; authenticated extraction will fail",
                cookies.display()
            );
        }
    }

    let extractor = YtDlpExtractor::new().context("yt-dlp is required to run ytgrab")?;
    info!("Using yt-dlp at {}", extractor.ytdlp_path().display());

    let addr = std::net::SocketAddr::new(settings.host, settings.port);
    let state = AppState::new(Arc::new(extractor), settings);
    let app = server::router(state);

    info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {}", addr))?;
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
