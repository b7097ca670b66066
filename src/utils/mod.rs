//! Utility modules for error handling, configuration and path safety

pub mod config;
pub mod error;
pub mod paths;

// Re-export for convenience
pub use config::AppSettings;
pub use error::YtgrabError;
