//! Manifest error types.

use std::path::PathBuf;
use thiserror::Error;

/// Manifest loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("No components JSON found at {}", .0.display())]
    NotFound(PathBuf),

    #[error("IO error when reading `{}`", .0.display())]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Invalid components JSON at {}: {}", .0.display(), .1)]
    Json(PathBuf, #[source] serde_json::Error),
}
