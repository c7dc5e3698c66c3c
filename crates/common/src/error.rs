//! Common error types for deploypick.

use std::path::PathBuf;
use thiserror::Error;

/// Common error type for deploypick operations.
///
/// The selector pipeline itself never fails; these errors come from the
/// surfaces around it (file loading, schema validation, scanning).
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(PathBuf),

    #[error("Schema validation failed: {0}")]
    SchemaValidation(String),

    #[error("Invalid catalog: {}", .0.join("; "))]
    InvalidCatalog(Vec<String>),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Scan error: {path}: {reason}")]
    Scan { path: PathBuf, reason: String },
}

/// Result type alias using common Error.
pub type Result<T> = std::result::Result<T, Error>;
