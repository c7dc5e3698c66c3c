//! Reading YAML/JSON documents from disk.

use deploypick_common::{Error, Result};
use serde::de::DeserializeOwned;
use std::path::Path;

/// On-disk document formats, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "json" => Ok(DocumentFormat::Json),
            "yaml" | "yml" => Ok(DocumentFormat::Yaml),
            _ => Err(Error::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

/// Parse a document from a string in the given format.
pub fn parse_document<T: DeserializeOwned>(content: &str, format: DocumentFormat) -> Result<T> {
    match format {
        DocumentFormat::Json => Ok(serde_json::from_str(content)?),
        DocumentFormat::Yaml => Ok(serde_yaml::from_str(content)?),
    }
}

/// Read and parse a document, picking the format from the extension.
pub fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let format = DocumentFormat::from_path(path)?;
    let content = std::fs::read_to_string(path)?;
    parse_document(&content, format)
}
