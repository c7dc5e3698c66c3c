//! Project description types - input to and output of project analysis.

use deploypick_common::units::bytes_to_mb;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single file of the project being deployed.
///
/// Only the name and size are required. `content` is optional and used for
/// best-effort feature detection; binary or unread files leave it empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectFile {
    /// File name or path relative to the project root.
    pub name: String,
    /// Size in bytes.
    pub size: u64,
    /// Text content, when available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl ProjectFile {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
            content: None,
        }
    }

    pub fn with_content(name: impl Into<String>, size: u64, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            content: Some(content.into()),
        }
    }
}

/// Detected kind of project.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    Nextjs,
    Vite,
    React,
    Nodejs,
    Python,
    Php,
    Ruby,
    Static,
    #[default]
    Unknown,
}

impl ProjectType {
    /// Name as it appears in a platform's supported features.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectType::Nextjs => "nextjs",
            ProjectType::Vite => "vite",
            ProjectType::React => "react",
            ProjectType::Nodejs => "nodejs",
            ProjectType::Python => "python",
            ProjectType::Php => "php",
            ProjectType::Ruby => "ruby",
            ProjectType::Static => "static",
            ProjectType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Runtime and service dependencies, each detected independently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependencies {
    pub node: bool,
    pub python: bool,
    pub php: bool,
    pub ruby: bool,
    pub docker: bool,
    pub database: bool,
    pub api: bool,
}

/// What the project needs before it can be served.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildRequirements {
    pub build_step: bool,
    pub compilation: bool,
    pub bundling: bool,
    pub optimization: bool,
}

/// Runtime features detected from file names and content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialFeatures {
    pub ssr: bool,
    pub spa: bool,
    pub pwa: bool,
    pub api: bool,
    pub database: bool,
    pub realtime: bool,
}

/// Structured summary of a set of project files.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectAnalysis {
    pub project_type: ProjectType,
    /// Sum of all file sizes.
    pub file_size_bytes: u64,
    /// Number of files analyzed.
    pub file_count: usize,
    pub dependencies: Dependencies,
    pub build_requirements: BuildRequirements,
    pub special_features: SpecialFeatures,
}

impl ProjectAnalysis {
    /// Total size in megabytes.
    pub fn file_size_mb(&self) -> f64 {
        bytes_to_mb(self.file_size_bytes)
    }
}
