//! Building project file lists from a directory or a file list document.

use deploypick_common::{Error, Result};
use deploypick_schema::{validate_project_files, FileListDocument, ProjectFile};
use deploypick_selector::document::read_document;
use std::path::Path;
use tracing::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

/// Directories that hold dependencies or build output, not project sources.
pub const DEFAULT_SKIP_DIRS: &[&str] = &[
    "node_modules",
    ".git",
    "target",
    "dist",
    ".next",
    "__pycache__",
    "venv",
    ".venv",
];

/// Largest file whose content is read for feature detection.
pub const DEFAULT_MAX_CONTENT_BYTES: u64 = 256 * 1024;

/// Scanner configuration.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Directory names skipped at any depth.
    pub skip_dirs: Vec<String>,
    /// Files larger than this are listed without content.
    pub max_content_bytes: u64,
    /// Read text content at all.
    pub read_content: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            skip_dirs: DEFAULT_SKIP_DIRS.iter().map(|d| d.to_string()).collect(),
            max_content_bytes: DEFAULT_MAX_CONTENT_BYTES,
            read_content: true,
        }
    }
}

impl ScanOptions {
    fn is_skipped(&self, entry: &DirEntry) -> bool {
        entry.depth() > 0
            && entry.file_type().is_dir()
            && self
                .skip_dirs
                .iter()
                .any(|d| entry.file_name().to_string_lossy() == d.as_str())
    }
}

/// Relative path with `/` separators.
fn relative_name(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

fn read_text(path: &Path, size: u64, options: &ScanOptions) -> Option<String> {
    if !options.read_content || size > options.max_content_bytes {
        return None;
    }
    match std::fs::read(path) {
        Ok(bytes) => String::from_utf8(bytes).ok(),
        Err(e) => {
            warn!("Could not read {}: {}", path.display(), e);
            None
        }
    }
}

/// Walk a directory and describe every regular file in it.
///
/// Unreadable entries are logged and skipped. Output is sorted by path.
pub fn scan_directory(root: &Path, options: &ScanOptions) -> Result<Vec<ProjectFile>> {
    if !root.is_dir() {
        return Err(Error::Scan {
            path: root.to_path_buf(),
            reason: "not a directory".to_string(),
        });
    }

    info!("Scanning {}", root.display());
    let mut files = Vec::new();

    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !options.is_skipped(e));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping entry: {}", e);
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let size = match entry.metadata() {
            Ok(metadata) => metadata.len(),
            Err(e) => {
                warn!("Skipping {}: {}", entry.path().display(), e);
                continue;
            }
        };

        files.push(ProjectFile {
            name: relative_name(root, entry.path()),
            size,
            content: read_text(entry.path(), size, options),
        });
    }

    files.sort_by(|a, b| a.name.cmp(&b.name));
    debug!("Scanned {} files under {}", files.len(), root.display());
    Ok(files)
}

/// Load a file list from a YAML/JSON document.
///
/// Accepts a bare array or a `{ "files": [...] }` request body, and checks it
/// against the project files schema first.
pub fn load_file_list(path: &Path) -> Result<Vec<ProjectFile>> {
    let value: serde_json::Value = read_document(path)?;

    let validation =
        validate_project_files(&value).map_err(|e| Error::SchemaValidation(e.to_string()))?;
    if !validation.valid {
        return Err(Error::SchemaValidation(validation.messages().join("; ")));
    }

    let files = serde_json::from_value::<FileListDocument>(value)?.into_files();
    debug!("Loaded {} files from {}", files.len(), path.display());
    Ok(files)
}
