//! Recommendation output and request envelopes.

use crate::platform::ScoredPlatform;
use crate::project::{ProjectAnalysis, ProjectFile};
use deploypick_common::Timestamp;
use serde::{Deserialize, Serialize};

/// Version of the report envelope written by the CLI.
pub const REPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Result of one selection call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub analysis: ProjectAnalysis,
    /// Top-ranked platforms, best first.
    pub recommendations: Vec<ScoredPlatform>,
    /// `None` when the catalog is empty; serialized as `null`.
    pub best_platform: Option<ScoredPlatform>,
}

/// Recommendation wrapped with report metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationReport {
    pub schema_version: String,
    pub generated_at: Timestamp,
    pub recommendation: Recommendation,
}

impl RecommendationReport {
    pub fn new(recommendation: Recommendation) -> Self {
        Self {
            schema_version: REPORT_SCHEMA_VERSION.to_string(),
            generated_at: Timestamp::now(),
            recommendation,
        }
    }
}

/// Body of `POST /analyze-project`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyzeProjectRequest {
    pub files: Vec<ProjectFile>,
}

/// A file list on disk: a bare array or a request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FileListDocument {
    List(Vec<ProjectFile>),
    Request(AnalyzeProjectRequest),
}

impl FileListDocument {
    pub fn into_files(self) -> Vec<ProjectFile> {
        match self {
            FileListDocument::List(files) => files,
            FileListDocument::Request(request) => request.files,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_best_platform_serializes_as_null() {
        let recommendation = Recommendation {
            analysis: ProjectAnalysis::default(),
            recommendations: vec![],
            best_platform: None,
        };

        let value = serde_json::to_value(&recommendation).unwrap();
        assert!(value["bestPlatform"].is_null());
        assert_eq!(value["recommendations"], serde_json::json!([]));
        assert_eq!(value["analysis"]["projectType"], "unknown");
    }

    #[test]
    fn test_report_envelope() {
        let report = RecommendationReport::new(Recommendation {
            analysis: ProjectAnalysis::default(),
            recommendations: vec![],
            best_platform: None,
        });

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["schemaVersion"], REPORT_SCHEMA_VERSION);
        assert!(value["generatedAt"].is_string());
        assert!(value["recommendation"]["bestPlatform"].is_null());
    }

    #[test]
    fn test_file_list_document_shapes() {
        let bare: FileListDocument =
            serde_json::from_str(r#"[{"name": "index.html", "size": 10}]"#).unwrap();
        assert_eq!(bare.into_files(), vec![ProjectFile::new("index.html", 10)]);

        let wrapped: FileListDocument = serde_json::from_str(
            r#"{"files": [{"name": "app.py", "size": 3, "content": "print(1)"}]}"#,
        )
        .unwrap();
        assert_eq!(
            wrapped.into_files(),
            vec![ProjectFile::with_content("app.py", 3, "print(1)")]
        );
    }
}
