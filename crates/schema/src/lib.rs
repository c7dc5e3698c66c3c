//! Data model and schema definitions for deploypick.
//!
//! This crate defines the project description handed to the selector,
//! the platform catalog format, and the recommendation output, together
//! with JSON schemas used to validate files and request bodies.

pub mod platform;
pub mod project;
pub mod recommendation;
pub mod schema;
pub mod validation;

pub use platform::{CatalogDocument, PlatformProfile, ScoreRule, ScoreTerm, ScoredPlatform};
pub use project::{
    BuildRequirements, Dependencies, ProjectAnalysis, ProjectFile, ProjectType, SpecialFeatures,
};
pub use recommendation::{
    AnalyzeProjectRequest, FileListDocument, Recommendation, RecommendationReport,
    REPORT_SCHEMA_VERSION,
};
pub use validation::{validate_catalog, validate_profiles, validate_project_files};
