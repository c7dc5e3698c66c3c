//! Platform catalog types and scoring output.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Static descriptor of a hosting platform's capabilities and cost tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformProfile {
    /// Stable identifier, e.g. `vercel`.
    pub key: String,
    /// Display name.
    pub name: String,
    /// Project types and capabilities (`fullstack`, `static`, ...) the platform handles.
    pub supported_features: Vec<String>,
    /// Largest deployable project, in megabytes.
    #[serde(rename = "maxFileSizeMB")]
    pub max_file_size_mb: f64,
    /// 1-10.
    pub speed_rating: u8,
    /// 1-10.
    pub reliability_rating: u8,
    /// 1-10.
    pub ease_rating: u8,
    /// Typical build pipeline duration.
    pub build_time_seconds: u32,
    /// Whether a free tier exists.
    pub pricing_free: bool,
}

impl PlatformProfile {
    /// Check whether the platform lists a feature (case-insensitive).
    pub fn supports(&self, feature: &str) -> bool {
        self.supported_features
            .iter()
            .any(|f| f.eq_ignore_ascii_case(feature))
    }
}

/// A catalog file: either a bare list of profiles or `{ "platforms": [...] }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CatalogDocument {
    List(Vec<PlatformProfile>),
    Wrapped { platforms: Vec<PlatformProfile> },
}

impl CatalogDocument {
    pub fn into_profiles(self) -> Vec<PlatformProfile> {
        match self {
            CatalogDocument::List(platforms) | CatalogDocument::Wrapped { platforms } => platforms,
        }
    }
}

/// A scoring rule that contributed to a platform's score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreRule {
    /// Weighted speed, reliability and ease ratings.
    Base,
    ProjectTypeMatch,
    SizeWithinLimit,
    SizeOverLimit,
    SlowBuildPipeline,
    FullstackApi,
    FullstackDatabase,
    FullstackRealtime,
    FreeTier,
}

impl fmt::Display for ScoreRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ScoreRule::Base => "base ratings",
            ScoreRule::ProjectTypeMatch => "supports project type",
            ScoreRule::SizeWithinLimit => "within size limit",
            ScoreRule::SizeOverLimit => "exceeds size limit",
            ScoreRule::SlowBuildPipeline => "thorough build pipeline",
            ScoreRule::FullstackApi => "full-stack API hosting",
            ScoreRule::FullstackDatabase => "full-stack database hosting",
            ScoreRule::FullstackRealtime => "full-stack realtime hosting",
            ScoreRule::FreeTier => "free tier for small project",
        })
    }
}

/// One applied rule and the points it contributed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreTerm {
    pub rule: ScoreRule,
    pub points: f64,
}

/// A platform annotated with its suitability score for one project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredPlatform {
    #[serde(flatten)]
    pub profile: PlatformProfile,
    /// Rounded total; negative when penalties dominate.
    pub score: i64,
    /// Every rule that fired, in evaluation order.
    pub breakdown: Vec<ScoreTerm>,
}

impl ScoredPlatform {
    pub fn key(&self) -> &str {
        &self.profile.key
    }

    /// Points contributed by a rule, if it fired.
    pub fn points_for(&self, rule: ScoreRule) -> Option<f64> {
        self.breakdown
            .iter()
            .find(|t| t.rule == rule)
            .map(|t| t.points)
    }
}
