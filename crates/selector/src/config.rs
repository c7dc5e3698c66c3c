//! Selector configuration.

use crate::document::read_document;
use deploypick_common::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Number of platforms returned by a recommendation.
pub const DEFAULT_TOP_N: usize = 3;

/// Points and thresholds used by the platform scorer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    /// Multiplier for the platform's speed rating.
    pub speed: f64,
    /// Multiplier for the platform's reliability rating.
    pub reliability: f64,
    /// Multiplier for the platform's ease rating.
    pub ease: f64,
    pub project_type_match: f64,
    pub size_within_limit: f64,
    /// Applied instead of `size_within_limit`; negative.
    pub size_over_limit: f64,
    /// Bonus for platforms whose build takes longer than
    /// `slow_build_threshold_seconds` when the project has a build step.
    pub slow_build_pipeline: f64,
    pub slow_build_threshold_seconds: u32,
    pub fullstack_api: f64,
    pub fullstack_database: f64,
    pub fullstack_realtime: f64,
    pub free_tier: f64,
    /// Projects at or below this size get the free tier bonus.
    pub free_tier_threshold_mb: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            speed: 0.2,
            reliability: 0.2,
            ease: 0.15,
            project_type_match: 20.0,
            size_within_limit: 10.0,
            size_over_limit: -20.0,
            slow_build_pipeline: 5.0,
            slow_build_threshold_seconds: 300,
            fullstack_api: 15.0,
            fullstack_database: 10.0,
            fullstack_realtime: 10.0,
            free_tier: 10.0,
            free_tier_threshold_mb: 50.0,
        }
    }
}

/// Top-level selector configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    /// How many ranked platforms a recommendation carries.
    pub top_n: usize,
    pub weights: ScoringWeights,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            weights: ScoringWeights::default(),
        }
    }
}

impl SelectorConfig {
    /// Load from a YAML or JSON file. Missing fields take their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let config: SelectorConfig = read_document(path)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.top_n == 0 {
            return Err(Error::Config("top_n must be at least 1".to_string()));
        }
        if self.weights.free_tier_threshold_mb.is_nan() || self.weights.free_tier_threshold_mb < 0.0
        {
            return Err(Error::Config(
                "free_tier_threshold_mb must be a non-negative number".to_string(),
            ));
        }
        Ok(())
    }
}
