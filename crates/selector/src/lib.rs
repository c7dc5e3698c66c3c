//! Deploypick Selector - analyze project files and rank hosting platforms.
//!
//! The pipeline is synchronous and stateless: [`analysis::analyze`] turns a
//! file list into a [`ProjectAnalysis`], [`scoring::score_with`] ranks a
//! catalog against it, and [`Selector::recommend`] ties the two together.

pub mod analysis;
pub mod catalog;
pub mod config;
pub mod document;
mod features;
pub mod scoring;

pub use analysis::analyze;
pub use catalog::{builtin_catalog, load_catalog};
pub use config::{ScoringWeights, SelectorConfig};
pub use scoring::{score, score_with};

use deploypick_schema::{
    PlatformProfile, ProjectAnalysis, ProjectFile, Recommendation, ScoredPlatform,
};
use tracing::{debug, info};

/// Selection facade: analysis, scoring and top-N selection over one catalog.
#[derive(Debug, Clone)]
pub struct Selector {
    config: SelectorConfig,
    catalog: Vec<PlatformProfile>,
}

impl Selector {
    pub fn new(config: SelectorConfig, catalog: Vec<PlatformProfile>) -> Self {
        Self { config, catalog }
    }

    pub fn with_builtin_catalog(config: SelectorConfig) -> Self {
        Self::new(config, builtin_catalog())
    }

    pub fn config(&self) -> &SelectorConfig {
        &self.config
    }

    pub fn catalog(&self) -> &[PlatformProfile] {
        &self.catalog
    }

    pub fn analyze(&self, files: &[ProjectFile]) -> ProjectAnalysis {
        analyze(files)
    }

    /// Full ranking of the catalog, best first.
    pub fn rank(&self, analysis: &ProjectAnalysis) -> Vec<ScoredPlatform> {
        score_with(analysis, &self.catalog, &self.config.weights)
    }

    /// Analyze, rank and keep the top `config.top_n` platforms.
    ///
    /// `best_platform` is `None` only when the catalog is empty.
    pub fn recommend(&self, files: &[ProjectFile]) -> Recommendation {
        let analysis = self.analyze(files);
        let mut ranked = self.rank(&analysis);

        let best_platform = ranked.first().cloned();
        ranked.truncate(self.config.top_n);

        match &best_platform {
            Some(best) => info!(
                "Recommended {} (score {}) for {} project",
                best.profile.name, best.score, analysis.project_type
            ),
            None => debug!("Catalog is empty, no platform to recommend"),
        }

        Recommendation {
            analysis,
            recommendations: ranked,
            best_platform,
        }
    }
}

impl Default for Selector {
    fn default() -> Self {
        Self::with_builtin_catalog(SelectorConfig::default())
    }
}

/// Recommend platforms using the built-in catalog and default configuration.
pub fn recommend(files: &[ProjectFile]) -> Recommendation {
    Selector::default().recommend(files)
}
