//! Platform scoring for deployment suitability.

use crate::config::ScoringWeights;
use deploypick_schema::{
    PlatformProfile, ProjectAnalysis, ProjectType, ScoreRule, ScoreTerm, ScoredPlatform,
};
use tracing::debug;

/// Platforms must list this capability to earn the API, database and
/// realtime bonuses.
pub const FULLSTACK_FEATURE: &str = "fullstack";

/// Round to the nearest integer, halves toward positive infinity.
fn round_score(total: f64) -> i64 {
    (total + 0.5).floor() as i64
}

/// Score one platform for one project.
///
/// Pure function of its inputs. Every rule that fires is recorded in the
/// breakdown; the score is the rounded sum of the breakdown.
pub fn score_platform(
    analysis: &ProjectAnalysis,
    platform: &PlatformProfile,
    weights: &ScoringWeights,
) -> ScoredPlatform {
    let mut breakdown = Vec::new();
    let mut add = |rule: ScoreRule, points: f64| breakdown.push(ScoreTerm { rule, points });

    add(
        ScoreRule::Base,
        f64::from(platform.speed_rating) * weights.speed
            + f64::from(platform.reliability_rating) * weights.reliability
            + f64::from(platform.ease_rating) * weights.ease,
    );

    // An unclassified project matches nothing, even a catalog entry named "unknown".
    if analysis.project_type != ProjectType::Unknown
        && platform.supports(analysis.project_type.as_str())
    {
        add(ScoreRule::ProjectTypeMatch, weights.project_type_match);
    }

    let size_mb = analysis.file_size_mb();
    if size_mb <= platform.max_file_size_mb {
        add(ScoreRule::SizeWithinLimit, weights.size_within_limit);
    } else {
        add(ScoreRule::SizeOverLimit, weights.size_over_limit);
    }

    // Rewards the slower pipeline when a build exists; kept as observed.
    if analysis.build_requirements.build_step
        && platform.build_time_seconds > weights.slow_build_threshold_seconds
    {
        add(ScoreRule::SlowBuildPipeline, weights.slow_build_pipeline);
    }

    let fullstack = platform.supports(FULLSTACK_FEATURE);
    let features = &analysis.special_features;
    if fullstack && features.api {
        add(ScoreRule::FullstackApi, weights.fullstack_api);
    }
    if fullstack && features.database {
        add(ScoreRule::FullstackDatabase, weights.fullstack_database);
    }
    if fullstack && features.realtime {
        add(ScoreRule::FullstackRealtime, weights.fullstack_realtime);
    }

    if size_mb <= weights.free_tier_threshold_mb && platform.pricing_free {
        add(ScoreRule::FreeTier, weights.free_tier);
    }

    let total: f64 = breakdown.iter().map(|t| t.points).sum();
    let score = round_score(total);
    debug!("Scored {}: {} ({:.2} before rounding)", platform.key, score, total);

    ScoredPlatform {
        profile: platform.clone(),
        score,
        breakdown,
    }
}

/// Score every platform and rank them, best first.
///
/// The sort is stable, so equal scores keep catalog order.
pub fn score_with(
    analysis: &ProjectAnalysis,
    catalog: &[PlatformProfile],
    weights: &ScoringWeights,
) -> Vec<ScoredPlatform> {
    let mut scored: Vec<ScoredPlatform> = catalog
        .iter()
        .map(|platform| score_platform(analysis, platform, weights))
        .collect();
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored
}

/// Score and rank with the default weights.
pub fn score(analysis: &ProjectAnalysis, catalog: &[PlatformProfile]) -> Vec<ScoredPlatform> {
    score_with(analysis, catalog, &ScoringWeights::default())
}
