//! Text rendering for the CLI.

use deploypick_common::units::format_size;
use deploypick_schema::{PlatformProfile, ProjectAnalysis, Recommendation};
use std::fmt::{self, Write};

fn flags(pairs: &[(&str, bool)]) -> String {
    let set: Vec<&str> = pairs.iter().filter(|(_, on)| *on).map(|(n, _)| *n).collect();
    if set.is_empty() {
        "none".to_string()
    } else {
        set.join(", ")
    }
}

fn render_analysis(out: &mut impl Write, analysis: &ProjectAnalysis) -> fmt::Result {
    let deps = &analysis.dependencies;
    let build = &analysis.build_requirements;
    let features = &analysis.special_features;

    writeln!(out, "Project:")?;
    writeln!(out, "  Type:         {}", analysis.project_type)?;
    writeln!(
        out,
        "  Size:         {} in {} files",
        format_size(analysis.file_size_bytes),
        analysis.file_count
    )?;
    writeln!(
        out,
        "  Dependencies: {}",
        flags(&[
            ("node", deps.node),
            ("python", deps.python),
            ("php", deps.php),
            ("ruby", deps.ruby),
            ("docker", deps.docker),
            ("database", deps.database),
            ("api", deps.api),
        ])
    )?;
    writeln!(
        out,
        "  Build:        {}",
        flags(&[
            ("build step", build.build_step),
            ("compilation", build.compilation),
            ("bundling", build.bundling),
            ("optimization", build.optimization),
        ])
    )?;
    writeln!(
        out,
        "  Features:     {}",
        flags(&[
            ("ssr", features.ssr),
            ("spa", features.spa),
            ("pwa", features.pwa),
            ("api", features.api),
            ("database", features.database),
            ("realtime", features.realtime),
        ])
    )
}

/// Render a recommendation as a human-readable report.
pub fn render_recommendation(
    out: &mut impl Write,
    recommendation: &Recommendation,
) -> fmt::Result {
    writeln!(out, "=== Deployment Recommendation ===\n")?;
    render_analysis(out, &recommendation.analysis)?;
    writeln!(out)?;

    match &recommendation.best_platform {
        Some(best) => {
            writeln!(
                out,
                "Best platform: {} (score {})\n",
                best.profile.name, best.score
            )?;
        }
        None => {
            return writeln!(out, "No platform available: the catalog is empty.");
        }
    }

    writeln!(out, "{:-<60}", "")?;
    writeln!(out, "{:<4} {:<24} {:>8}  {}", "#", "Platform", "Score", "Why")?;
    writeln!(out, "{:-<60}", "")?;
    for (rank, scored) in recommendation.recommendations.iter().enumerate() {
        let reasons: Vec<String> = scored
            .breakdown
            .iter()
            .map(|t| format!("{} ({:+.1})", t.rule, t.points))
            .collect();
        writeln!(
            out,
            "{:<4} {:<24} {:>8}  {}",
            rank + 1,
            scored.profile.name,
            scored.score,
            reasons.join(", ")
        )?;
    }
    writeln!(out, "{:-<60}", "")
}

/// Render a catalog as a table.
pub fn render_catalog(out: &mut impl Write, catalog: &[PlatformProfile]) -> fmt::Result {
    writeln!(
        out,
        "{:<10} {:<18} {:>9} {:>5} {:>5} {:>5} {:>7} {:>5}  {}",
        "Key", "Name", "Max MB", "Speed", "Rel", "Ease", "Build s", "Free", "Supports"
    )?;
    writeln!(out, "{:-<100}", "")?;
    for p in catalog {
        writeln!(
            out,
            "{:<10} {:<18} {:>9} {:>5} {:>5} {:>5} {:>7} {:>5}  {}",
            p.key,
            p.name,
            p.max_file_size_mb,
            p.speed_rating,
            p.reliability_rating,
            p.ease_rating,
            p.build_time_seconds,
            if p.pricing_free { "yes" } else { "no" },
            p.supported_features.join(", ")
        )?;
    }
    Ok(())
}
