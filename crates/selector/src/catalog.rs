//! Platform catalog: built-in profiles and catalog file loading.

use crate::document::read_document;
use deploypick_common::{Error, Result};
use deploypick_schema::{validate_catalog, CatalogDocument, PlatformProfile};
use std::path::Path;
use tracing::{debug, warn};

fn profile(
    key: &str,
    name: &str,
    supported_features: &[&str],
    max_file_size_mb: f64,
    (speed_rating, reliability_rating, ease_rating): (u8, u8, u8),
    build_time_seconds: u32,
    pricing_free: bool,
) -> PlatformProfile {
    PlatformProfile {
        key: key.to_string(),
        name: name.to_string(),
        supported_features: supported_features.iter().map(|f| f.to_string()).collect(),
        max_file_size_mb,
        speed_rating,
        reliability_rating,
        ease_rating,
        build_time_seconds,
        pricing_free,
    }
}

/// The six built-in platforms, in declaration order.
///
/// Declaration order is also the tie-break order when scores are equal.
pub fn builtin_catalog() -> Vec<PlatformProfile> {
    vec![
        profile(
            "vercel",
            "Vercel",
            &["nextjs", "react", "vite", "static", "serverless"],
            100.0,
            (10, 9, 10),
            60,
            true,
        ),
        profile(
            "netlify",
            "Netlify",
            &["static", "react", "vite", "nextjs", "jamstack", "serverless"],
            100.0,
            (9, 9, 9),
            90,
            true,
        ),
        profile(
            "railway",
            "Railway",
            &["nodejs", "python", "php", "ruby", "docker", "database", "fullstack"],
            1024.0,
            (8, 8, 8),
            180,
            false,
        ),
        profile(
            "heroku",
            "Heroku",
            &["nodejs", "python", "php", "ruby", "database", "fullstack"],
            500.0,
            (7, 8, 7),
            400,
            false,
        ),
        profile(
            "firebase",
            "Firebase Hosting",
            &["static", "react", "vite", "spa", "pwa", "realtime"],
            1024.0,
            (8, 9, 8),
            120,
            true,
        ),
        profile(
            "aws",
            "AWS Amplify",
            &[
                "nodejs", "python", "php", "ruby", "static", "react", "vite", "nextjs", "docker",
                "database", "fullstack",
            ],
            10240.0,
            (9, 10, 5),
            600,
            false,
        ),
    ]
}

/// Load a catalog from a YAML or JSON file.
///
/// The document is checked against the catalog schema and for duplicate
/// keys before any profile is returned.
pub fn load_catalog(path: &Path) -> Result<Vec<PlatformProfile>> {
    let value: serde_json::Value = read_document(path)?;

    let validation =
        validate_catalog(&value).map_err(|e| Error::SchemaValidation(e.to_string()))?;
    for warning in &validation.warnings {
        warn!("{}: {}", path.display(), warning);
    }
    if !validation.valid {
        return Err(Error::InvalidCatalog(validation.messages()));
    }

    let profiles = serde_json::from_value::<CatalogDocument>(value)?.into_profiles();
    debug!("Loaded {} platforms from {}", profiles.len(), path.display());
    Ok(profiles)
}
