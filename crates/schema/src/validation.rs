//! Catalog and file list validation.

use crate::platform::PlatformProfile;
use crate::schema;
use jsonschema::JSONSchema;
use serde_json::Value;
use std::collections::HashSet;
use thiserror::Error;

/// Validation error type.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Schema validation failed: {0}")]
    SchemaError(String),

    #[error("Duplicate platform key: {0}")]
    DuplicateKey(String),

    #[error("Platform has an empty key")]
    EmptyKey,

    #[error("{key}: {field} must be between 1 and 10, got {value}")]
    RatingOutOfRange {
        key: String,
        field: &'static str,
        value: u8,
    },

    #[error("{key}: maxFileSizeMB must be a non-negative number, got {value}")]
    InvalidSizeLimit { key: String, value: f64 },

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result of a validation pass.
#[derive(Debug)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.valid = false;
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: String) {
        self.warnings.push(warning);
    }

    /// Error messages, one per problem.
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(|e| e.to_string()).collect()
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_against(
    schema_value: &Value,
    instance: &Value,
) -> Result<ValidationResult, ValidationError> {
    let mut result = ValidationResult::new();

    let compiled = JSONSchema::compile(schema_value)
        .map_err(|e| ValidationError::SchemaError(e.to_string()))?;

    if let Err(errors) = compiled.validate(instance) {
        for error in errors {
            result.add_error(ValidationError::SchemaError(format!(
                "{} at {}",
                error, error.instance_path
            )));
        }
    }

    Ok(result)
}

/// Strip the `{ "<field>": [...] }` wrapper if present.
fn unwrap_list<'a>(value: &'a Value, field: &str) -> &'a Value {
    match value.get(field) {
        Some(inner) if value.is_object() => inner,
        _ => value,
    }
}

/// Validate a catalog document against the JSON schema.
///
/// Accepts both the bare list and the `{ "platforms": [...] }` form.
pub fn validate_catalog(catalog: &Value) -> Result<ValidationResult, ValidationError> {
    let list = unwrap_list(catalog, "platforms");
    let mut result = validate_against(&schema::catalog_schema(), list)?;

    if result.valid {
        let profiles: Vec<PlatformProfile> = serde_json::from_value(list.clone())?;
        for error in validate_profiles(&profiles).errors {
            result.add_error(error);
        }
    }

    if list.as_array().is_some_and(|a| a.is_empty()) {
        result.add_warning("Catalog is empty; no platform can be recommended".to_string());
    }

    Ok(result)
}

/// Validate a project file list against the JSON schema.
///
/// Accepts both the bare list and the `{ "files": [...] }` request body.
pub fn validate_project_files(files: &Value) -> Result<ValidationResult, ValidationError> {
    validate_against(&schema::project_files_schema(), unwrap_list(files, "files"))
}

/// Semantic checks the schema cannot express: unique keys and rating ranges.
pub fn validate_profiles(profiles: &[PlatformProfile]) -> ValidationResult {
    let mut result = ValidationResult::new();
    let mut seen = HashSet::new();

    for profile in profiles {
        if profile.key.is_empty() {
            result.add_error(ValidationError::EmptyKey);
        } else if !seen.insert(profile.key.as_str()) {
            result.add_error(ValidationError::DuplicateKey(profile.key.clone()));
        }

        for (field, value) in [
            ("speedRating", profile.speed_rating),
            ("reliabilityRating", profile.reliability_rating),
            ("easeRating", profile.ease_rating),
        ] {
            if !(1..=10).contains(&value) {
                result.add_error(ValidationError::RatingOutOfRange {
                    key: profile.key.clone(),
                    field,
                    value,
                });
            }
        }

        if profile.max_file_size_mb.is_nan() || profile.max_file_size_mb < 0.0 {
            result.add_error(ValidationError::InvalidSizeLimit {
                key: profile.key.clone(),
                value: profile.max_file_size_mb,
            });
        }

        if profile.supported_features.is_empty() {
            result.add_warning(format!("{}: no supported features listed", profile.key));
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn platform(key: &str) -> Value {
        json!({
            "key": key,
            "name": key,
            "supportedFeatures": ["static"],
            "maxFileSizeMB": 100,
            "speedRating": 8,
            "reliabilityRating": 8,
            "easeRating": 8,
            "buildTimeSeconds": 60,
            "pricingFree": true
        })
    }

    #[test]
    fn test_validate_catalog_minimal() {
        let result = validate_catalog(&json!([platform("a"), platform("b")])).unwrap();
        assert!(result.valid, "Errors: {:?}", result.errors);
    }

    #[test]
    fn test_validate_catalog_wrapped() {
        let result = validate_catalog(&json!({ "platforms": [platform("a")] })).unwrap();
        assert!(result.valid, "Errors: {:?}", result.errors);
    }

    #[test]
    fn test_validate_catalog_missing_field() {
        let result = validate_catalog(&json!([{ "key": "a" }])).unwrap();
        assert!(!result.valid);
    }

    #[test]
    fn test_validate_catalog_rating_out_of_range() {
        let mut p = platform("a");
        p["speedRating"] = json!(11);
        let result = validate_catalog(&json!([p])).unwrap();
        assert!(!result.valid);
    }

    #[test]
    fn test_validate_catalog_duplicate_keys() {
        let result = validate_catalog(&json!([platform("a"), platform("a")])).unwrap();
        assert!(!result.valid);
        assert!(matches!(result.errors[0], ValidationError::DuplicateKey(ref k) if k == "a"));
    }

    #[test]
    fn test_validate_empty_catalog_warns() {
        let result = validate_catalog(&json!([])).unwrap();
        assert!(result.valid);
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn test_validate_profiles_rating_zero() {
        let mut profile: PlatformProfile = serde_json::from_value(platform("a")).unwrap();
        profile.ease_rating = 0;
        let result = validate_profiles(&[profile]);
        assert!(!result.valid);
        assert_eq!(
            result.messages(),
            vec!["a: easeRating must be between 1 and 10, got 0".to_string()]
        );
    }

    #[test]
    fn test_validate_project_files() {
        let ok = validate_project_files(&json!({
            "files": [{ "name": "package.json", "size": 1000 }]
        }))
        .unwrap();
        assert!(ok.valid, "Errors: {:?}", ok.errors);

        let bad = validate_project_files(&json!([{ "name": "x", "size": -1 }])).unwrap();
        assert!(!bad.valid);
    }
}
