//! JSON schema definitions for catalog files and project file lists.

/// JSON Schema for a platform catalog (the list form).
pub const CATALOG_SCHEMA: &str = r#"{
  "$schema": "https://json-schema.org/draft/2020-12/schema",
  "$id": "https://deploypick.dev/schemas/catalog.json",
  "title": "Deploypick Platform Catalog",
  "type": "array",
  "items": {
    "type": "object",
    "required": [
      "key", "name", "supportedFeatures", "maxFileSizeMB", "speedRating",
      "reliabilityRating", "easeRating", "buildTimeSeconds", "pricingFree"
    ],
    "properties": {
      "key": { "type": "string", "minLength": 1 },
      "name": { "type": "string" },
      "supportedFeatures": {
        "type": "array",
        "items": { "type": "string" }
      },
      "maxFileSizeMB": { "type": "number", "minimum": 0 },
      "speedRating": { "type": "integer", "minimum": 1, "maximum": 10 },
      "reliabilityRating": { "type": "integer", "minimum": 1, "maximum": 10 },
      "easeRating": { "type": "integer", "minimum": 1, "maximum": 10 },
      "buildTimeSeconds": { "type": "integer", "minimum": 0 },
      "pricingFree": { "type": "boolean" }
    }
  }
}"#;

/// JSON Schema for a list of project files (the list form).
pub const PROJECT_FILES_SCHEMA: &str = r#"{
  "$schema": "https://json-schema.org/draft/2020-12/schema",
  "$id": "https://deploypick.dev/schemas/project-files.json",
  "title": "Deploypick Project Files",
  "type": "array",
  "items": {
    "type": "object",
    "required": ["name", "size"],
    "properties": {
      "name": { "type": "string" },
      "size": { "type": "integer", "minimum": 0 },
      "content": { "type": ["string", "null"] }
    }
  }
}"#;

/// Get the catalog schema as a parsed JSON value.
pub fn catalog_schema() -> serde_json::Value {
    serde_json::from_str(CATALOG_SCHEMA).expect("Invalid catalog schema")
}

/// Get the project files schema as a parsed JSON value.
pub fn project_files_schema() -> serde_json::Value {
    serde_json::from_str(PROJECT_FILES_SCHEMA).expect("Invalid project files schema")
}
