//! Timestamp utilities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A wrapper around DateTime<Utc> with consistent serialization.
///
/// Used to stamp recommendation reports; the selector itself is
/// time-independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Create a new timestamp from the current time.
    pub fn now() -> Self {
        Timestamp(Utc::now())
    }

    /// Format as ISO 8601 string.
    pub fn to_iso8601(&self) -> String {
        self.0.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_iso8601())
    }
}
