//! Application configuration
//!
//! Loaded from an optional JSON file; individual values can be overridden
//! from the command line.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RosterError};

/// Default auto-dismiss delay for startup alerts, in milliseconds
pub const DEFAULT_ALERT_DISMISS_MS: u64 = 5000;

/// Main configuration structure loaded from rosterbox.json
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct AppConfig {
    /// Suggestion endpoint for student names
    pub student_endpoint: String,

    /// Suggestion endpoint for teacher names
    pub teacher_endpoint: String,

    /// Delay before startup alerts are dismissed, in milliseconds
    pub alert_dismiss_ms: u64,

    /// Maximum number of suggestion rows shown per field
    pub max_suggestions: usize,

    /// Per-request timeout for the suggestion endpoints, in milliseconds
    pub request_timeout_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            student_endpoint: "http://localhost:8000/search_student_name".to_string(),
            teacher_endpoint: "http://localhost:8000/search_teacher_name".to_string(),
            alert_dismiss_ms: DEFAULT_ALERT_DISMISS_MS,
            max_suggestions: 8,
            request_timeout_ms: 5000,
        }
    }
}

impl AppConfig {
    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| RosterError::ConfigRead(path.display().to_string(), e))?;
        let config: AppConfig = serde_json::from_str(&content)
            .map_err(|e| RosterError::ConfigParse(path.display().to_string(), e))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_roster_service() {
        let config = AppConfig::default();
        assert!(config.student_endpoint.ends_with("/search_student_name"));
        assert!(config.teacher_endpoint.ends_with("/search_teacher_name"));
        assert_eq!(config.alert_dismiss_ms, 5000);
    }

    #[test]
    fn partial_file_falls_back_to_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{"max_suggestions": 3}"#).expect("valid json");
        assert_eq!(config.max_suggestions, 3);
        assert_eq!(config.alert_dismiss_ms, DEFAULT_ALERT_DISMISS_MS);
    }
}
