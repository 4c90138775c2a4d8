//! Error types for RosterBox
//!
//! Covers configuration loading, the suggestion endpoints, and GUI startup.

use thiserror::Error;

/// Main error type for RosterBox operations
#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Failed to read config file '{0}': {1}")]
    ConfigRead(String, std::io::Error),

    #[error("Failed to parse config file '{0}': {1}")]
    ConfigParse(String, serde_json::Error),

    #[error("Request to '{0}' failed: {1}")]
    Transport(String, reqwest::Error),

    #[error("Endpoint '{endpoint}' returned HTTP {status}: {body}")]
    EndpointStatus {
        endpoint: String,
        status: u16,
        body: String,
    },

    #[error("Failed to decode suggestions from '{endpoint}': {reason} (body: {body})")]
    Decode {
        endpoint: String,
        reason: serde_json::Error,
        body: String,
    },

    #[error("GUI error: {0}")]
    Gui(String),
}

/// Result type alias for RosterBox operations
pub type Result<T> = std::result::Result<T, RosterError>;

impl RosterError {
    /// Check if this error is recoverable (the app keeps running and only
    /// the current suggestion fetch is lost)
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            RosterError::Transport(_, _)
                | RosterError::EndpointStatus { .. }
                | RosterError::Decode { .. }
        )
    }
}
