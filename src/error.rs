//! Custom error types for the Savr demo
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::form::ValidationError;

/// The main error type for Savr demo operations
#[derive(Error, Debug)]
pub enum SavrError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// A required form field is missing or invalid
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A command-line or form value could not be understood
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The response service rejected a request
    #[error("Request to '{endpoint}' failed: {reason}")]
    Fetch { endpoint: String, reason: String },

    /// A payload violates one of its invariants
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    /// A step operation was attempted from a state that does not allow it
    #[error("Invalid transition: {0}")]
    InvalidTransition(String),

    /// The wizard session has been closed
    #[error("Session is closed")]
    SessionClosed,

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl SavrError {
    /// Create a fetch error for an endpoint
    pub fn fetch(endpoint: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Fetch {
            endpoint: endpoint.into(),
            reason: reason.into(),
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if the failed operation can be attempted again
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Fetch { .. })
    }
}

impl From<std::io::Error> for SavrError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SavrError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for Savr demo operations
pub type SavrResult<T> = Result<T, SavrError>;
