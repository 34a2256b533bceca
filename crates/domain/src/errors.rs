//! Error types used throughout the timesheet core

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for workgraph operations
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "detail")]
pub enum WorkgraphError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// State-machine violation. These indicate a logic bug in the caller, not
    /// a data-quality issue, and are the one category meant to fail loudly.
    #[error("Invalid transition: {action} is not allowed while {state}")]
    InvalidTransition { state: String, action: String },

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for workgraph operations
pub type Result<T> = std::result::Result<T, WorkgraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_transition_names_state_and_action() {
        let err = WorkgraphError::InvalidTransition {
            state: "approved".to_string(),
            action: "approve".to_string(),
        };

        assert_eq!(err.to_string(), "Invalid transition: approve is not allowed while approved");
    }

    #[test]
    fn test_error_serialization_round_trip() {
        let err = WorkgraphError::NotFound("entry abc".to_string());

        let json = serde_json::to_string(&err).unwrap();
        let back: WorkgraphError = serde_json::from_str(&json).unwrap();

        assert!(matches!(back, WorkgraphError::NotFound(msg) if msg == "entry abc"));
    }
}
