use thiserror::Error;

use crate::types::FailureReason;

/// Result type for decision-calc API client operations
pub type Result<T> = std::result::Result<T, DecisionCalcError>;

/// Errors that can occur when using the decision-calc API client
#[derive(Error, Debug)]
pub enum DecisionCalcError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Invalid URL provided
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The calculator refused the inputs (422 with a tagged reason)
    #[error("calculator failure ({reason:?}): {details}")]
    Solve {
        reason: FailureReason,
        details: String,
    },

    /// API returned a non-422 error response
    #[error("API error: {0}")]
    ApiError(String),

    /// Failed to parse response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Invalid request configuration
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Authentication failed
    #[error("Authentication failed")]
    AuthenticationFailed,
}
