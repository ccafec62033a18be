//! Error types for the size recommender.
//!
//! Validation happens once, at the request boundary. After a request has been
//! validated the pipeline is total, so `RecommendError::Internal` only exists to
//! surface arithmetic that escaped the range clamps (non-finite output).

use thiserror::Error;

/// Caller errors detected before any computation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("invalid value for {field}: {value} (must be a positive number)")]
    InvalidNumber { field: &'static str, value: f64 },

    #[error("invalid value for {field}: '{value}' (expected one of: {expected})")]
    InvalidChoice {
        field: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("size chart has {count} sizes, more than the allowed {max}")]
    TooManySizes { count: usize, max: usize },
}

/// Errors returned by the recommendation pipeline.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecommendError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{message}")]
    Internal { message: String, details: String },
}

impl RecommendError {
    pub fn internal(message: impl Into<String>, details: impl Into<String>) -> Self {
        RecommendError::Internal {
            message: message.into(),
            details: details.into(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, RecommendError::Validation(_))
    }
}
