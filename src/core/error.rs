use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// The four numeric dimensions of a compatibility result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreField {
    Global,
    Love,
    Friendship,
    Carnal,
}

impl ScoreField {
    /// Validation order used by the parser
    pub const ALL: [ScoreField; 4] = [
        ScoreField::Global,
        ScoreField::Love,
        ScoreField::Friendship,
        ScoreField::Carnal,
    ];

    /// JSON key for this dimension
    pub fn key(self) -> &'static str {
        match self {
            ScoreField::Global => "global",
            ScoreField::Love => "love",
            ScoreField::Friendship => "friendship",
            ScoreField::Carnal => "carnal",
        }
    }
}

impl fmt::Display for ScoreField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Failures at the LLM provider boundary
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("provider returned error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("provider did not answer within {0:?}")]
    Timeout(std::time::Duration),

    #[error("provider returned no completion text")]
    EmptyCompletion,

    #[error("invalid provider envelope: {0}")]
    InvalidEnvelope(String),
}

/// Errors produced while evaluating the compatibility of two profiles
#[derive(Debug, Error)]
pub enum CompatibilityError {
    #[error("invalid argument: {0}")]
    Argument(String),

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("malformed model response: {0}")]
    MalformedResponse(String),

    #[error("model response is missing field `{0}`")]
    MissingField(&'static str),

    #[error("score `{field}` must be an integer in [0, 100], got {value}")]
    OutOfRangeScore { field: ScoreField, value: String },

    #[error("model response has an empty insight")]
    EmptyInsight,
}

impl CompatibilityError {
    /// Whether a caller-level retry with the same prompt can reasonably succeed
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            CompatibilityError::Provider(_) | CompatibilityError::MalformedResponse(_)
        )
    }

    /// Whether the model answered with JSON that broke the result schema
    pub fn is_validation_failure(&self) -> bool {
        matches!(
            self,
            CompatibilityError::MissingField(_)
                | CompatibilityError::OutOfRangeScore { .. }
                | CompatibilityError::EmptyInsight
        )
    }

    /// Short machine-readable kind, used in HTTP error bodies and logs
    pub fn kind(&self) -> &'static str {
        match self {
            CompatibilityError::Argument(_) => "argument_error",
            CompatibilityError::Provider(ProviderError::Timeout(_)) => "provider_timeout",
            CompatibilityError::Provider(_) => "provider_error",
            CompatibilityError::MalformedResponse(_) => "malformed_response",
            CompatibilityError::MissingField(_) => "missing_field",
            CompatibilityError::OutOfRangeScore { .. } => "out_of_range_score",
            CompatibilityError::EmptyInsight => "empty_insight",
        }
    }
}
