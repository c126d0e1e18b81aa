use serde::{Deserialize, Serialize};
use crate::models::domain::CompatibilityResult;

/// Response for the evaluate endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluateResponse {
    pub evaluation_id: String,
    pub result: CompatibilityResult,
    pub model: String,
    pub evaluated_at: chrono::DateTime<chrono::Utc>,
}

/// Response for the prompt preview endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptResponse {
    pub prompt: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub model: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
