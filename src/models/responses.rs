use serde::{Deserialize, Serialize};
use crate::models::domain::ScoredCandidate;

/// Response for the scoring endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreMatchesResponse {
    #[serde(rename = "requestId")]
    pub request_id: String,
    pub matches: Vec<ScoredCandidate>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
    #[serde(rename = "fallbackApplied")]
    pub fallback_applied: bool,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
