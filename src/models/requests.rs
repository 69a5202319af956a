use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{CandidateProfile, InteractionHistory, Preferences, SeekerContext};

/// Request to score a candidate pool
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ScoreMatchesRequest {
    pub seeker: SeekerContext,
    pub preferences: Preferences,
    #[serde(default)]
    pub candidates: Vec<CandidateProfile>,
    #[serde(default)]
    pub history: Option<InteractionHistory>,
    #[validate(range(max = 100))]
    #[serde(rename = "minScore")]
    pub min_score: Option<u8>,
    #[validate(range(min = 1, max = 100))]
    pub limit: Option<u16>,
    #[serde(rename = "minResults")]
    pub min_results: Option<usize>,
}
