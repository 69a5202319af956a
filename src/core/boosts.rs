//! Additive point adjustments applied on top of the weighted categories.

use crate::models::{CandidateProfile, InteractionHistory, ScoringWeights};

/// Behavioral boost from the seeker's interaction history
///
/// Awards the liked-occupation bonus when the candidate's occupation is one
/// the seeker has liked before. No history means no boost.
pub fn calculate_behavioral_boost(
    profile: &CandidateProfile,
    history: Option<&InteractionHistory>,
    weights: &ScoringWeights,
) -> f64 {
    let (Some(history), Some(occupation)) = (history, profile.occupation.as_deref()) else {
        return 0.0;
    };

    let boost = if history.liked_occupations.iter().any(|o| o == occupation) {
        weights.liked_occupation_boost
    } else {
        0.0
    };

    boost.min(weights.behavioral_cap)
}

/// Trust boost from verification and premium membership
pub fn calculate_trust_boost(profile: &CandidateProfile, weights: &ScoringWeights) -> f64 {
    let mut boost = 0.0;

    if profile.is_verified {
        boost += weights.verified_boost;
    }

    if profile.is_premium {
        boost += weights.premium_boost;
    }

    boost.min(weights.trust_cap)
}
