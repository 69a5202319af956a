//! Explanation labels derived from raw sub-scores.

use crate::models::{CandidateProfile, MatchTag};

/// Raw social/career sub-score at or above which a match tag is emitted
pub const CATEGORY_TAG_THRESHOLD: f64 = 0.8;

/// Total score strictly above which a candidate is a "Super Match"
pub const SUPER_MATCH_THRESHOLD: u8 = 90;

/// Unweighted category sub-scores consulted by the tag generator
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RawSubScores {
    pub age: f64,
    pub height: f64,
    pub social: f64,
    pub career: f64,
    pub lifestyle: f64,
    pub horoscope: f64,
    pub location: f64,
    /// A preferred location actually appeared in the candidate's location
    pub location_matched: bool,
}

/// Generate tags for a scored candidate, in a fixed order
pub fn generate_tags(raw: &RawSubScores, score: u8, profile: &CandidateProfile) -> Vec<MatchTag> {
    let mut tags = Vec::new();

    if raw.location_matched {
        tags.push(MatchTag::NearbyMatch);
    }

    if raw.social >= CATEGORY_TAG_THRESHOLD {
        tags.push(MatchTag::CommunityMatch);
    }

    if raw.career >= CATEGORY_TAG_THRESHOLD {
        tags.push(MatchTag::CareerMatch);
    }

    if score > SUPER_MATCH_THRESHOLD {
        tags.push(MatchTag::SuperMatch);
    }

    if profile.is_verified {
        tags.push(MatchTag::Verified);
    }

    tags
}
