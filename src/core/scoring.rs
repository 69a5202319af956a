use crate::core::boosts::{calculate_behavioral_boost, calculate_trust_boost};
use crate::core::scorers::{
    calculate_age_score, calculate_career_score, calculate_height_score,
    calculate_horoscope_score, calculate_lifestyle_score, calculate_location_score,
    calculate_social_score, location_matches,
};
use crate::core::tags::{generate_tags, RawSubScores};
use crate::models::{
    CandidateProfile, InteractionHistory, Preferences, ScoreBreakdown, ScoredCandidate,
    ScoringWeights, SeekerContext,
};

/// Compute the raw (unweighted) sub-score of every category
pub fn calculate_sub_scores(
    profile: &CandidateProfile,
    seeker: &SeekerContext,
    preferences: &Preferences,
) -> RawSubScores {
    RawSubScores {
        age: calculate_age_score(profile.age, preferences.age_range.as_ref()),
        height: calculate_height_score(profile.height_cm, preferences.height_range.as_ref()),
        social: calculate_social_score(profile, preferences),
        career: calculate_career_score(profile, preferences),
        lifestyle: calculate_lifestyle_score(profile, preferences),
        horoscope: calculate_horoscope_score(seeker.star.as_deref(), profile.star.as_deref()),
        location: calculate_location_score(profile, preferences),
        location_matched: location_matches(profile, preferences),
    }
}

/// Calculate a match score (0-100) for a candidate
///
/// Scoring formula:
/// score = clamp(
///     age * 15 + height * 10 +     # basic
///     social * 20 +                # religion, community
///     career * 20 +                # education, income
///     lifestyle * 15 +             # diet, smoking, drinking
///     horoscope * 10 +             # star affinity placeholder
///     location * 5 +               # preferred location
///     behavioral + trust,          # additive boosts
///     0, 100
/// )
///
/// The allocations come from `weights`; the numbers above are the defaults.
/// Preferences must already be validated.
pub fn score_candidate(
    profile: &CandidateProfile,
    seeker: &SeekerContext,
    preferences: &Preferences,
    history: Option<&InteractionHistory>,
    weights: &ScoringWeights,
) -> ScoredCandidate {
    let raw = calculate_sub_scores(profile, seeker, preferences);

    let breakdown = ScoreBreakdown {
        basic: raw.age * weights.age + raw.height * weights.height,
        social: raw.social * weights.social,
        career: raw.career * weights.career,
        lifestyle: raw.lifestyle * weights.lifestyle,
        horoscope: raw.horoscope * weights.horoscope,
    };

    let location = raw.location * weights.location;
    let boosts = calculate_behavioral_boost(profile, history, weights)
        + calculate_trust_boost(profile, weights);

    let total = breakdown.basic
        + breakdown.social
        + breakdown.career
        + breakdown.lifestyle
        + breakdown.horoscope
        + location
        + boosts;

    let score = total.clamp(0.0, 100.0).round() as u8;
    let tags = generate_tags(&raw, score, profile);

    ScoredCandidate {
        profile: profile.clone(),
        score,
        breakdown,
        tags,
        is_fallback: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MatchTag, RangePreference};

    fn create_test_profile(age: u8, height_cm: u16, is_verified: bool) -> CandidateProfile {
        CandidateProfile {
            id: "test_candidate".to_string(),
            name: "Test Candidate".to_string(),
            age,
            height_cm,
            occupation: Some("Architect".to_string()),
            is_verified,
            ..Default::default()
        }
    }

    fn create_test_preferences() -> Preferences {
        Preferences {
            age_range: Some(RangePreference::new(25, 30)),
            height_range: Some(RangePreference::new(160, 175)),
            ..Default::default()
        }
    }

    #[test]
    fn test_score_candidate_all_open_preferences() {
        let profile = create_test_profile(25, 160, false);
        let scored = score_candidate(
            &profile,
            &SeekerContext::default(),
            &create_test_preferences(),
            None,
            &ScoringWeights::default(),
        );

        assert_eq!(scored.score, 90);
        assert_eq!(scored.breakdown.basic, 25.0);
        assert_eq!(scored.breakdown.social, 20.0);
        assert_eq!(scored.breakdown.career, 20.0);
        assert_eq!(scored.breakdown.lifestyle, 15.0);
        assert_eq!(scored.breakdown.horoscope, 5.0);
        assert!(scored.has_tag(MatchTag::CommunityMatch));
        assert!(scored.has_tag(MatchTag::CareerMatch));
        assert!(!scored.has_tag(MatchTag::NearbyMatch));
        assert!(!scored.has_tag(MatchTag::SuperMatch));
        assert!(!scored.is_fallback);
    }

    #[test]
    fn test_score_is_clamped() {
        let mut profile = create_test_profile(27, 165, true);
        profile.is_premium = true;
        profile.star = Some("Rohini".to_string());
        let seeker = SeekerContext {
            seeker_id: "s1".to_string(),
            star: Some("Rohini".to_string()),
        };
        let history = InteractionHistory {
            liked_occupations: vec!["Architect".to_string()],
            ..Default::default()
        };

        let scored = score_candidate(
            &profile,
            &seeker,
            &create_test_preferences(),
            Some(&history),
            &ScoringWeights::default(),
        );

        // 93 weighted + 2 behavioral + 5 trust
        assert_eq!(scored.score, 100);
        assert!(scored.has_tag(MatchTag::SuperMatch));
        assert!(scored.has_tag(MatchTag::Verified));
    }

    #[test]
    fn test_verified_bonus() {
        let preferences = create_test_preferences();
        let seeker = SeekerContext::default();
        let weights = ScoringWeights::default();

        let verified_profile = create_test_profile(26, 170, true);
        let unverified_profile = create_test_profile(26, 170, false);

        let verified = score_candidate(&verified_profile, &seeker, &preferences, None, &weights);
        let unverified =
            score_candidate(&unverified_profile, &seeker, &preferences, None, &weights);

        assert_eq!(verified.score, unverified.score + 3);
    }
}
