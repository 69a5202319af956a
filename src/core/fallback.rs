use crate::models::{MatchTag, Preferences, RelaxationPolicy, ScoredCandidate};

/// Derive a relaxed copy of the seeker's preferences
///
/// Age and height ranges are widened on both ends, the minimum income is
/// reset and the religion and community sets are cleared. Every other field
/// is carried over unchanged.
pub fn relax_preferences(preferences: &Preferences, policy: &RelaxationPolicy) -> Preferences {
    Preferences {
        age_range: preferences
            .age_range
            .map(|range| range.widened(policy.age_widen_years)),
        height_range: preferences
            .height_range
            .map(|range| range.widened(policy.height_widen_cm)),
        min_income: 0.0,
        religions: Vec::new(),
        communities: Vec::new(),
        ..preferences.clone()
    }
}

/// Mark results of a relaxed pass so consumers can tell them apart
pub fn mark_as_fallback(matches: &mut [ScoredCandidate]) {
    for m in matches.iter_mut() {
        m.is_fallback = true;
        if !m.tags.contains(&MatchTag::FlexibleMatch) {
            m.tags.push(MatchTag::FlexibleMatch);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CandidateProfile, RangePreference, ScoreBreakdown};

    #[test]
    fn test_relax_preferences() {
        let preferences = Preferences {
            age_range: Some(RangePreference::new(25, 30)),
            height_range: Some(RangePreference::new(160, 175)),
            religions: vec!["Hindu".to_string()],
            communities: vec!["Iyer".to_string()],
            diets: vec!["Vegetarian".to_string()],
            locations: vec!["Chennai".to_string()],
            min_income: 1_000_000.0,
            smoking: Some("No".to_string()),
            ..Default::default()
        };

        let relaxed = relax_preferences(&preferences, &RelaxationPolicy::default());

        assert_eq!(relaxed.age_range, Some(RangePreference::new(23, 32)));
        assert_eq!(relaxed.height_range, Some(RangePreference::new(155, 180)));
        assert_eq!(relaxed.min_income, 0.0);
        assert!(relaxed.religions.is_empty());
        assert!(relaxed.communities.is_empty());
        assert_eq!(relaxed.diets, preferences.diets);
        assert_eq!(relaxed.locations, preferences.locations);
        assert_eq!(relaxed.smoking, preferences.smoking);
    }

    #[test]
    fn test_relax_keeps_open_ranges_open() {
        let relaxed = relax_preferences(&Preferences::default(), &RelaxationPolicy::default());

        assert_eq!(relaxed.age_range, None);
        assert_eq!(relaxed.height_range, None);
    }

    #[test]
    fn test_mark_as_fallback() {
        let mut matches = vec![ScoredCandidate {
            profile: CandidateProfile::default(),
            score: 70,
            breakdown: ScoreBreakdown::default(),
            tags: vec![MatchTag::Verified],
            is_fallback: false,
        }];

        mark_as_fallback(&mut matches);

        assert!(matches[0].is_fallback);
        assert_eq!(matches[0].tags, vec![MatchTag::Verified, MatchTag::FlexibleMatch]);
    }
}
