use crate::core::{
    fallback::{mark_as_fallback, relax_preferences},
    filters::{filter_by_min_score, needs_fallback},
    scoring::score_candidate,
};
use crate::error::ValidationError;
use crate::models::{
    CandidateProfile, InteractionHistory, Preferences, RelaxationPolicy, ScoredCandidate,
    ScoringWeights, SeekerContext,
};

/// Caller-side policy for `Matcher::find_matches`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchOptions {
    /// Candidates scoring below this are left out of the result
    pub min_score: u8,
    /// Fewer results than this triggers the relaxed pass
    pub min_results: usize,
    /// Maximum number of matches to return
    pub limit: usize,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            min_score: 0,
            min_results: 1,
            limit: 20,
        }
    }
}

/// Result of the matching process
#[derive(Debug)]
pub struct MatchResult {
    pub matches: Vec<ScoredCandidate>,
    pub total_candidates: usize,
    pub fallback_applied: bool,
}

/// Compatibility scoring engine
///
/// Holds only immutable configuration, so a `Matcher` can be shared freely
/// and every call is a pure function of its inputs.
///
/// # Pipeline Stages
/// 1. Precondition validation
/// 2. Per-candidate category scoring and boosts
/// 3. Clamping and tagging
/// 4. Stable ranking by total score
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
    relaxation: RelaxationPolicy,
}

impl Matcher {
    pub fn new(weights: ScoringWeights, relaxation: RelaxationPolicy) -> Self {
        Self { weights, relaxation }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
            relaxation: RelaxationPolicy::default(),
        }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    pub fn relaxation(&self) -> &RelaxationPolicy {
        &self.relaxation
    }

    /// Score and rank every candidate against strict preferences
    ///
    /// No candidate is dropped. Ties keep their input order.
    ///
    /// # Errors
    /// Returns `ValidationError` if any preference range has min > max;
    /// nothing is scored in that case.
    pub fn rank(
        &self,
        seeker: &SeekerContext,
        preferences: &Preferences,
        candidates: &[CandidateProfile],
        history: Option<&InteractionHistory>,
    ) -> Result<Vec<ScoredCandidate>, ValidationError> {
        preferences.validate()?;
        Ok(self.rank_validated(seeker, preferences, candidates, history))
    }

    /// Score and rank the pool with relaxed preferences
    ///
    /// Every result carries the "Flexible Match" tag and `is_fallback`.
    pub fn rank_relaxed(
        &self,
        seeker: &SeekerContext,
        preferences: &Preferences,
        candidates: &[CandidateProfile],
        history: Option<&InteractionHistory>,
    ) -> Result<Vec<ScoredCandidate>, ValidationError> {
        preferences.validate()?;

        let relaxed = relax_preferences(preferences, &self.relaxation);
        tracing::debug!(
            "Relaxed preferences: age {:?} -> {:?}, height {:?} -> {:?}",
            preferences.age_range,
            relaxed.age_range,
            preferences.height_range,
            relaxed.height_range
        );

        let mut ranked = self.rank_validated(seeker, &relaxed, candidates, history);
        mark_as_fallback(&mut ranked);
        Ok(ranked)
    }

    /// Strict pass, threshold, and a relaxed pass when too few remain
    ///
    /// This is the policy the service layer applies; `rank` itself never
    /// relaxes anything.
    pub fn find_matches(
        &self,
        seeker: &SeekerContext,
        preferences: &Preferences,
        candidates: &[CandidateProfile],
        history: Option<&InteractionHistory>,
        options: &MatchOptions,
    ) -> Result<MatchResult, ValidationError> {
        let total_candidates = candidates.len();

        let strict = self.rank(seeker, preferences, candidates, history)?;
        let mut matches = filter_by_min_score(strict, options.min_score);
        let mut fallback_applied = false;

        if needs_fallback(&matches, options.min_results) {
            tracing::debug!(
                "Strict pass for {} kept {} of {} candidates (want {}), relaxing",
                seeker.seeker_id,
                matches.len(),
                total_candidates,
                options.min_results
            );

            let relaxed = self.rank_relaxed(seeker, preferences, candidates, history)?;
            matches = filter_by_min_score(relaxed, options.min_score);
            fallback_applied = true;
        }

        matches.truncate(options.limit);

        Ok(MatchResult {
            matches,
            total_candidates,
            fallback_applied,
        })
    }

    fn rank_validated(
        &self,
        seeker: &SeekerContext,
        preferences: &Preferences,
        candidates: &[CandidateProfile],
        history: Option<&InteractionHistory>,
    ) -> Vec<ScoredCandidate> {
        let mut scored: Vec<ScoredCandidate> = candidates
            .iter()
            .map(|profile| score_candidate(profile, seeker, preferences, history, &self.weights))
            .collect();

        // Stable sort keeps input order among equal scores
        scored.sort_by(|a, b| b.score.cmp(&a.score));

        tracing::debug!("Scored {} candidates for {}", scored.len(), seeker.seeker_id);

        scored
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
