use crate::models::ScoredCandidate;

/// Keep only candidates whose total score reaches `min_score`
///
/// The engine never drops candidates on its own; callers apply a threshold
/// with this helper. Relative order is preserved.
#[inline]
pub fn filter_by_min_score(matches: Vec<ScoredCandidate>, min_score: u8) -> Vec<ScoredCandidate> {
    matches
        .into_iter()
        .filter(|m| m.score >= min_score)
        .collect()
}

/// Whether a result set is too small and should be relaxed
#[inline]
pub fn needs_fallback(matches: &[ScoredCandidate], min_results: usize) -> bool {
    matches.len() < min_results
}
