// Core algorithm exports
pub mod boosts;
pub mod fallback;
pub mod filters;
pub mod matcher;
pub mod scorers;
pub mod scoring;
pub mod tags;

pub use boosts::{calculate_behavioral_boost, calculate_trust_boost};
pub use fallback::{mark_as_fallback, relax_preferences};
pub use filters::{filter_by_min_score, needs_fallback};
pub use matcher::{MatchOptions, MatchResult, Matcher};
pub use scorers::parse_income;
pub use scoring::{calculate_sub_scores, score_candidate};
pub use tags::{generate_tags, RawSubScores};
