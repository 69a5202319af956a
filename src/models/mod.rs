// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    CandidateProfile, InteractionHistory, MatchTag, Preferences, RangePreference,
    RelaxationPolicy, ScoreBreakdown, ScoredCandidate, ScoringWeights, SeekerContext,
};
pub use requests::ScoreMatchesRequest;
pub use responses::{ErrorResponse, HealthResponse, ScoreMatchesResponse};
