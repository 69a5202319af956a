//! Matrimony Match - compatibility scoring engine
//!
//! Scores a pool of candidate profiles against a seeker's preferences,
//! ranks them, explains each score with tags, and offers a relaxed pass
//! when strict preferences leave too few matches.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{MatchOptions, MatchResult, Matcher};
pub use crate::error::ValidationError;
pub use crate::models::{
    CandidateProfile, InteractionHistory, MatchTag, Preferences, ScoredCandidate, ScoringWeights,
    SeekerContext,
};
