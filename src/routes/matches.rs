use actix_web::{web, HttpResponse, Responder};
use uuid::Uuid;
use validator::Validate;

use crate::config::MatchingSettings;
use crate::core::{filter_by_min_score, MatchOptions, Matcher};
use crate::error::ValidationError;
use crate::models::{ErrorResponse, HealthResponse, ScoreMatchesRequest, ScoreMatchesResponse};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub matcher: Matcher,
    pub matching: MatchingSettings,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/matches/score", web::post().to(score_matches))
        .route("/matches/relaxed", web::post().to(relaxed_matches));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

fn bad_request(error: &str, message: String) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: error.to_string(),
        message,
        status_code: 400,
    })
}

fn invalid_preferences(err: ValidationError) -> HttpResponse {
    bad_request("Invalid preferences", err.to_string())
}

/// Validate the request body and resolve per-request options
fn resolve_options(
    state: &AppState,
    req: &ScoreMatchesRequest,
) -> Result<MatchOptions, HttpResponse> {
    if let Err(errors) = req.validate() {
        tracing::warn!("Validation failed for request from {}: {:?}", req.seeker.seeker_id, errors);
        return Err(bad_request("Validation failed", errors.to_string()));
    }

    if req.candidates.len() > state.matching.max_pool_size {
        return Err(bad_request(
            "Candidate pool too large",
            format!(
                "{} candidates supplied, at most {} allowed",
                req.candidates.len(),
                state.matching.max_pool_size
            ),
        ));
    }

    let defaults = state.matching.match_options();
    let limit = req
        .limit
        .unwrap_or(state.matching.default_limit)
        .min(state.matching.max_limit) as usize;

    Ok(MatchOptions {
        min_score: req.min_score.unwrap_or(defaults.min_score),
        min_results: req.min_results.unwrap_or(defaults.min_results),
        limit,
    })
}

/// Score matches endpoint
///
/// POST /api/v1/matches/score
///
/// Runs the strict pass and falls back to relaxed preferences when fewer
/// than `minResults` candidates reach `minScore`.
///
/// Request body:
/// ```json
/// {
///   "seeker": { "seekerId": "string", "star": "Rohini" },
///   "preferences": { "ageRange": { "min": 25, "max": 30 }, "religions": [] },
///   "candidates": [ { "id": "string", "age": 27, "heightCm": 165 } ],
///   "history": { "likedOccupations": ["Doctor"] },
///   "minScore": 60,
///   "limit": 20,
///   "minResults": 5
/// }
/// ```
async fn score_matches(
    state: web::Data<AppState>,
    req: web::Json<ScoreMatchesRequest>,
) -> impl Responder {
    let options = match resolve_options(&state, &req) {
        Ok(options) => options,
        Err(response) => return response,
    };

    let request_id = Uuid::new_v4().to_string();
    tracing::info!(
        "Scoring {} candidates for seeker {} (request {})",
        req.candidates.len(),
        req.seeker.seeker_id,
        request_id
    );

    let result = match state.matcher.find_matches(
        &req.seeker,
        &req.preferences,
        &req.candidates,
        req.history.as_ref(),
        &options,
    ) {
        Ok(result) => result,
        Err(e) => {
            tracing::warn!("Rejected preferences for {}: {}", req.seeker.seeker_id, e);
            return invalid_preferences(e);
        }
    };

    tracing::info!(
        "Returning {} matches for seeker {} (from {} candidates, fallback: {})",
        result.matches.len(),
        req.seeker.seeker_id,
        result.total_candidates,
        result.fallback_applied
    );

    HttpResponse::Ok().json(ScoreMatchesResponse {
        request_id,
        matches: result.matches,
        total_candidates: result.total_candidates,
        fallback_applied: result.fallback_applied,
    })
}

/// Relaxed matches endpoint
///
/// POST /api/v1/matches/relaxed
///
/// Always scores with relaxed preferences. Same body as `/matches/score`;
/// `minResults` is ignored.
async fn relaxed_matches(
    state: web::Data<AppState>,
    req: web::Json<ScoreMatchesRequest>,
) -> impl Responder {
    let options = match resolve_options(&state, &req) {
        Ok(options) => options,
        Err(response) => return response,
    };

    let request_id = Uuid::new_v4().to_string();
    tracing::info!(
        "Relaxed scoring of {} candidates for seeker {} (request {})",
        req.candidates.len(),
        req.seeker.seeker_id,
        request_id
    );

    let ranked = match state.matcher.rank_relaxed(
        &req.seeker,
        &req.preferences,
        &req.candidates,
        req.history.as_ref(),
    ) {
        Ok(ranked) => ranked,
        Err(e) => {
            tracing::warn!("Rejected preferences for {}: {}", req.seeker.seeker_id, e);
            return invalid_preferences(e);
        }
    };

    let mut matches = filter_by_min_score(ranked, options.min_score);
    matches.truncate(options.limit);

    HttpResponse::Ok().json(ScoreMatchesResponse {
        request_id,
        matches,
        total_candidates: req.candidates.len(),
        fallback_applied: true,
    })
}
