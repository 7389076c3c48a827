use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::error::ApiError;
use crate::models::{
    BestMatchRequest, BestMatchResponse, HealthResponse, ReviewRequest, ReviewResponse,
    ScoreRequest,
};
use crate::routes::AppState;

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/matches/score", web::post().to(score_advisor))
        .route("/matches/best", web::post().to(best_match))
        .route("/matches/review", web::post().to(review_matches));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

fn check_roster(state: &AppState, roster_len: usize) -> Result<(), ApiError> {
    let max = state.matching.max_candidates;
    if roster_len > max {
        tracing::info!("Rejected roster of {} advisors (limit {})", roster_len, max);
        return Err(ApiError::RosterTooLarge { got: roster_len, max });
    }
    Ok(())
}

/// Score one traveler against one advisor
///
/// POST /api/v1/matches/score
///
/// Request body:
/// ```json
/// { "answers": { ... }, "advisor": { ... } }
/// ```
async fn score_advisor(
    state: web::Data<AppState>,
    req: web::Json<ScoreRequest>,
) -> impl Responder {
    let breakdown = state.matcher.breakdown(&req.answers, &req.advisor);

    tracing::debug!("Scored advisor {:?}: {:?}", req.advisor.id, breakdown);

    HttpResponse::Ok().json(breakdown)
}

/// Find the best advisor for a traveler
///
/// POST /api/v1/matches/best
///
/// Request body:
/// ```json
/// { "answers": { ... }, "candidates": [{ ... }] }
/// ```
///
/// `match` is null when the roster is empty.
async fn best_match(
    state: web::Data<AppState>,
    req: web::Json<BestMatchRequest>,
) -> Result<HttpResponse, ApiError> {
    check_roster(&state, req.candidates.len())?;

    let best = state.matcher.find_best_match(&req.answers, &req.candidates);

    match &best {
        Some(found) => tracing::info!(
            "Best match is advisor {:?} with score {} (from {} candidates)",
            found.advisor.id,
            found.score,
            req.candidates.len()
        ),
        None => tracing::info!("No match: empty candidate roster"),
    }

    Ok(HttpResponse::Ok().json(BestMatchResponse {
        best,
        total_candidates: req.candidates.len(),
    }))
}

/// Review best matches for many travelers
///
/// POST /api/v1/matches/review
///
/// Request body:
/// ```json
/// {
///   "travelers": [{ "travelerId": "string", "answers": { ... } }],
///   "advisors": [{ ... }],
///   "minScore": 60
/// }
/// ```
async fn review_matches(
    state: web::Data<AppState>,
    req: web::Json<ReviewRequest>,
) -> Result<HttpResponse, ApiError> {
    req.validate()?;
    check_roster(&state, req.advisors.len())?;

    let min_score = req.min_score.unwrap_or(state.matching.min_review_score);
    let suggestions = state.matcher.review(&req.travelers, &req.advisors, min_score);

    tracing::info!(
        "Review suggested {} matches for {} travelers (min score {})",
        suggestions.len(),
        req.travelers.len(),
        min_score
    );

    Ok(HttpResponse::Ok().json(ReviewResponse {
        suggestions,
        min_score,
        total_travelers: req.travelers.len(),
    }))
}
