use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::core::generate_plan;
use crate::error::ApiError;
use crate::models::{PlanResponse, TravelerAnswers};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/plan", web::post().to(create_plan));
}

/// Generate a development plan
///
/// POST /api/v1/plan
///
/// Request body: a complete questionnaire
/// ```json
/// {
///   "goal": "string",
///   "experienceLevel": "beginner|intermediate|advanced",
///   "interestAreas": ["string"],
///   "challenges": ["string"],
///   "supportTypes": ["string"],
///   "preferredStyle": "string"
/// }
/// ```
async fn create_plan(req: web::Json<TravelerAnswers>) -> Result<HttpResponse, ApiError> {
    if let Err(errors) = req.validate() {
        tracing::info!("Rejected incomplete questionnaire: field_errors={:?}", errors);
        return Err(errors.into());
    }

    let plan = generate_plan(&req);
    let response = PlanResponse {
        plan_id: uuid::Uuid::new_v4(),
        generated_at: chrono::Utc::now(),
        plan,
    };

    tracing::info!(
        "Generated plan {} with archetype {:?} and {} learning tracks",
        response.plan_id,
        response.plan.archetype.kind,
        response.plan.learning_tracks.len()
    );

    Ok(HttpResponse::Ok().json(response))
}
