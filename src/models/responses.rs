use serde::{Deserialize, Serialize};

use crate::models::domain::{DevelopmentPlan, MatchResult, SuggestedMatch};

/// Response for the plan endpoint
#[derive(Debug, Clone, Serialize)]
pub struct PlanResponse {
    #[serde(rename = "planId")]
    pub plan_id: uuid::Uuid,
    #[serde(rename = "generatedAt")]
    pub generated_at: chrono::DateTime<chrono::Utc>,
    #[serde(flatten)]
    pub plan: DevelopmentPlan,
}

/// Response for the best match endpoint; `match` is null for an empty roster
#[derive(Debug, Clone, Serialize)]
pub struct BestMatchResponse<'a> {
    #[serde(rename = "match")]
    pub best: Option<MatchResult<'a>>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
}

/// Response for the bulk review endpoint
#[derive(Debug, Clone, Serialize)]
pub struct ReviewResponse<'a> {
    pub suggestions: Vec<SuggestedMatch<'a>>,
    #[serde(rename = "minScore")]
    pub min_score: u8,
    #[serde(rename = "totalTravelers")]
    pub total_travelers: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
