use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{AdvisorProfile, TravelerAnswers, TravelerSubmission};

/// Request to score one traveler against one advisor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreRequest {
    #[serde(default)]
    pub answers: TravelerAnswers,
    #[serde(default)]
    pub advisor: AdvisorProfile,
}

/// Request to pick the best advisor from a roster
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BestMatchRequest {
    #[serde(default)]
    pub answers: TravelerAnswers,
    #[serde(default)]
    pub candidates: Vec<AdvisorProfile>,
}

/// Request to review best matches for many travelers at once
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ReviewRequest {
    #[serde(default)]
    pub travelers: Vec<TravelerSubmission>,
    #[serde(default)]
    pub advisors: Vec<AdvisorProfile>,
    #[validate(range(max = 100))]
    #[serde(rename = "minScore")]
    pub min_score: Option<u8>,
}
