// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    AdvisorProfile, Archetype, ArchetypeDefinition, DevelopmentPlan, LearningTrack, MatchResult,
    Milestone, NamedScore, ScoreBreakdown, ScoringWeights, SuggestedMatch, TravelerAnswers,
    TravelerSubmission,
};
pub use requests::{BestMatchRequest, ReviewRequest, ScoreRequest};
pub use responses::{BestMatchResponse, ErrorResponse, HealthResponse, PlanResponse, ReviewResponse};
