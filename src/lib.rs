//! Career Match - archetype classification and advisor compatibility engine
//!
//! This library provides the decision logic behind the career-guidance intake:
//! classifying a traveler into an archetype with a development plan, and
//! scoring travelers against advisor profiles to pick the best match.
//! The engine is pure; the `routes` module hosts it over HTTP.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{find_best_match, generate_plan, score, Matcher};
pub use models::{AdvisorProfile, DevelopmentPlan, MatchResult, ScoringWeights, TravelerAnswers};
