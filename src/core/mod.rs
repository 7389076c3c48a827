// Core engine exports
pub mod catalog;
pub mod matcher;
pub mod normalize;
pub mod plan;
pub mod scoring;

pub use matcher::{find_best_match, Matcher, DEFAULT_MIN_REVIEW_SCORE};
pub use normalize::{ExperienceLevel, GoalIntent};
pub use plan::{classify, generate_plan};
pub use scoring::{calculate_compatibility, score, score_breakdown};
