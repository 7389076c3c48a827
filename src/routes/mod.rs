// Route exports
pub mod matches;
pub mod plan;

use actix_web::web;

use crate::config::MatchingSettings;
use crate::core::Matcher;

/// Application state shared across all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    pub matcher: Matcher,
    pub matching: MatchingSettings,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(plan::configure)
            .configure(matches::configure),
    );
}
