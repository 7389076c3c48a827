use crate::core::scoring::{calculate_compatibility, score_breakdown};
use crate::models::{
    AdvisorProfile, MatchResult, ScoreBreakdown, ScoringWeights, SuggestedMatch, TravelerAnswers,
    TravelerSubmission,
};

/// Default minimum score for a suggestion to appear in a bulk review
pub const DEFAULT_MIN_REVIEW_SCORE: u8 = 60;

/// Matching orchestrator: scores travelers against an advisor roster
///
/// Ties are always resolved in favor of the advisor that appears first in the
/// roster.
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
}

impl Matcher {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Compatibility score (0-100) for one advisor
    pub fn score(&self, answers: &TravelerAnswers, advisor: &AdvisorProfile) -> u8 {
        calculate_compatibility(answers, advisor, &self.weights)
    }

    /// Per-factor points for one advisor
    pub fn breakdown(&self, answers: &TravelerAnswers, advisor: &AdvisorProfile) -> ScoreBreakdown {
        score_breakdown(answers, advisor, &self.weights)
    }

    /// Find the best advisor for a traveler
    ///
    /// Returns `None` for an empty roster. Only a strictly higher score
    /// replaces the current best, so the earliest advisor wins a tie.
    pub fn find_best_match<'a>(
        &self,
        answers: &TravelerAnswers,
        candidates: &'a [AdvisorProfile],
    ) -> Option<MatchResult<'a>> {
        let best = self.best_of(answers, candidates.iter().enumerate());

        if let Some(found) = &best {
            tracing::debug!(
                "Best match: advisor {:?} at position {} with score {} (from {} candidates)",
                found.advisor.id,
                found.index,
                found.score,
                candidates.len()
            );
        }

        best
    }

    /// Strictly-greater scan over `(roster position, advisor)` pairs in order
    fn best_of<'a>(
        &self,
        answers: &TravelerAnswers,
        candidates: impl Iterator<Item = (usize, &'a AdvisorProfile)>,
    ) -> Option<MatchResult<'a>> {
        let mut best: Option<MatchResult<'a>> = None;

        for (index, advisor) in candidates {
            let score = self.score(answers, advisor);
            if best.map_or(true, |current| score > current.score) {
                best = Some(MatchResult { advisor, index, score });
            }
        }

        best
    }

    /// Score every candidate and order them by descending score
    ///
    /// The sort is stable: advisors with equal scores keep their roster order.
    pub fn rank<'a>(
        &self,
        answers: &TravelerAnswers,
        candidates: &'a [AdvisorProfile],
    ) -> Vec<MatchResult<'a>> {
        let mut ranked: Vec<MatchResult<'a>> = candidates
            .iter()
            .enumerate()
            .map(|(index, advisor)| MatchResult {
                advisor,
                index,
                score: self.score(answers, advisor),
            })
            .collect();

        ranked.sort_by(|a, b| b.score.cmp(&a.score));
        ranked
    }

    /// Suggest the best advisor for each traveler, keeping scores at or above `min_score`
    ///
    /// Only active advisors are considered. Suggestions follow traveler
    /// order; travelers without a qualifying advisor are left out.
    pub fn review<'a>(
        &self,
        travelers: &'a [TravelerSubmission],
        advisors: &'a [AdvisorProfile],
        min_score: u8,
    ) -> Vec<SuggestedMatch<'a>> {
        let suggestions: Vec<SuggestedMatch<'a>> = travelers
            .iter()
            .filter_map(|traveler| {
                let active = advisors.iter().enumerate().filter(|(_, advisor)| advisor.active);
                self.best_of(&traveler.answers, active)
                    .filter(|best| best.score >= min_score)
                    .map(|best| SuggestedMatch {
                        traveler_id: &traveler.traveler_id,
                        advisor: best.advisor,
                        score: best.score,
                    })
            })
            .collect();

        tracing::debug!(
            "Review produced {} suggestions for {} travelers against {} advisors (min score {})",
            suggestions.len(),
            travelers.len(),
            advisors.len(),
            min_score
        );

        suggestions
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

/// Best advisor for a traveler using the default weights
pub fn find_best_match<'a>(
    answers: &TravelerAnswers,
    candidates: &'a [AdvisorProfile],
) -> Option<MatchResult<'a>> {
    Matcher::with_default_weights().find_best_match(answers, candidates)
}
