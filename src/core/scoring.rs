use crate::core::normalize::{contains_either, shares_significant_word, tags_equal, normalize_tag};
use crate::models::{AdvisorProfile, ScoreBreakdown, ScoringWeights, TravelerAnswers};

/// Calculate a compatibility score (0-100) between a traveler and an advisor
///
/// Scoring formula:
/// score = round(100 * (
///     area_points +         # share of interests matching a practice area
///     experience_points +   # full weight minus a third per level of distance
///     style_points +        # exact style = full, substring = 60%
///     topic_points          # share of challenges matching a preferred topic
/// ) / total_weight)
///
/// The denominator is always the sum of all four weights, so factors that
/// cannot be evaluated lower the score instead of being skipped.
pub fn calculate_compatibility(
    answers: &TravelerAnswers,
    advisor: &AdvisorProfile,
    weights: &ScoringWeights,
) -> u8 {
    score_breakdown(answers, advisor, weights).total
}

/// Compatibility score with the default 35/15/25/25 weights
pub fn score(answers: &TravelerAnswers, advisor: &AdvisorProfile) -> u8 {
    calculate_compatibility(answers, advisor, &ScoringWeights::default())
}

/// Points awarded by each factor along with the final score
pub fn score_breakdown(
    answers: &TravelerAnswers,
    advisor: &AdvisorProfile,
    weights: &ScoringWeights,
) -> ScoreBreakdown {
    let area = calculate_area_points(&answers.interest_areas, &advisor.practice_areas, weights.area);
    let experience = calculate_experience_points(answers, advisor, weights.experience);
    let style = calculate_style_points(&answers.preferred_style, &advisor.style, weights.style);
    let topic = calculate_topic_points(&answers.challenges, &advisor.preferred_topics, weights.topic);

    let total_weight = weights.total();
    let total = if total_weight > 0.0 {
        let pct = 100.0 * (area + experience + style + topic) / total_weight;
        pct.round().clamp(0.0, 100.0) as u8
    } else {
        0
    };

    ScoreBreakdown {
        area,
        experience,
        style,
        topic,
        total,
    }
}

/// Fraction of interests that exactly match some practice area, scaled by the weight
#[inline]
fn calculate_area_points(interests: &[String], practice_areas: &[String], weight: f64) -> f64 {
    if interests.is_empty() || practice_areas.is_empty() {
        return 0.0;
    }

    let matched = interests
        .iter()
        .filter(|interest| practice_areas.iter().any(|area| tags_equal(interest, area)))
        .count();

    matched as f64 / interests.len() as f64 * weight.max(0.0)
}

/// Full weight for the same level, one third less per level of distance
#[inline]
fn calculate_experience_points(
    answers: &TravelerAnswers,
    advisor: &AdvisorProfile,
    weight: f64,
) -> f64 {
    let weight = weight.max(0.0);
    match (answers.level(), advisor.level()) {
        (Some(traveler), Some(advisor)) => {
            let step = weight / 3.0;
            (weight - step * traveler.distance(advisor) as f64).max(0.0)
        }
        _ => 0.0,
    }
}

#[inline]
fn calculate_style_points(preferred: &str, advisor_style: &str, weight: f64) -> f64 {
    let weight = weight.max(0.0);
    if normalize_tag(preferred).is_empty() {
        return 0.0;
    }

    if tags_equal(preferred, advisor_style) {
        weight
    } else if contains_either(preferred, advisor_style) {
        // 60% of the weight
        weight * 3.0 / 5.0
    } else {
        0.0
    }
}

/// Fraction of challenges related to some preferred topic, scaled by the weight
///
/// A challenge relates to a topic when either contains the other or they
/// share a word longer than three characters.
#[inline]
fn calculate_topic_points(challenges: &[String], topics: &[String], weight: f64) -> f64 {
    if challenges.is_empty() || topics.is_empty() {
        return 0.0;
    }

    let matched = challenges
        .iter()
        .filter(|challenge| {
            topics.iter().any(|topic| {
                contains_either(challenge, topic) || shares_significant_word(challenge, topic)
            })
        })
        .count();

    matched as f64 / challenges.len() as f64 * weight.max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_answers() -> TravelerAnswers {
        TravelerAnswers {
            goal: "grow".to_string(),
            experience_level: "intermediate".to_string(),
            interest_areas: vec!["tecnologia".to_string()],
            challenges: vec!["salary negotiation".to_string(), "public speaking".to_string()],
            support_types: vec!["mentoring".to_string()],
            preferred_style: "pratico".to_string(),
        }
    }

    fn create_test_advisor() -> AdvisorProfile {
        AdvisorProfile {
            id: "advisor-1".to_string(),
            name: "Test Advisor".to_string(),
            active: true,
            practice_areas: vec!["tecnologia".to_string(), "gestao".to_string()],
            experience_level: "intermediate".to_string(),
            years_experience: None,
            preferred_topics: vec!["negotiation".to_string()],
            style: "pratico".to_string(),
            audiences: vec!["early career".to_string()],
            preferred_format: "online".to_string(),
        }
    }

    #[test]
    fn test_calculate_compatibility() {
        let answers = create_test_answers();
        let advisor = create_test_advisor();

        let breakdown = score_breakdown(&answers, &advisor, &ScoringWeights::default());

        assert_eq!(breakdown.area, 35.0);
        assert_eq!(breakdown.experience, 15.0);
        assert_eq!(breakdown.style, 25.0);
        assert_eq!(breakdown.topic, 12.5);
        // 87.5 rounds up
        assert_eq!(breakdown.total, 88);
        assert_eq!(score(&answers, &advisor), 88);
    }

    #[test]
    fn test_empty_profiles_score_zero() {
        assert_eq!(score(&TravelerAnswers::default(), &AdvisorProfile::default()), 0);
    }

    #[test]
    fn test_area_points() {
        let interests = vec![" Tecnologia ".to_string(), "saude".to_string()];
        let areas = vec!["tecnologia".to_string()];

        assert_eq!(calculate_area_points(&interests, &areas, 35.0), 17.5);
        assert_eq!(calculate_area_points(&[], &areas, 35.0), 0.0);
        assert_eq!(calculate_area_points(&interests, &[], 35.0), 0.0);
        // Areas must match exactly, not by substring
        assert_eq!(
            calculate_area_points(&["tec".to_string()], &areas, 35.0),
            0.0
        );
    }

    #[test]
    fn test_experience_points() {
        let mut answers = create_test_answers();
        let mut advisor = create_test_advisor();

        answers.experience_level = "beginner".to_string();
        advisor.experience_level = "beginner".to_string();
        assert_eq!(calculate_experience_points(&answers, &advisor, 15.0), 15.0);

        advisor.experience_level = "intermediate".to_string();
        assert_eq!(calculate_experience_points(&answers, &advisor, 15.0), 10.0);

        advisor.experience_level = "advanced".to_string();
        assert_eq!(calculate_experience_points(&answers, &advisor, 15.0), 5.0);

        advisor.experience_level = "guru".to_string();
        assert_eq!(calculate_experience_points(&answers, &advisor, 15.0), 0.0);
    }

    #[test]
    fn test_style_points() {
        assert_eq!(calculate_style_points(" Pratico ", "pratico", 25.0), 25.0);
        assert_eq!(calculate_style_points("pratico", "pratico e direto", 25.0), 15.0);
        assert_eq!(calculate_style_points("direto e pratico", "pratico", 25.0), 15.0);
        assert_eq!(calculate_style_points("acolhedor", "pratico", 25.0), 0.0);
        assert_eq!(calculate_style_points("", "", 25.0), 0.0);
        assert_eq!(calculate_style_points("pratico", "", 25.0), 0.0);
    }

    #[test]
    fn test_topic_points() {
        let topics = vec!["career change".to_string()];

        // substring
        assert_eq!(calculate_topic_points(&["change".to_string()], &topics, 25.0), 25.0);
        // shared word longer than three characters
        assert_eq!(
            calculate_topic_points(&["planning a career".to_string()], &topics, 25.0),
            25.0
        );
        // short words do not count
        assert_eq!(calculate_topic_points(&["how to ask".to_string()], &["ask me".to_string()], 25.0), 0.0);
        assert_eq!(calculate_topic_points(&[], &topics, 25.0), 0.0);
    }

    #[test]
    fn test_custom_weights_normalized() {
        let answers = create_test_answers();
        let advisor = create_test_advisor();
        let weights = ScoringWeights {
            area: 1.0,
            experience: 0.0,
            style: 0.0,
            topic: 0.0,
        };

        assert_eq!(calculate_compatibility(&answers, &advisor, &weights), 100);

        let zero = ScoringWeights {
            area: 0.0,
            experience: 0.0,
            style: 0.0,
            topic: 0.0,
        };
        assert_eq!(calculate_compatibility(&answers, &advisor, &zero), 0);
    }
}
