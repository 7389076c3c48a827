use crate::core::catalog::{tracks_for_interest, GENERIC_TRACKS, MAX_LEARNING_TRACKS, TIMELINE, TIPS};
use crate::core::normalize::{ExperienceLevel, GoalIntent};
use crate::models::{Archetype, DevelopmentPlan, LearningTrack, NamedScore, TravelerAnswers};

/// Generate a development plan for a traveler
///
/// Pure and total: every set of answers yields exactly one archetype and a
/// plan with a fixed timeline and tip list.
pub fn generate_plan(answers: &TravelerAnswers) -> DevelopmentPlan {
    let level = answers.level();

    DevelopmentPlan {
        archetype: classify(answers).definition(),
        strengths: strengths(level),
        gaps: gaps(level),
        learning_tracks: select_learning_tracks(&answers.interest_areas),
        timeline: &TIMELINE,
        tips: &TIPS,
    }
}

/// Assign an archetype; the first matching rule wins
///
/// 1. goal expresses a change or transition
/// 2. goal expresses entrepreneurship
/// 3. experience level is advanced
/// 4. otherwise
pub fn classify(answers: &TravelerAnswers) -> Archetype {
    match GoalIntent::parse(&answers.goal) {
        GoalIntent::Transition => Archetype::TransitionExplorer,
        GoalIntent::Entrepreneurship => Archetype::EntrepreneurialCreator,
        GoalIntent::Other if answers.level() == Some(ExperienceLevel::Advanced) => {
            Archetype::StrategicSpecialist
        }
        GoalIntent::Other => Archetype::GrowthBuilder,
    }
}

/// Strength scores, a function of experience level only
pub fn strengths(level: Option<ExperienceLevel>) -> Vec<NamedScore> {
    let beginner = level == Some(ExperienceLevel::Beginner);
    let advanced = level == Some(ExperienceLevel::Advanced);

    vec![
        NamedScore { name: "Adaptability", value: if beginner { 65 } else { 80 } },
        NamedScore { name: "Self-Knowledge", value: 75 },
        NamedScore { name: "Communication", value: if advanced { 85 } else { 70 } },
        NamedScore { name: "Continuous Learning", value: 80 },
        NamedScore { name: "Resilience", value: 70 },
    ]
}

/// Gap scores, a function of experience level only
pub fn gaps(level: Option<ExperienceLevel>) -> Vec<NamedScore> {
    let beginner = level == Some(ExperienceLevel::Beginner);

    vec![
        NamedScore { name: "Networking", value: 60 },
        NamedScore { name: "Strategic Vision", value: if beginner { 45 } else { 65 } },
        NamedScore { name: "Time Management", value: 55 },
    ]
}

/// Pick learning tracks in interest-tag order, capped at five
///
/// Repeated or aliased tags add their tracks again; duplicates are kept.
pub fn select_learning_tracks(interests: &[String]) -> Vec<&'static LearningTrack> {
    let mut tracks: Vec<&'static LearningTrack> = interests
        .iter()
        .filter_map(|tag| tracks_for_interest(tag))
        .flat_map(|catalog| catalog.iter().take(2))
        .collect();

    if tracks.is_empty() {
        tracks.extend(GENERIC_TRACKS.iter());
    }

    tracks.truncate(MAX_LEARNING_TRACKS);
    tracks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_answers(goal: &str, level: &str, areas: &[&str]) -> TravelerAnswers {
        TravelerAnswers {
            goal: goal.to_string(),
            experience_level: level.to_string(),
            interest_areas: areas.iter().map(|s| s.to_string()).collect(),
            challenges: vec!["how to negotiate salary".to_string()],
            support_types: vec!["mentoring".to_string()],
            preferred_style: "practical".to_string(),
        }
    }

    #[test]
    fn test_transition_goal_wins() {
        let answers = create_answers("transicao", "advanced", &["technology"]);
        assert_eq!(classify(&answers), Archetype::TransitionExplorer);

        let answers = create_answers("change and open a business", "advanced", &[]);
        assert_eq!(classify(&answers), Archetype::TransitionExplorer);
    }

    #[test]
    fn test_entrepreneur_before_level() {
        let answers = create_answers("empreender", "advanced", &[]);
        assert_eq!(classify(&answers), Archetype::EntrepreneurialCreator);
    }

    #[test]
    fn test_advanced_level_specialist() {
        let answers = create_answers("grow", "avancado", &[]);
        assert_eq!(classify(&answers), Archetype::StrategicSpecialist);
    }

    #[test]
    fn test_fallback_growth_builder() {
        let answers = create_answers("grow", "intermediate", &[]);
        assert_eq!(classify(&answers), Archetype::GrowthBuilder);

        assert_eq!(classify(&TravelerAnswers::default()), Archetype::GrowthBuilder);
    }

    #[test]
    fn test_strength_tables() {
        let beginner = strengths(Some(ExperienceLevel::Beginner));
        assert_eq!(beginner[0].value, 65);
        assert_eq!(beginner[2].value, 70);

        let advanced = strengths(Some(ExperienceLevel::Advanced));
        assert_eq!(advanced[0].value, 80);
        assert_eq!(advanced[2].value, 85);

        let unknown = strengths(None);
        assert_eq!(unknown[0].value, 80);
        assert_eq!(unknown[2].value, 70);

        assert_eq!(gaps(Some(ExperienceLevel::Beginner))[1].value, 45);
        assert_eq!(gaps(Some(ExperienceLevel::Intermediate))[1].value, 65);
    }

    #[test]
    fn test_tracks_follow_tag_order() {
        let tracks = select_learning_tracks(&["Creativity".to_string(), "technology".to_string()]);
        let names: Vec<&str> = tracks.iter().map(|t| t.name).collect();

        assert_eq!(
            names,
            vec![
                "Design Thinking and UX/UI",
                "Communication and Storytelling",
                "Web Development Fundamentals",
                "Data Science and Analytics",
            ]
        );
    }

    #[test]
    fn test_repeated_tag_duplicates_tracks() {
        let tracks = select_learning_tracks(&["technology".to_string(), "tecnologia".to_string()]);

        assert_eq!(tracks.len(), 4);
        assert_eq!(tracks[0], tracks[2]);
        assert_eq!(tracks[1], tracks[3]);
    }

    #[test]
    fn test_tracks_truncated_to_five() {
        let tags: Vec<String> = ["technology", "business", "creativity"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let tracks = select_learning_tracks(&tags);

        assert_eq!(tracks.len(), MAX_LEARNING_TRACKS);
        assert_eq!(tracks[4].name, "Design Thinking and UX/UI");
    }

    #[test]
    fn test_generic_tracks_when_nothing_matches() {
        let tracks = select_learning_tracks(&["health".to_string()]);
        let names: Vec<&str> = tracks.iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["Self-Knowledge and Purpose", "Career Planning"]);

        assert_eq!(select_learning_tracks(&[]).len(), 2);
    }

    #[test]
    fn test_generate_plan_shape() {
        let plan = generate_plan(&create_answers("grow", "beginner", &["business"]));

        assert_eq!(plan.archetype.name, "Growth Builder");
        assert_eq!(plan.strengths.len(), 5);
        assert_eq!(plan.gaps.len(), 3);
        assert_eq!(plan.learning_tracks.len(), 2);
        assert_eq!(plan.timeline.len(), 6);
        assert_eq!(plan.tips.len(), 5);
    }
}
