use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

use crate::core::normalize::ExperienceLevel;

/// Questionnaire answers submitted by a traveler at the end of the intake wizard
///
/// Every field is optional on the wire. List fields that are missing or not
/// arrays deserialize to empty lists, and text fields that are null or not
/// strings deserialize to "", so the engine can score partial records.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct TravelerAnswers {
    #[validate(length(min = 1, message = "select a goal"))]
    #[serde(default, deserialize_with = "lenient_text")]
    pub goal: String,
    #[validate(length(min = 1, message = "select an experience level"))]
    #[serde(rename = "experienceLevel", default, deserialize_with = "lenient_text")]
    pub experience_level: String,
    #[validate(length(min = 1, message = "select at least one interest area"))]
    #[serde(rename = "interestAreas", default, deserialize_with = "lenient_tags")]
    pub interest_areas: Vec<String>,
    #[validate(length(min = 1, message = "select at least one challenge"))]
    #[serde(default, deserialize_with = "lenient_tags")]
    pub challenges: Vec<String>,
    #[validate(length(min = 1, message = "select at least one support type"))]
    #[serde(rename = "supportTypes", default, deserialize_with = "lenient_tags")]
    pub support_types: Vec<String>,
    #[validate(length(min = 1, message = "select an advisor style"))]
    #[serde(rename = "preferredStyle", default, deserialize_with = "lenient_text")]
    pub preferred_style: String,
}

impl TravelerAnswers {
    /// Parsed experience level, `None` when the label is not recognized
    pub fn level(&self) -> Option<ExperienceLevel> {
        ExperienceLevel::parse(&self.experience_level)
    }
}

/// A traveler's answers tagged with the traveler they belong to, for bulk review
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TravelerSubmission {
    #[serde(rename = "travelerId")]
    pub traveler_id: String,
    #[serde(default)]
    pub answers: TravelerAnswers,
}

/// Advisor (mentor) profile as produced by advisor onboarding
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvisorProfile {
    #[serde(default, deserialize_with = "lenient_text")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: String,
    /// Inactive advisors are left out of bulk reviews
    #[serde(default = "default_true", deserialize_with = "lenient_active")]
    pub active: bool,
    #[serde(rename = "practiceAreas", default, deserialize_with = "lenient_tags")]
    pub practice_areas: Vec<String>,
    #[serde(rename = "experienceLevel", default, deserialize_with = "lenient_text")]
    pub experience_level: String,
    /// Fallback for records that store seniority in years instead of a level label
    #[serde(rename = "yearsExperience", default, deserialize_with = "lenient_years")]
    pub years_experience: Option<u32>,
    #[serde(rename = "preferredTopics", default, deserialize_with = "lenient_tags")]
    pub preferred_topics: Vec<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub style: String,
    #[serde(default, deserialize_with = "lenient_tags")]
    pub audiences: Vec<String>,
    #[serde(rename = "preferredFormat", default, deserialize_with = "lenient_text")]
    pub preferred_format: String,
}

impl Default for AdvisorProfile {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            active: true,
            practice_areas: Vec::new(),
            experience_level: String::new(),
            years_experience: None,
            preferred_topics: Vec::new(),
            style: String::new(),
            audiences: Vec::new(),
            preferred_format: String::new(),
        }
    }
}

impl AdvisorProfile {
    /// Parsed experience level, derived from years of experience when the label is unusable
    pub fn level(&self) -> Option<ExperienceLevel> {
        ExperienceLevel::parse(&self.experience_level)
            .or_else(|| self.years_experience.map(ExperienceLevel::from_years))
    }
}

/// Accept any JSON value for a tag list: arrays keep their string elements,
/// everything else becomes an empty list
fn lenient_tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                serde_json::Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}

fn default_true() -> bool {
    true
}

/// Strings stay as they are; null, numbers and other values become ""
fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => s,
        _ => String::new(),
    })
}

/// Whole non-negative numbers that fit in u32; anything else is treated as unknown
fn lenient_years<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_u64().and_then(|years| u32::try_from(years).ok()))
}

/// Booleans stay as they are; a missing or malformed flag counts as active
fn lenient_active<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(serde_json::Value::deserialize(deserializer)?.as_bool().unwrap_or(true))
}

/// Career archetype assigned to a traveler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Archetype {
    TransitionExplorer,
    GrowthBuilder,
    StrategicSpecialist,
    EntrepreneurialCreator,
}

/// Static display data for an archetype
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct ArchetypeDefinition {
    pub kind: Archetype,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

/// Curated learning recommendation
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct LearningTrack {
    pub name: &'static str,
    pub description: &'static str,
    pub duration: &'static str,
}

/// One month of the development timeline
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Milestone {
    pub month: u8,
    pub title: &'static str,
    pub description: &'static str,
}

/// Named strength or gap score (0-100)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NamedScore {
    pub name: &'static str,
    pub value: u8,
}

/// Development plan derived from a traveler's answers
#[derive(Debug, Clone, Serialize)]
pub struct DevelopmentPlan {
    pub archetype: &'static ArchetypeDefinition,
    pub strengths: Vec<NamedScore>,
    pub gaps: Vec<NamedScore>,
    #[serde(rename = "learningTracks")]
    pub learning_tracks: Vec<&'static LearningTrack>,
    pub timeline: &'static [Milestone],
    pub tips: &'static [&'static str],
}

/// Advisor chosen for a traveler together with its compatibility score
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MatchResult<'a> {
    pub advisor: &'a AdvisorProfile,
    /// Position of the advisor in the candidate roster
    pub index: usize,
    pub score: u8,
}

/// Best advisor for one traveler in a bulk matching review
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SuggestedMatch<'a> {
    #[serde(rename = "travelerId")]
    pub traveler_id: &'a str,
    pub advisor: &'a AdvisorProfile,
    pub score: u8,
}

/// Points awarded by each compatibility factor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub area: f64,
    pub experience: f64,
    pub style: f64,
    pub topic: f64,
    /// Final compatibility percentage
    pub total: u8,
}

/// Scoring weights
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub area: f64,
    pub experience: f64,
    pub style: f64,
    pub topic: f64,
}

impl ScoringWeights {
    /// Sum of all four weights, the denominator of every score
    pub fn total(&self) -> f64 {
        self.area.max(0.0) + self.experience.max(0.0) + self.style.max(0.0) + self.topic.max(0.0)
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            area: 35.0,
            experience: 15.0,
            style: 25.0,
            topic: 25.0,
        }
    }
}
