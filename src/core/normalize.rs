use serde::{Deserialize, Serialize};

/// Canonical experience levels, ordered from least to most experienced
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl ExperienceLevel {
    /// Parse a free-form level label by keyword detection
    ///
    /// Recognizes English stems and the Portuguese labels the intake forms use
    /// ("iniciante", "intermediario", "avancado").
    pub fn parse(raw: &str) -> Option<Self> {
        let label = raw.trim().to_lowercase();
        if label.contains("begin") || label.contains("inici") {
            Some(Self::Beginner)
        } else if label.contains("interm") {
            Some(Self::Intermediate)
        } else if label.contains("advan") || label.contains("avanc") || label.contains("avanç") {
            Some(Self::Advanced)
        } else {
            None
        }
    }

    /// Seniority bucket for an advisor's years of experience
    pub fn from_years(years: u32) -> Self {
        if years > 10 {
            Self::Advanced
        } else if years > 5 {
            Self::Intermediate
        } else {
            Self::Beginner
        }
    }

    /// Position in the ordered set {beginner, intermediate, advanced}
    #[inline]
    pub fn rank(self) -> u8 {
        self as u8
    }

    /// Number of levels separating two levels
    #[inline]
    pub fn distance(self, other: Self) -> u8 {
        self.rank().abs_diff(other.rank())
    }
}

/// What the traveler's goal answer expresses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalIntent {
    Transition,
    Entrepreneurship,
    Other,
}

const TRANSITION_KEYWORDS: &[&str] = &["change", "transition", "mudar", "transi"];
const ENTREPRENEUR_KEYWORDS: &[&str] = &["entrepreneur", "business", "empreend", "negócio", "negocio"];

impl GoalIntent {
    /// Parse the goal answer; transition keywords take priority over entrepreneurship
    pub fn parse(raw: &str) -> Self {
        let goal = raw.to_lowercase();
        if TRANSITION_KEYWORDS.iter().any(|k| goal.contains(k)) {
            Self::Transition
        } else if ENTREPRENEUR_KEYWORDS.iter().any(|k| goal.contains(k)) {
            Self::Entrepreneurship
        } else {
            Self::Other
        }
    }
}

/// Trim and lowercase a tag for comparison
#[inline]
pub fn normalize_tag(tag: &str) -> String {
    tag.trim().to_lowercase()
}

/// Case and surrounding-whitespace insensitive equality; blank tags never match
pub fn tags_equal(a: &str, b: &str) -> bool {
    let a = normalize_tag(a);
    !a.is_empty() && a == normalize_tag(b)
}

/// Either normalized string contains the other; blank strings never match
pub fn contains_either(a: &str, b: &str) -> bool {
    let a = normalize_tag(a);
    let b = normalize_tag(b);
    if a.is_empty() || b.is_empty() {
        return false;
    }
    a.contains(&b) || b.contains(&a)
}

/// Words longer than three characters, lowercased
pub fn significant_words(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|word| word.chars().count() > 3)
        .map(str::to_lowercase)
}

/// Both strings share at least one word longer than three characters
pub fn shares_significant_word(a: &str, b: &str) -> bool {
    let words: Vec<String> = significant_words(b).collect();
    significant_words(a).any(|word| words.contains(&word))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_experience_level_parse() {
        assert_eq!(ExperienceLevel::parse("beginner"), Some(ExperienceLevel::Beginner));
        assert_eq!(ExperienceLevel::parse(" Intermediate "), Some(ExperienceLevel::Intermediate));
        assert_eq!(ExperienceLevel::parse("ADVANCED"), Some(ExperienceLevel::Advanced));
        assert_eq!(ExperienceLevel::parse("iniciante"), Some(ExperienceLevel::Beginner));
        assert_eq!(ExperienceLevel::parse("intermediario"), Some(ExperienceLevel::Intermediate));
        assert_eq!(ExperienceLevel::parse("avancado"), Some(ExperienceLevel::Advanced));
        assert_eq!(ExperienceLevel::parse("expert"), None);
        assert_eq!(ExperienceLevel::parse(""), None);
    }

    #[test]
    fn test_experience_distance() {
        use ExperienceLevel::*;
        assert_eq!(Beginner.distance(Beginner), 0);
        assert_eq!(Beginner.distance(Intermediate), 1);
        assert_eq!(Advanced.distance(Beginner), 2);
    }

    #[test]
    fn test_from_years() {
        assert_eq!(ExperienceLevel::from_years(0), ExperienceLevel::Beginner);
        assert_eq!(ExperienceLevel::from_years(5), ExperienceLevel::Beginner);
        assert_eq!(ExperienceLevel::from_years(6), ExperienceLevel::Intermediate);
        assert_eq!(ExperienceLevel::from_years(10), ExperienceLevel::Intermediate);
        assert_eq!(ExperienceLevel::from_years(11), ExperienceLevel::Advanced);
    }

    #[test]
    fn test_goal_intent_priority() {
        assert_eq!(GoalIntent::parse("transicao"), GoalIntent::Transition);
        assert_eq!(GoalIntent::parse("mudar"), GoalIntent::Transition);
        assert_eq!(GoalIntent::parse("change careers to start a business"), GoalIntent::Transition);
        assert_eq!(GoalIntent::parse("empreender"), GoalIntent::Entrepreneurship);
        assert_eq!(GoalIntent::parse("grow in my field"), GoalIntent::Other);
    }

    #[test]
    fn test_tag_comparison() {
        assert!(tags_equal(" Pratico ", "pratico"));
        assert!(!tags_equal("", ""));
        assert!(contains_either("career change", "Change"));
        assert!(contains_either("data", "big data"));
        assert!(!contains_either("", "data"));
    }

    #[test]
    fn test_shared_words() {
        assert!(shares_significant_word("salary negotiation", "negotiation tactics"));
        assert!(!shares_significant_word("how to ask", "ask for help"));
        assert!(!shares_significant_word("", "anything"));
    }
}
