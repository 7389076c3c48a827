//! Static reference tables: archetype definitions, learning-track catalog,
//! the development timeline and generic tips.

use crate::models::{Archetype, ArchetypeDefinition, LearningTrack, Milestone};

/// Maximum number of learning tracks in a plan
pub const MAX_LEARNING_TRACKS: usize = 5;

/// Indexed by `Archetype as usize`
pub static ARCHETYPES: [ArchetypeDefinition; 4] = [
    ArchetypeDefinition {
        kind: Archetype::TransitionExplorer,
        name: "Transition Explorer",
        description: "You are looking for new paths and ready to reinvent your professional trajectory.",
        icon: "🧭",
    },
    ArchetypeDefinition {
        kind: Archetype::GrowthBuilder,
        name: "Growth Builder",
        description: "Focused on developing skills and broadening horizons within your current field.",
        icon: "🌱",
    },
    ArchetypeDefinition {
        kind: Archetype::StrategicSpecialist,
        name: "Strategic Specialist",
        description: "Seeking to consolidate expertise and take on positions of leadership and influence.",
        icon: "🎯",
    },
    ArchetypeDefinition {
        kind: Archetype::EntrepreneurialCreator,
        name: "Entrepreneurial Creator",
        description: "Ready to build something of your own and turn ideas into reality.",
        icon: "🚀",
    },
];

impl Archetype {
    pub fn definition(self) -> &'static ArchetypeDefinition {
        &ARCHETYPES[self as usize]
    }
}

/// Curated tracks for one interest area, matched by any of its keys
#[derive(Debug)]
pub struct TrackCatalogEntry {
    pub keys: &'static [&'static str],
    pub tracks: [LearningTrack; 2],
}

pub static TRACK_CATALOG: [TrackCatalogEntry; 3] = [
    TrackCatalogEntry {
        keys: &["technology", "tecnologia"],
        tracks: [
            LearningTrack {
                name: "Web Development Fundamentals",
                description: "Learn HTML, CSS, JavaScript and modern frameworks",
                duration: "3-6 months",
            },
            LearningTrack {
                name: "Data Science and Analytics",
                description: "Python, SQL and analysis tooling",
                duration: "4-8 months",
            },
        ],
    },
    TrackCatalogEntry {
        keys: &["business", "negocios", "negócios"],
        tracks: [
            LearningTrack {
                name: "Strategic Business Management",
                description: "Planning, execution and business leadership",
                duration: "6-12 months",
            },
            LearningTrack {
                name: "Digital Marketing and Growth",
                description: "Strategies for growth and customer acquisition",
                duration: "3-6 months",
            },
        ],
    },
    TrackCatalogEntry {
        keys: &["creativity", "criatividade"],
        tracks: [
            LearningTrack {
                name: "Design Thinking and UX/UI",
                description: "Building user-centered experiences",
                duration: "4-8 months",
            },
            LearningTrack {
                name: "Communication and Storytelling",
                description: "The art of telling stories and engaging audiences",
                duration: "2-4 months",
            },
        ],
    },
];

/// Used when no interest area matches the catalog
pub static GENERIC_TRACKS: [LearningTrack; 2] = [
    LearningTrack {
        name: "Self-Knowledge and Purpose",
        description: "Discover your values and career objectives",
        duration: "2-3 months",
    },
    LearningTrack {
        name: "Career Planning",
        description: "Build a structured plan for your trajectory",
        duration: "1-2 months",
    },
];

/// Catalog tracks for an interest tag, matched case-insensitively against the keys
pub fn tracks_for_interest(tag: &str) -> Option<&'static [LearningTrack]> {
    let key = tag.to_lowercase();
    TRACK_CATALOG
        .iter()
        .find(|entry| entry.keys.contains(&key.as_str()))
        .map(|entry| &entry.tracks[..])
}

pub static TIMELINE: [Milestone; 6] = [
    Milestone {
        month: 1,
        title: "Foundations and Clarity",
        description: "Deepen self-knowledge and set clear goals",
    },
    Milestone {
        month: 2,
        title: "Skill Building",
        description: "Start courses and practice in the chosen areas",
    },
    Milestone {
        month: 3,
        title: "Portfolio Building",
        description: "Create hands-on projects that demonstrate learning",
    },
    Milestone {
        month: 4,
        title: "Strategic Networking",
        description: "Connect with professionals in your area of interest",
    },
    Milestone {
        month: 5,
        title: "First Opportunities",
        description: "Apply for positions or freelance projects",
    },
    Milestone {
        month: 6,
        title: "Review and Adjustments",
        description: "Review your progress and adjust the plan as needed",
    },
];

pub static TIPS: [&str; 5] = [
    "Dedicate at least one hour a day to study and practice",
    "Connect with 3-5 professionals in your area of interest each month",
    "Join online communities and events in your field",
    "Keep a learning journal to track your progress",
    "Seek constant feedback from mentors and peers",
];
