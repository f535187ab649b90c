//! Conversation domains and the keyword classifier that picks one.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Top-level conversational domain used to select a reply template family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Interpersonal,
    Academic,
    Workplace,
    Emotional,
}

impl Category {
    /// All categories in classification priority order.
    pub const ALL: [Category; 4] = [
        Category::Interpersonal,
        Category::Academic,
        Category::Workplace,
        Category::Emotional,
    ];

    /// Keywords whose presence (as a plain substring) selects this category.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Self::Interpersonal => &[
                "roommate", "friend", "partner", "argue", "argument", "fight", "yell", "yelled",
                "angry", "upset",
            ],
            Self::Academic => &[
                "group",
                "project",
                "professor",
                "grade",
                "deadline",
                "assignment",
                "class",
            ],
            Self::Workplace => &["boss", "manager", "coworker", "office", "job", "work"],
            Self::Emotional => &[
                "anxious",
                "anxiety",
                "sad",
                "stressed",
                "overwhelmed",
                "panic",
                "depressed",
            ],
        }
    }

    /// Returns the wire name of the category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Interpersonal => "interpersonal",
            Self::Academic => "academic",
            Self::Workplace => "workplace",
            Self::Emotional => "emotional",
        }
    }

    fn matches(&self, lowered: &str) -> bool {
        self.keywords().iter().any(|keyword| lowered.contains(keyword))
    }
}

impl Default for Category {
    fn default() -> Self {
        Self::Interpersonal
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps an utterance to a category.
///
/// The first category in [`Category::ALL`] with any keyword contained in the
/// lower-cased text wins. Matching is raw substring containment, so "workroom"
/// counts as "work". Falls back to [`Category::Interpersonal`].
pub fn classify(utterance: &str) -> Category {
    let lowered = utterance.to_lowercase();
    Category::ALL
        .into_iter()
        .find(|category| category.matches(&lowered))
        .unwrap_or_default()
}
