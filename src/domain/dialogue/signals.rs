//! Context extraction from the accumulated user history.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::turn::{user_text, Turn};

/// Finer-grained topic inferred from everything the user has said.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Issue {
    Chores,
    Respect,
    Money,
    General,
}

impl Issue {
    /// Issues with keyword rules, in detection order. `General` is the fallback.
    const DETECTION_ORDER: [(Issue, &'static [&'static str]); 3] = [
        (Issue::Chores, &["dish", "dishes", "clean", "chores"]),
        (Issue::Respect, &["late", "ignored", "disrespect"]),
        (Issue::Money, &["money", "rent", "bill"]),
    ];

    /// Detects the issue in already lower-cased text. First match wins.
    pub fn detect(lowered: &str) -> Self {
        Self::DETECTION_ORDER
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|k| lowered.contains(k)))
            .map(|(issue, _)| *issue)
            .unwrap_or(Issue::General)
    }

    /// Returns the wire name of the issue.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Chores => "chores",
            Self::Respect => "respect",
            Self::Money => "money",
            Self::General => "general",
        }
    }
}

impl Default for Issue {
    fn default() -> Self {
        Self::General
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Situational facts derived from user history. Never stored.
///
/// `bad_day` and `apologized_tone` are computed for every turn but no reply
/// branch reads them yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContextSignals {
    pub issue: Issue,
    pub bad_day: bool,
    pub apologized_tone: bool,
}

impl ContextSignals {
    /// Derives signals from raw (not yet lower-cased) user text.
    pub fn from_user_text(text: &str) -> Self {
        let lowered = text.to_lowercase();
        let contains_any = |needles: &[&str]| needles.iter().any(|n| lowered.contains(n));

        Self {
            issue: Issue::detect(&lowered),
            // "work" alone is enough
            bad_day: contains_any(&["bad day", "work", "stressed"]),
            apologized_tone: contains_any(&["feel bad", "i feel very bad", "regret"]),
        }
    }
}

/// Scans every user-authored turn in `history` and derives [`ContextSignals`].
///
/// Bot turns are ignored. The result only depends on which user turns exist,
/// so the issue can only move from `General` to something more specific as
/// history grows.
pub fn extract_context(history: &[Turn]) -> ContextSignals {
    ContextSignals::from_user_text(&user_text(history))
}
