//! Conversation turns as seen by the dialogue engine.

use serde::{Deserialize, Serialize};

/// Who authored a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    /// The person asking for help.
    User,
    /// The coaching bot.
    Bot,
}

impl Sender {
    /// Returns true for user-authored turns.
    pub fn is_user(&self) -> bool {
        matches!(self, Self::User)
    }
}

/// One message exchanged by either party.
///
/// Turns are immutable once recorded; the engine only ever reads them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub sender: Sender,
    pub text: String,
}

impl Turn {
    /// Creates a user turn.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            text: text.into(),
        }
    }

    /// Creates a bot turn.
    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Bot,
            text: text.into(),
        }
    }
}

/// Joins the text of every user-authored turn with single spaces.
///
/// Bot turns are skipped. Case is left untouched.
pub fn user_text(history: &[Turn]) -> String {
    history
        .iter()
        .filter(|turn| turn.sender.is_user())
        .map(|turn| turn.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
