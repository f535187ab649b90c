//! Conversation aggregate.
//!
//! A conversation owns the chat transcript and the last category the engine
//! reported. It is the caller side of the engine: it hands its history to the
//! engine each turn and records what comes back.

use serde::{Deserialize, Serialize};

use super::coaching::BREATHING_EXERCISE;
use crate::domain::dialogue::{Category, ConversationContext, EngineOutput, Turn};
use crate::domain::foundation::ConversationId;

/// A single coaching conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    id: ConversationId,
    turns: Vec<Turn>,
    last_category: Option<Category>,
}

impl Conversation {
    /// Starts a conversation whose only turn is the bot greeting.
    pub fn start(id: ConversationId, greeting: impl Into<String>) -> Self {
        Self {
            id,
            turns: vec![Turn::bot(greeting)],
            last_category: None,
        }
    }

    pub fn id(&self) -> ConversationId {
        self.id
    }

    /// All turns, oldest first.
    pub fn history(&self) -> &[Turn] {
        &self.turns
    }

    pub fn last_category(&self) -> Option<Category> {
        self.last_category
    }

    /// Number of recorded turns, greeting included.
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Context to hand to the engine for the next utterance.
    pub fn context(&self) -> ConversationContext {
        ConversationContext::new(self.last_category, self.turns.clone())
    }

    /// Records a user utterance followed by the engine's reply.
    pub fn record_exchange(&mut self, utterance: impl Into<String>, output: &EngineOutput) {
        self.turns.push(Turn::user(utterance));
        self.turns.push(Turn::bot(output.reply.clone()));
        self.last_category = Some(output.category);
    }

    /// Appends one bot turn.
    pub fn record_bot(&mut self, text: impl Into<String>) {
        self.turns.push(Turn::bot(text));
    }

    /// Appends the breathing exercise and returns the steps that were added.
    pub fn run_breathing_exercise(&mut self) -> Vec<String> {
        let steps: Vec<String> = BREATHING_EXERCISE.iter().map(|s| s.to_string()).collect();
        self.turns.extend(steps.iter().cloned().map(Turn::bot));
        steps
    }

    /// Clears the transcript back to a fresh greeting.
    pub fn reset(&mut self, greeting: impl Into<String>) {
        self.turns.clear();
        self.turns.push(Turn::bot(greeting));
        self.last_category = None;
    }
}
