//! Reply Engine Port - Anything that answers a user turn.
//!
//! The rule-based engine is the only implementation today. Handlers depend on
//! this trait so a different responder can be swapped in without touching
//! the conversation flow.

use crate::domain::dialogue::{ConversationContext, EngineOutput, RuleEngine};

/// Port for producing one reply per user turn.
///
/// Implementations must be deterministic for a given `(utterance, context)`
/// and must not fail.
pub trait ReplyEngine: Send + Sync {
    fn reply(&self, utterance: &str, context: &ConversationContext) -> EngineOutput;
}

impl ReplyEngine for RuleEngine {
    fn reply(&self, utterance: &str, context: &ConversationContext) -> EngineOutput {
        RuleEngine::reply(self, utterance, context)
    }
}
