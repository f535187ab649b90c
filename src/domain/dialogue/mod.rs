//! Dialogue domain module.
//!
//! The rule-based coaching engine: keyword classification, strong-emotion
//! detection, context extraction from user history, message scripts and
//! structured reply composition. Everything here is pure and synchronous.

mod category;
mod emotion;
mod engine;
mod reply;
mod script;
mod signals;
mod turn;

pub use category::{classify, Category};
pub use emotion::{has_strong_emotion, STRONG_EMOTION_PHRASES};
pub use engine::{
    get_bot_reply, ComposedReply, ConversationContext, EngineOutput, ReplyBranch, RuleEngine,
};
pub use reply::{format_reply, StructuredReply};
pub use script::{generate_script, script_lines};
pub use signals::{extract_context, ContextSignals, Issue};
pub use turn::{user_text, Sender, Turn};
