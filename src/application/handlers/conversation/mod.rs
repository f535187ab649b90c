//! Conversation command handlers.
//!
//! Handles starting conversations, answering messages, the breathing quick
//! action and resets.

mod breathing_exercise;
mod errors;
mod reset_conversation;
mod send_message;
mod start_conversation;

pub use breathing_exercise::{
    BreathingExerciseCommand, BreathingExerciseHandler, BreathingExerciseResult,
};
pub use errors::ConversationError;
pub use reset_conversation::{ResetConversationCommand, ResetConversationHandler};
pub use send_message::{SendMessageCommand, SendMessageHandler, SendMessageResult};
pub use start_conversation::{
    StartConversationCommand, StartConversationHandler, StartConversationResult,
};
