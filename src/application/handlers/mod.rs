//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

pub mod conversation;

pub use conversation::{
    BreathingExerciseCommand, BreathingExerciseHandler, BreathingExerciseResult,
    ConversationError, ResetConversationCommand, ResetConversationHandler, SendMessageCommand,
    SendMessageHandler, SendMessageResult, StartConversationCommand, StartConversationHandler,
    StartConversationResult,
};
